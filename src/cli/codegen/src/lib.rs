/* src/cli/codegen/src/lib.rs */

mod coalesce;
mod layout;
mod method;
mod paths;
mod reference;
mod route;
mod route_set;
mod session;
mod source;
mod typescript;
mod walk;
mod watch;

#[cfg(test)]
mod tests;

pub use coalesce::Coalescer;
pub use layout::{HANDLER_ROOTS, ServerLayout};
pub use method::Method;
pub use paths::{import_specifier, relative_path};
pub use reference::{ensure_reference, reference_directive};
pub use route::{HandlerDescriptor, Route, bracket_params, colonize, extract_route};
pub use route_set::{FileEvent, FileEventKind, RouteSet};
pub use session::{Flush, Session, write_if_changed};
pub use source::{FileSystemSource, RouteSource, RouterSnapshot, RouterSource};
pub use typescript::{
  BODY_INTERFACE, MethodTable, PARAMETERS_INTERFACE, ParameterSchema, QUERY_INTERFACE,
  RESPONSE_INTERFACE, RenderOptions, SchemaTables, render, render_declaration,
};
pub use walk::read_dir_recursive;
pub use watch::watch_routes;
