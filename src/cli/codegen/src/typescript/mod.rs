/* src/cli/codegen/src/typescript/mod.rs */

mod render;
mod tables;

#[cfg(test)]
mod tests;

pub use render::{
  BODY_INTERFACE, PARAMETERS_INTERFACE, QUERY_INTERFACE, RESPONSE_INTERFACE, render,
  render_declaration,
};
pub use tables::{MethodTable, ParameterSchema, RenderOptions, SchemaTables};
