/* src/cli/codegen/src/typescript/tables.rs */

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::method::Method;
use crate::paths::{import_specifier, strip_extension};
use crate::route::Route;

/// Settings shared by table construction and serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
  /// Name of the ambient module the tables are declared in.
  pub module_name: String,
  /// Directory the declaration file is written to; handler imports are relative to it.
  pub types_dir: PathBuf,
  /// Reactive wrapper accepted for each path parameter (`MaybeRef`).
  pub reactive_wrapper: String,
  /// Module the wrapper type is imported from (`vue`).
  pub reactive_import: String,
}

impl RenderOptions {
  pub fn new(module_name: impl Into<String>, types_dir: impl Into<PathBuf>) -> Self {
    Self {
      module_name: module_name.into(),
      types_dir: types_dir.into(),
      reactive_wrapper: "MaybeRef".to_string(),
      reactive_import: "vue".to_string(),
    }
  }

  fn param_type(&self) -> String {
    format!("{}<string | number>", self.reactive_wrapper)
  }
}

/// Two renderings of a route's path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSchema {
  /// Positional tuple form: `[MaybeRef<string | number>, ...]`.
  pub array: String,
  /// Named object form: `{ group: MaybeRef<string | number>; ... }`.
  pub object: String,
}

pub type MethodTable = BTreeMap<String, BTreeMap<Method, String>>;

/// Intermediate representation of the generated declaration.
/// Derived from the route list on every render, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaTables {
  pub query: MethodTable,
  pub body: MethodTable,
  pub response: MethodTable,
  pub parameters: BTreeMap<String, ParameterSchema>,
}

impl SchemaTables {
  pub fn from_routes<'a>(
    routes: impl IntoIterator<Item = &'a Route>,
    options: &RenderOptions,
  ) -> Self {
    let mut tables = Self::default();
    for route in routes.into_iter().filter(|r| r.is_public()) {
      let module = handler_module(route, options);
      let path = route.path.clone();

      tables
        .query
        .entry(path.clone())
        .or_default()
        .insert(route.method, format!("import('{module}').Query"));
      tables
        .body
        .entry(path.clone())
        .or_default()
        .insert(route.method, format!("import('{module}').Body"));
      tables
        .response
        .entry(path.clone())
        .or_default()
        .insert(route.method, format!("Awaited<ReturnType<typeof import('{module}').default>>"));

      if !route.parameters.is_empty() && !tables.parameters.contains_key(&path) {
        tables.parameters.insert(path, parameter_schema(&route.parameters, options));
      }
    }
    tables
  }
}

/// Import specifier of the handler relative to the declaration directory, extension stripped.
fn handler_module(route: &Route, options: &RenderOptions) -> String {
  let specifier = import_specifier(&options.types_dir, &route.handler);
  strip_extension(&specifier).to_string()
}

fn parameter_schema(parameters: &[String], options: &RenderOptions) -> ParameterSchema {
  let ty = options.param_type();
  let array = format!("[{}]", vec![ty.as_str(); parameters.len()].join(", "));
  let fields: Vec<String> =
    parameters.iter().map(|p| format!("{}: {ty}", super::render::quote_key(p))).collect();
  let object = format!("{{ {} }}", fields.join("; "));
  ParameterSchema { array, object }
}
