/* src/cli/codegen/src/typescript/render.rs */

use std::collections::BTreeMap;

use super::tables::{MethodTable, ParameterSchema, RenderOptions, SchemaTables};
use crate::route::Route;

pub const QUERY_INTERFACE: &str = "InternalApiQuery";
pub const BODY_INTERFACE: &str = "InternalApiBody";
pub const RESPONSE_INTERFACE: &str = "InternalApiResponse";
pub const PARAMETERS_INTERFACE: &str = "InternalApiParameters";

/// Wrap name in quotes unless it is a plain JS identifier.
pub(super) fn quote_key(name: &str) -> String {
  let mut chars = name.chars();
  let is_ident = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
  if is_ident { name.to_string() } else { format!("\"{}\"", name.replace('"', "\\\"")) }
}

/// Render the route list into the declaration module text.
pub fn render<'a>(routes: impl IntoIterator<Item = &'a Route>, options: &RenderOptions) -> String {
  render_declaration(&SchemaTables::from_routes(routes, options), options)
}

/// Serialize the four tables. Keys come out of `BTreeMap`s, so the text depends
/// only on the table contents, never on route order.
pub fn render_declaration(tables: &SchemaTables, options: &RenderOptions) -> String {
  let mut out = String::new();
  out.push_str("// Auto-generated by routegen. Do not edit.\n");
  out.push_str(&format!("declare module \"{}\" {{\n", options.module_name));
  if !tables.parameters.is_empty() {
    out.push_str(&format!(
      "  import type {{ {} }} from \"{}\";\n\n",
      options.reactive_wrapper, options.reactive_import
    ));
  }
  out.push_str(&render_method_table(QUERY_INTERFACE, &tables.query));
  out.push_str(&render_method_table(BODY_INTERFACE, &tables.body));
  out.push_str(&render_method_table(RESPONSE_INTERFACE, &tables.response));
  out.push_str(&render_parameter_table(PARAMETERS_INTERFACE, &tables.parameters));
  out.push_str("}\n");
  out
}

fn render_method_table(name: &str, table: &MethodTable) -> String {
  if table.is_empty() {
    return format!("  interface {name} {{}}\n");
  }
  let mut out = format!("  interface {name} {{\n");
  for (path, methods) in table {
    out.push_str(&format!("    {}: {{\n", quote_key(path)));
    for (method, ty) in methods {
      out.push_str(&format!("      {}: {ty};\n", quote_key(method.as_str())));
    }
    out.push_str("    };\n");
  }
  out.push_str("  }\n");
  out
}

fn render_parameter_table(name: &str, table: &BTreeMap<String, ParameterSchema>) -> String {
  if table.is_empty() {
    return format!("  interface {name} {{}}\n");
  }
  let mut out = format!("  interface {name} {{\n");
  for (path, schema) in table {
    out.push_str(&format!("    {}: {{\n", quote_key(path)));
    out.push_str(&format!("      array: {};\n", schema.array));
    out.push_str(&format!("      object: {};\n", schema.object));
    out.push_str("    };\n");
  }
  out.push_str("  }\n");
  out
}
