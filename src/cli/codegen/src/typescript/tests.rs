/* src/cli/codegen/src/typescript/tests.rs */

use std::path::{Path, PathBuf};

use super::render::quote_key;
use super::*;
use crate::method::Method;
use crate::route::{Route, extract_route};

fn options() -> RenderOptions {
  RenderOptions::new("routegen", "/p/.routegen/types")
}

fn route(rel: &str) -> Route {
  extract_route(Path::new("/p/server"), rel)
}

fn manual(method: Method, path: &str, handler: &str, parameters: &[&str]) -> Route {
  Route {
    method,
    path: path.to_string(),
    handler: PathBuf::from(handler),
    parameters: parameters.iter().map(|p| p.to_string()).collect(),
  }
}

#[test]
fn item_and_group_name_declaration() {
  let routes = vec![route("/api/item.get.ts"), route("/api/[group]/[name].post.ts")];
  let expected = r#"// Auto-generated by routegen. Do not edit.
declare module "routegen" {
  import type { MaybeRef } from "vue";

  interface InternalApiQuery {
    "/api/:group/:name": {
      post: import('../../server/api/[group]/[name].post').Query;
    };
    "/api/item": {
      get: import('../../server/api/item.get').Query;
    };
  }
  interface InternalApiBody {
    "/api/:group/:name": {
      post: import('../../server/api/[group]/[name].post').Body;
    };
    "/api/item": {
      get: import('../../server/api/item.get').Body;
    };
  }
  interface InternalApiResponse {
    "/api/:group/:name": {
      post: Awaited<ReturnType<typeof import('../../server/api/[group]/[name].post').default>>;
    };
    "/api/item": {
      get: Awaited<ReturnType<typeof import('../../server/api/item.get').default>>;
    };
  }
  interface InternalApiParameters {
    "/api/:group/:name": {
      array: [MaybeRef<string | number>, MaybeRef<string | number>];
      object: { group: MaybeRef<string | number>; name: MaybeRef<string | number> };
    };
  }
}
"#;
  assert_eq!(render(&routes, &options()), expected);
}

#[test]
fn empty_route_list_renders_empty_tables_without_import() {
  let routes: Vec<Route> = Vec::new();
  let out = render(&routes, &options());
  assert_eq!(
    out,
    "// Auto-generated by routegen. Do not edit.\n\
     declare module \"routegen\" {\n  \
     interface InternalApiQuery {}\n  \
     interface InternalApiBody {}\n  \
     interface InternalApiResponse {}\n  \
     interface InternalApiParameters {}\n\
     }\n"
  );
}

#[test]
fn private_routes_never_appear() {
  let routes = vec![
    route("/api/_internal/thing.get.ts"),
    route("/routes/_hidden/[id].ts"),
    route("/api/item.get.ts"),
  ];
  let tables = SchemaTables::from_routes(&routes, &options());
  assert_eq!(tables.query.keys().collect::<Vec<_>>(), vec!["/api/item"]);
  assert!(tables.parameters.is_empty());

  let out = render(&routes, &options());
  assert!(!out.contains("_internal"));
  assert!(!out.contains("_hidden"));
  assert!(!out.contains("MaybeRef"));
}

#[test]
fn routes_outside_handler_roots_are_excluded() {
  let routes = vec![manual(Method::Get, "/health", "/p/server/health.ts", &[])];
  let tables = SchemaTables::from_routes(&routes, &options());
  assert_eq!(tables, SchemaTables::default());
}

#[test]
fn output_is_independent_of_route_order() {
  let mut routes = vec![
    route("/api/item.get.ts"),
    route("/api/item.post.ts"),
    route("/api/item.ts"),
    route("/routes/feed/[id].get.ts"),
    route("/api/[group]/[name].post.ts"),
  ];
  let forward = render(&routes, &options());
  routes.reverse();
  assert_eq!(render(&routes, &options()), forward);
  routes.swap(0, 3);
  assert_eq!(render(&routes, &options()), forward);
}

#[test]
fn render_is_idempotent() {
  let routes = vec![route("/api/item.get.ts"), route("/routes/feed.ts")];
  assert_eq!(render(&routes, &options()), render(&routes, &options()));
}

#[test]
fn methods_sorted_with_default_last() {
  let routes =
    vec![route("/api/item.ts"), route("/api/item.delete.ts"), route("/api/item.get.ts")];
  let tables = SchemaTables::from_routes(&routes, &options());
  let methods: Vec<_> = tables.query["/api/item"].keys().copied().collect();
  assert_eq!(methods, vec![Method::Get, Method::Delete, Method::Default]);

  let out = render(&routes, &options());
  assert!(out.contains("      default: import('../../server/api/item').Query;\n"));
}

#[test]
fn colliding_keys_keep_the_last_route() {
  let routes = vec![
    manual(Method::Get, "/api/item", "/p/server/api/item.get.ts", &[]),
    manual(Method::Get, "/api/item", "/p/server/api/item.GET.ts", &[]),
  ];
  let tables = SchemaTables::from_routes(&routes, &options());
  assert_eq!(tables.query["/api/item"][&Method::Get], "import('../../server/api/item.GET').Query");
}

#[test]
fn parameters_recorded_by_first_route_of_a_path() {
  let routes = vec![
    manual(Method::Get, "/api/:id", "/p/server/api/[id].get.ts", &["id"]),
    manual(Method::Post, "/api/:id", "/p/server/api/[id].post.ts", &["other"]),
  ];
  let tables = SchemaTables::from_routes(&routes, &options());
  assert_eq!(tables.parameters.len(), 1);
  assert_eq!(tables.parameters["/api/:id"].object, "{ id: MaybeRef<string | number> }");
}

#[test]
fn parameter_names_that_are_not_identifiers_are_quoted() {
  let routes = vec![route("/routes/docs/[...slug].ts")];
  let tables = SchemaTables::from_routes(&routes, &options());
  assert_eq!(
    tables.parameters["/routes/docs/:...slug"],
    ParameterSchema {
      array: "[MaybeRef<string | number>]".to_string(),
      object: "{ \"...slug\": MaybeRef<string | number> }".to_string(),
    }
  );
}

#[test]
fn custom_wrapper_and_module() {
  let mut opts = RenderOptions::new("#api-types", "/p/types");
  opts.reactive_wrapper = "Ref".to_string();
  opts.reactive_import = "@vue/reactivity".to_string();

  let out = render(&[route("/api/users/[id].get.ts")], &opts);
  assert!(out.contains("declare module \"#api-types\" {\n"));
  assert!(out.contains("  import type { Ref } from \"@vue/reactivity\";\n"));
  assert!(out.contains("array: [Ref<string | number>];"));
  assert!(out.contains("import('../server/api/users/[id].get').Query"));
}

#[test]
fn handler_inside_types_dir_gets_dot_slash() {
  let opts = RenderOptions::new("routegen", "/p/server");
  let out = render(&[route("/api/item.get.ts")], &opts);
  assert!(out.contains("import('./api/item.get').Query"));
}

#[test]
fn key_quoting() {
  assert_eq!(quote_key("get"), "get");
  assert_eq!(quote_key("_private$"), "_private$");
  assert_eq!(quote_key("/api/item"), "\"/api/item\"");
  assert_eq!(quote_key("1st"), "\"1st\"");
  assert_eq!(quote_key("...slug"), "\"...slug\"");
  assert_eq!(quote_key(""), "\"\"");
}

#[test]
fn declaration_from_prebuilt_tables() {
  let mut tables = SchemaTables::default();
  tables
    .response
    .entry("/api/ping".to_string())
    .or_default()
    .insert(Method::Head, "void".to_string());
  let out = render_declaration(&tables, &options());
  assert!(out.contains("  interface InternalApiQuery {}\n"));
  assert!(out.contains("  interface InternalApiResponse {\n    \"/api/ping\": {\n      head: void;\n    };\n  }\n"));
}
