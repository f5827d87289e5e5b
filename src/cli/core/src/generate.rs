/* src/cli/core/src/generate.rs */

// `routegen generate` and `routegen routes`: one-shot route discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use routegen::{FileSystemSource, Method, Route, RouterSnapshot, RouterSource, Session};
use serde::Serialize;

use crate::config::RoutegenConfig;
use crate::ui::{self, DIM, GREEN, RESET, YELLOW};

/// Where the route list comes from and where the declaration goes.
/// Relative CLI paths are resolved against the invocation directory.
pub struct Inputs<'a> {
  pub config: &'a RoutegenConfig,
  pub root: &'a Path,
  pub router: Option<PathBuf>,
  pub out_file: Option<PathBuf>,
}

/// Build a session and fill its route set from the router snapshot when one is
/// given, from a directory walk otherwise.
pub fn build_session(inputs: &Inputs<'_>) -> Result<Session> {
  let (config, root) = (inputs.config, inputs.root);
  let layout = config.layout(root);
  let out_file = inputs.out_file.clone().unwrap_or_else(|| config.out_file(root));
  let mut session = Session::new(layout.clone(), out_file, config.render_options())
    .with_reference_file(config.reference_file(root));

  match inputs.router {
    Some(ref path) => {
      let snapshot = RouterSnapshot::load(path)?;
      session.rebuild(&RouterSource::new(&layout, snapshot))?;
    }
    None => {
      session.rebuild(&FileSystemSource::new(&layout))?;
    }
  }
  Ok(session)
}

pub fn run_generate(inputs: &Inputs<'_>) -> Result<()> {
  ui::arrow("generating route types");
  let session = build_session(inputs)?;
  let written = session.persist()?;

  let count = session.routes().iter().filter(|r| r.is_public()).count();
  let out = display_path(inputs.root, session.out_file());
  if written {
    ui::detail_ok(&format!("{out} {DIM}({count} public routes){RESET}"));
  } else {
    ui::detail(&format!("{out} {DIM}unchanged ({count} public routes){RESET}"));
  }
  if let Some(ref reference) = inputs.config.generate.reference_file {
    ui::detail(&format!("{DIM}referenced from {reference}{RESET}"));
  }
  ui::ok("generate complete");
  Ok(())
}

#[derive(Serialize)]
struct RouteRow<'a> {
  #[serde(flatten)]
  route: &'a Route,
  public: bool,
}

pub fn run_routes(inputs: &Inputs<'_>, json: bool) -> Result<()> {
  let session = build_session(inputs)?;
  let mut routes: Vec<&Route> = session.routes().iter().collect();
  routes.sort_by(|a, b| a.path.cmp(&b.path).then(a.method.cmp(&b.method)));

  if json {
    let rows: Vec<_> = routes.iter().map(|r| RouteRow { route: r, public: r.is_public() }).collect();
    let out = serde_json::to_string_pretty(&rows).context("failed to serialize routes")?;
    println!("{out}");
    return Ok(());
  }

  if routes.is_empty() {
    let server = display_path(inputs.root, &session.layout().server_dir);
    ui::warn(&format!("no handlers found under {server}"));
    return Ok(());
  }
  for route in routes {
    let method = method_label(route.method);
    let handler = display_path(inputs.root, &route.handler);
    let private = if route.is_public() { "" } else { " (private)" };
    println!("  {method} {}{YELLOW}{private}{RESET}  {DIM}{handler}{RESET}", route.path);
  }
  Ok(())
}

fn method_label(method: Method) -> String {
  let name = method.as_str().to_uppercase();
  if method == Method::Default {
    format!("{DIM}{name:<8}{RESET}")
  } else {
    format!("{GREEN}{name:<8}{RESET}")
  }
}

/// Path relative to the project root when it lies inside it.
pub fn display_path(root: &Path, path: &Path) -> String {
  path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  fn project(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for file in files {
      let path = tmp.path().join(file);
      std::fs::create_dir_all(path.parent().unwrap()).unwrap();
      std::fs::write(path, "export default defineEventHandler(() => ({}));\n").unwrap();
    }
    tmp
  }

  #[test]
  fn generate_writes_declaration_and_reference() {
    let tmp = project(&["server/api/item.get.ts", "server/api/[group]/[name].post.ts"]);
    let config: RoutegenConfig =
      toml::from_str("[generate]\nreference_file = \".nuxt/nuxt.d.ts\"\n").unwrap();
    let inputs = Inputs { config: &config, root: tmp.path(), router: None, out_file: None };

    run_generate(&inputs).unwrap();

    let declaration =
      std::fs::read_to_string(tmp.path().join(".routegen/types/routegen.d.ts")).unwrap();
    assert!(declaration.starts_with("// Auto-generated by routegen. Do not edit.\n"));
    assert!(declaration.contains("post: import('../../server/api/[group]/[name].post').Body;"));
    let index = std::fs::read_to_string(tmp.path().join(".nuxt/nuxt.d.ts")).unwrap();
    assert!(index.contains("../.routegen/types/routegen.d.ts"));
  }

  #[test]
  fn out_override_moves_imports() {
    let tmp = project(&["server/api/item.get.ts"]);
    let config = RoutegenConfig::default();
    let inputs = Inputs {
      config: &config,
      root: tmp.path(),
      router: None,
      out_file: Some(tmp.path().join("types/api.d.ts")),
    };
    let session = build_session(&inputs).unwrap();
    assert!(session.render().contains("import('../server/api/item.get').Query"));
  }

  #[test]
  fn router_snapshot_replaces_the_walk() {
    let tmp = project(&["server/api/item.get.ts"]);
    let snapshot = tmp.path().join("router.json");
    let handler = tmp.path().join("server/api/other.ts");
    std::fs::write(
      &snapshot,
      serde_json::json!({
        "scannedHandlers": [{ "route": "/api/other", "handler": handler.to_string_lossy() }]
      })
      .to_string(),
    )
    .unwrap();

    let config = RoutegenConfig::default();
    let inputs =
      Inputs { config: &config, root: tmp.path(), router: Some(snapshot), out_file: None };
    let session = build_session(&inputs).unwrap();
    let paths: Vec<_> = session.routes().iter().map(|r| (r.method, r.path.as_str())).collect();
    assert_eq!(paths, vec![(Method::Default, "/api/other")]);
  }

  #[test]
  fn display_path_is_root_relative() {
    let root = Path::new("/p");
    assert_eq!(display_path(root, Path::new("/p/server/api/a.ts")), "server/api/a.ts");
    assert_eq!(display_path(root, Path::new("/elsewhere/a.ts")), "/elsewhere/a.ts");
  }
}
