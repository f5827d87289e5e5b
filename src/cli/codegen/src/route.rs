/* src/cli/codegen/src/route.rs */

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::layout::ServerLayout;
use crate::method::Method;

#[allow(clippy::unwrap_used)]
fn bracket_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  // One token per bracket pair, non-greedy: `[group]-[name]` yields two tokens
  RE.get_or_init(|| Regex::new(r"\[(.+?)\]").unwrap())
}

#[allow(clippy::unwrap_used)]
fn colon_param_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r":([A-Za-z0-9_]+)").unwrap())
}

/// One invocable endpoint recovered from a handler file or a router entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
  pub method: Method,
  /// URL path with `[name]` tokens rewritten to `:name`.
  pub path: String,
  /// Absolute path of the handler module.
  pub handler: PathBuf,
  /// Parameter names in left-to-right order.
  pub parameters: Vec<String>,
}

/// Handler entry as reported by a live router.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HandlerDescriptor {
  #[serde(default)]
  pub route: Option<String>,
  #[serde(default)]
  pub method: Option<String>,
  pub handler: String,
}

/// Bracket token names in `path`, in order: `/api/[group]/[name]-x` -> `["group", "name"]`.
pub fn bracket_params(path: &str) -> Vec<String> {
  bracket_re().captures_iter(path).map(|c| c[1].to_string()).collect()
}

/// Rewrite every `[name]` token to `:name`.
pub fn colonize(path: &str) -> String {
  bracket_re().replace_all(path, ":$1").into_owned()
}

/// Build a route from a handler file path relative to the server directory.
///
/// `/api/[group]/[name].post.ts` -> `post /api/:group/:name` with parameters `group`, `name`.
pub fn extract_route(server_dir: &Path, relative_path: &str) -> Route {
  let rel = relative_path.trim_start_matches('/');
  let (dir, file) = match rel.rsplit_once('/') {
    Some((dir, file)) => (dir, file),
    None => ("", rel),
  };
  let stem = match file.rfind('.') {
    Some(dot) if dot > 0 => &file[..dot],
    _ => file,
  };
  let (method, name) = Method::split_suffix(stem);

  let raw = if dir.is_empty() { format!("/{name}") } else { format!("/{dir}/{name}") };
  let parameters = bracket_params(&raw);
  let path = colonize(&raw);
  let handler = server_dir.join(rel);

  tracing::trace!(%method, %path, file = relative_path, "extracted route");
  Route { method, path, handler, parameters }
}

impl Route {
  /// Normalize a router-reported handler into the same shape the filesystem
  /// strategy produces. Returns `None` for entries without a route (middleware).
  pub fn from_descriptor(layout: &ServerLayout, descriptor: &HandlerDescriptor) -> Option<Self> {
    let route = descriptor.route.as_deref().filter(|r| !r.is_empty())?;
    let method = descriptor.method.as_deref().map_or(Method::Default, Method::parse_lenient);

    let handler = {
      let p = Path::new(&descriptor.handler);
      if p.is_absolute() { p.to_path_buf() } else { layout.root_dir.join(p) }
    };

    let mut parameters = bracket_params(route);
    if parameters.is_empty() {
      if let Ok(rel) = handler.strip_prefix(&layout.server_dir) {
        parameters = bracket_params(&rel.to_string_lossy());
      }
    }
    if parameters.is_empty() {
      parameters = colon_param_re().captures_iter(route).map(|c| c[1].to_string()).collect();
    }

    Some(Self { method, path: colonize(route), handler, parameters })
  }

  /// Public routes live under `/api/` or `/routes/` and have no `_`-prefixed
  /// first segment beneath either root.
  pub fn is_public(&self) -> bool {
    ["/api/", "/routes/"].iter().any(|root| {
      self.path.strip_prefix(root).is_some_and(|rest| !rest.starts_with('_'))
    })
  }
}
