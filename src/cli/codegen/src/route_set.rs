/* src/cli/codegen/src/route_set.rs */

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::layout::ServerLayout;
use crate::route::{Route, extract_route};
use crate::source::RouteSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
  Add,
  Unlink,
}

/// A watched file appearing or disappearing. `path` is relative to the project
/// root; absolute paths under the root are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
  pub kind: FileEventKind,
  pub path: PathBuf,
}

impl FileEvent {
  pub fn add(path: impl Into<PathBuf>) -> Self {
    Self { kind: FileEventKind::Add, path: path.into() }
  }

  pub fn unlink(path: impl Into<PathBuf>) -> Self {
    Self { kind: FileEventKind::Unlink, path: path.into() }
  }
}

/// Ordered routes of one server, patched in place while the session runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
  routes: Vec<Route>,
}

impl RouteSet {
  pub fn new(routes: Vec<Route>) -> Self {
    Self { routes }
  }

  pub fn from_source(source: &dyn RouteSource) -> Result<Self> {
    Ok(Self::new(source.read_routes()?))
  }

  pub fn routes(&self) -> &[Route] {
    &self.routes
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Route> {
    self.routes.iter()
  }

  pub fn len(&self) -> usize {
    self.routes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty()
  }

  /// Owned copy of the routes for rendering.
  pub fn snapshot(&self) -> Vec<Route> {
    self.routes.clone()
  }

  /// Apply one add/unlink event. Returns whether the set changed.
  ///
  /// Events outside `<server>/api` and `<server>/routes`, under an excluded
  /// prefix, or for non-handler extensions are ignored so the result always
  /// matches a fresh walk. Adding a known file or unlinking an unknown one is a
  /// no-op.
  pub fn apply(&mut self, layout: &ServerLayout, event: &FileEvent) -> bool {
    let Some(rel) = layout.server_relative(&event.path) else {
      tracing::trace!(path = %event.path.display(), "ignoring event outside handler roots");
      return false;
    };
    if layout.is_excluded(&rel) || !layout.has_handler_extension(Path::new(&rel)) {
      return false;
    }

    match event.kind {
      FileEventKind::Add => {
        // atomic saves rename over an existing handler and arrive as add
        let handler = layout.handler_path(&rel);
        if self.routes.iter().any(|r| r.handler == handler) {
          tracing::trace!(file = %rel, "add for known handler, ignoring");
          return false;
        }
        let route = extract_route(&layout.server_dir, &rel);
        tracing::debug!(method = %route.method, path = %route.path, "route added");
        self.routes.push(route);
        true
      }
      FileEventKind::Unlink => {
        let handler = layout.handler_path(&rel);
        match self.routes.iter().position(|r| r.handler == handler) {
          Some(index) => {
            let route = self.routes.remove(index);
            tracing::debug!(method = %route.method, path = %route.path, "route removed");
            true
          }
          None => {
            tracing::debug!(file = %rel, "unlink for unknown handler, ignoring");
            false
          }
        }
      }
    }
  }
}

impl<'a> IntoIterator for &'a RouteSet {
  type Item = &'a Route;
  type IntoIter = std::slice::Iter<'a, Route>;

  fn into_iter(self) -> Self::IntoIter {
    self.routes.iter()
  }
}
