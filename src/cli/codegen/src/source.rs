/* src/cli/codegen/src/source.rs */

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::layout::ServerLayout;
use crate::route::{HandlerDescriptor, Route, extract_route};
use crate::walk::read_dir_recursive;

/// A way to acquire the full route list for one server.
///
/// Implementations must agree on `(method, path)` for the same handler files.
pub trait RouteSource {
  fn read_routes(&self) -> Result<Vec<Route>>;
}

/// Walks `<server>/api` and `<server>/routes` on disk.
/// Used at cold start, before a router has scanned anything.
pub struct FileSystemSource<'a> {
  layout: &'a ServerLayout,
}

impl<'a> FileSystemSource<'a> {
  pub fn new(layout: &'a ServerLayout) -> Self {
    Self { layout }
  }

  /// Handler files relative to the server directory: `/api/item.get.ts`, ...
  pub fn handler_files(&self) -> Result<Vec<String>> {
    let layout = self.layout;
    let mut files = Vec::new();
    for dir in layout.handler_dirs() {
      let found = read_dir_recursive(&dir, &layout.server_dir, &layout.exclude)?;
      files.extend(found.into_iter().filter(|f| layout.has_handler_extension(Path::new(f))));
    }
    Ok(files)
  }
}

impl RouteSource for FileSystemSource<'_> {
  fn read_routes(&self) -> Result<Vec<Route>> {
    let files = self.handler_files()?;
    tracing::debug!(count = files.len(), server = %self.layout.server_dir.display(), "walked handler files");
    Ok(files.iter().map(|f| extract_route(&self.layout.server_dir, f)).collect())
  }
}

/// Handler lists exported by a live router: files it scanned itself plus
/// handlers declared explicitly in its configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouterSnapshot {
  #[serde(rename = "scannedHandlers", default)]
  pub scanned_handlers: Vec<HandlerDescriptor>,
  #[serde(default)]
  pub handlers: Vec<HandlerDescriptor>,
}

impl RouterSnapshot {
  pub fn load(path: &Path) -> Result<Self> {
    let content =
      std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
      .with_context(|| format!("failed to parse router snapshot {}", path.display()))
  }
}

/// Reads routes from a router that has already scanned the handler files.
pub struct RouterSource<'a> {
  layout: &'a ServerLayout,
  snapshot: RouterSnapshot,
}

impl<'a> RouterSource<'a> {
  pub fn new(layout: &'a ServerLayout, snapshot: RouterSnapshot) -> Self {
    Self { layout, snapshot }
  }
}

impl RouteSource for RouterSource<'_> {
  fn read_routes(&self) -> Result<Vec<Route>> {
    let routes: Vec<Route> = self
      .snapshot
      .scanned_handlers
      .iter()
      .chain(&self.snapshot.handlers)
      .filter_map(|d| Route::from_descriptor(self.layout, d))
      .collect();
    tracing::debug!(count = routes.len(), "read routes from router snapshot");
    Ok(routes)
  }
}
