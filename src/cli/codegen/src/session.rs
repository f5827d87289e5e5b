/* src/cli/codegen/src/session.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::layout::ServerLayout;
use crate::reference::ensure_reference;
use crate::route_set::{FileEvent, RouteSet};
use crate::source::RouteSource;
use crate::typescript::{RenderOptions, render};

/// Result of one coalesced render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flush {
  /// Last event of the burst that triggered the render.
  pub trigger: FileEvent,
  /// Whether the declaration file content changed on disk.
  pub written: bool,
  pub route_count: usize,
}

/// Generation state for one server build session: owns the route set and
/// knows where the declaration goes. Created once per run and passed explicitly.
#[derive(Debug)]
pub struct Session {
  layout: ServerLayout,
  routes: RouteSet,
  options: RenderOptions,
  out_file: PathBuf,
  reference_file: Option<PathBuf>,
}

impl Session {
  /// `options.types_dir` is replaced by the directory of `out_file`, since
  /// handler imports must be relative to where the declaration lives.
  pub fn new(layout: ServerLayout, out_file: impl Into<PathBuf>, mut options: RenderOptions) -> Self {
    let out_file = out_file.into();
    options.types_dir = out_file.parent().map(Path::to_path_buf).unwrap_or_default();
    Self { layout, routes: RouteSet::default(), options, out_file, reference_file: None }
  }

  pub fn with_reference_file(mut self, reference_file: Option<PathBuf>) -> Self {
    self.reference_file = reference_file;
    self
  }

  pub fn layout(&self) -> &ServerLayout {
    &self.layout
  }

  pub fn routes(&self) -> &RouteSet {
    &self.routes
  }

  pub fn out_file(&self) -> &Path {
    &self.out_file
  }

  /// Replace the route set with a full read from `source`.
  pub fn rebuild(&mut self, source: &dyn RouteSource) -> Result<usize> {
    self.routes = RouteSet::from_source(source)?;
    tracing::debug!(count = self.routes.len(), "route set rebuilt");
    Ok(self.routes.len())
  }

  pub fn apply(&mut self, event: &FileEvent) -> bool {
    self.routes.apply(&self.layout, event)
  }

  pub fn render(&self) -> String {
    render(&self.routes.snapshot(), &self.options)
  }

  /// Render and write the declaration (plus the reference, when configured).
  /// Returns whether the declaration file changed.
  pub fn persist(&self) -> Result<bool> {
    let written = write_if_changed(&self.out_file, &self.render())?;
    if let Some(ref index) = self.reference_file {
      ensure_reference(index, &self.out_file)?;
    }
    Ok(written)
  }

  pub fn flush(&self, trigger: FileEvent) -> Result<Flush> {
    let written = self.persist()?;
    tracing::debug!(written, routes = self.routes.len(), "flushed declaration");
    Ok(Flush { trigger, written, route_count: self.routes.len() })
  }
}

/// Write `content` unless the file already holds exactly that.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
  if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
    return Ok(false);
  }
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
  Ok(true)
}
