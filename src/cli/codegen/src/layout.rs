/* src/cli/codegen/src/layout.rs */

use std::path::{Path, PathBuf};

use crate::paths::to_slash;

/// Subtrees of the server directory that hold route handlers.
pub const HANDLER_ROOTS: [&str; 2] = ["api", "routes"];

/// Where handler files live for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLayout {
  /// Project root; watch event paths are relative to it.
  pub root_dir: PathBuf,
  /// Server directory containing `api/` and `routes/`.
  pub server_dir: PathBuf,
  /// Handler file extension without the dot.
  pub extension: String,
  /// Server-relative prefixes (e.g. `api/legacy`) that are never walked.
  pub exclude: Vec<String>,
}

impl ServerLayout {
  /// Layout with the conventional `<root>/server` directory and `.ts` handlers.
  pub fn new(root_dir: impl Into<PathBuf>) -> Self {
    let root_dir = root_dir.into();
    let server_dir = root_dir.join("server");
    Self { root_dir, server_dir, extension: "ts".to_string(), exclude: Vec::new() }
  }

  pub fn with_server_dir(mut self, server_dir: impl Into<PathBuf>) -> Self {
    self.server_dir = server_dir.into();
    self
  }

  pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
    self.extension = extension.into().trim_start_matches('.').to_string();
    self
  }

  pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
    self.exclude = exclude;
    self
  }

  /// Absolute directories that the filesystem strategy walks.
  pub fn handler_dirs(&self) -> Vec<PathBuf> {
    HANDLER_ROOTS.iter().map(|r| self.server_dir.join(r)).collect()
  }

  pub fn has_handler_extension(&self, path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(self.extension.as_str())
  }

  /// Whether a server-relative path (`/api/x/y.ts`) falls under an excluded prefix.
  pub fn is_excluded(&self, server_relative: &str) -> bool {
    let rel = server_relative.trim_start_matches('/');
    self.exclude.iter().any(|prefix| {
      let prefix = prefix.trim_matches('/');
      !prefix.is_empty()
        && (rel == prefix || rel.starts_with(&format!("{prefix}/")))
    })
  }

  /// Resolve a watch-event path (relative to the project root, or absolute)
  /// into a server-relative handler path such as `/api/item.get.ts`.
  /// Returns `None` for anything outside `api/` or `routes/`.
  pub fn server_relative(&self, path: &Path) -> Option<String> {
    let full = if path.is_absolute() { path.to_path_buf() } else { self.root_dir.join(path) };
    let rel = full.strip_prefix(&self.server_dir).ok()?;
    let first = rel.components().next()?.as_os_str().to_str()?;
    if !HANDLER_ROOTS.contains(&first) || rel.components().count() < 2 {
      return None;
    }
    Some(format!("/{}", to_slash(rel)))
  }

  /// Full handler path for a server-relative file path.
  pub fn handler_path(&self, server_relative: &str) -> PathBuf {
    self.server_dir.join(server_relative.trim_start_matches('/'))
  }
}
