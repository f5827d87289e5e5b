/* src/cli/codegen/src/reference.rs */

// Make a types index file pull in the generated declaration via a
// triple-slash reference, the way framework `prepare:types` hooks do.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::paths::relative_path;

pub fn reference_directive(index_file: &Path, declaration: &Path) -> String {
  let from = index_file.parent().unwrap_or_else(|| Path::new(""));
  format!("/// <reference path=\"{}\" />", relative_path(from, declaration))
}

/// Ensure `index_file` references `declaration`. Creates the file when missing.
/// Returns `true` when the file was written.
pub fn ensure_reference(index_file: &Path, declaration: &Path) -> Result<bool> {
  let directive = reference_directive(index_file, declaration);
  let existing = match std::fs::read_to_string(index_file) {
    Ok(content) => content,
    Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
    Err(e) => return Err(e).with_context(|| format!("failed to read {}", index_file.display())),
  };
  if existing.lines().any(|line| line.trim() == directive) {
    return Ok(false);
  }

  let mut content = existing;
  if !content.is_empty() && !content.ends_with('\n') {
    content.push('\n');
  }
  content.push_str(&directive);
  content.push('\n');

  if let Some(parent) = index_file.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(index_file, content)
    .with_context(|| format!("failed to write {}", index_file.display()))?;
  tracing::debug!(file = %index_file.display(), "added declaration reference");
  Ok(true)
}
