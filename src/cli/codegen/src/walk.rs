/* src/cli/codegen/src/walk.rs */

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::paths::to_slash;

/// List every file under `root` as a `/`-prefixed path relative to `base`.
///
/// Entries whose base-relative path falls under one of `exclude` are skipped,
/// and excluded directories are pruned without being read. A missing `root`
/// yields an empty list; other I/O errors are returned. Entries are visited in
/// file-name order so the result is stable.
pub fn read_dir_recursive(root: &Path, base: &Path, exclude: &[String]) -> Result<Vec<String>> {
  let walker = WalkDir::new(root)
    .sort_by_file_name()
    .follow_links(true)
    .into_iter()
    .filter_entry(|e| !is_excluded(e.path(), base, exclude));

  let mut files = Vec::new();
  for entry in walker {
    let entry = match entry {
      Ok(entry) => entry,
      // missing root, or removed between listing and stat
      Err(e) if e.io_error().map(std::io::Error::kind) == Some(ErrorKind::NotFound) => {
        if e.depth() == 0 {
          return Ok(Vec::new());
        }
        continue;
      }
      Err(e) => return Err(e).with_context(|| format!("failed to read {}", root.display())),
    };

    if entry.depth() == 0 {
      if !entry.file_type().is_dir() {
        bail!("failed to read {}: not a directory", root.display());
      }
      continue;
    }
    if !entry.file_type().is_file() {
      continue;
    }
    if let Ok(rel) = entry.path().strip_prefix(base) {
      files.push(format!("/{}", to_slash(rel)));
    }
  }
  Ok(files)
}

fn is_excluded(path: &Path, base: &Path, exclude: &[String]) -> bool {
  let excluded = exclude.iter().any(|prefix| {
    let prefix = prefix.trim_matches('/');
    !prefix.is_empty() && path.starts_with(base.join(prefix))
  });
  if excluded {
    tracing::debug!(path = %path.display(), "skipping excluded entry");
  }
  excluded
}
