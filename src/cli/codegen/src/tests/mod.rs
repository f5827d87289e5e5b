/* src/cli/codegen/src/tests/mod.rs */

mod walk;

use std::path::Path;

use tempfile::TempDir;

use crate::layout::ServerLayout;
use crate::method::Method;
use crate::route::Route;

/// Create a project with the given files (relative to the project root) and
/// the conventional `server/` layout.
pub(crate) fn project(files: &[&str]) -> (TempDir, ServerLayout) {
  let tmp = TempDir::new().unwrap();
  for file in files {
    touch(tmp.path(), file);
  }
  let layout = ServerLayout::new(tmp.path());
  (tmp, layout)
}

pub(crate) fn touch(root: &Path, file: &str) {
  let path = root.join(file);
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();
  std::fs::write(&path, "export default defineEventHandler(() => ({}));\n").unwrap();
}

/// `(method, path)` pairs sorted, for multiset comparison.
pub(crate) fn keys(routes: &[Route]) -> Vec<(Method, String)> {
  let mut keys: Vec<_> = routes.iter().map(|r| (r.method, r.path.clone())).collect();
  keys.sort();
  keys
}
