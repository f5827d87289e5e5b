/* src/cli/codegen/src/tests/walk.rs */

use super::project;
use crate::walk::read_dir_recursive;

#[test]
fn missing_root_is_empty() {
  let (_tmp, layout) = project(&[]);
  let files = read_dir_recursive(&layout.server_dir.join("api"), &layout.server_dir, &[]).unwrap();
  assert!(files.is_empty());
}

#[test]
fn lists_files_relative_to_base_in_sorted_order() {
  let (_tmp, layout) =
    project(&["server/api/b.ts", "server/api/a/c.ts", "server/api/a.ts", "server/api/a/z/d.ts"]);
  let files = read_dir_recursive(&layout.server_dir.join("api"), &layout.server_dir, &[]).unwrap();
  assert_eq!(files, vec!["/api/a/c.ts", "/api/a/z/d.ts", "/api/a.ts", "/api/b.ts"]);
}

#[test]
fn excluded_subtree_is_pruned() {
  let (_tmp, layout) =
    project(&["server/api/item.get.ts", "server/api/legacy/old.get.ts", "server/api/legacy2.ts"]);
  let exclude = vec!["api/legacy".to_string()];
  let files =
    read_dir_recursive(&layout.server_dir.join("api"), &layout.server_dir, &exclude).unwrap();
  assert_eq!(files, vec!["/api/item.get.ts", "/api/legacy2.ts"]);
}

#[test]
fn excluding_the_root_yields_nothing() {
  let (_tmp, layout) = project(&["server/api/item.get.ts"]);
  let exclude = vec!["/api/".to_string()];
  let files =
    read_dir_recursive(&layout.server_dir.join("api"), &layout.server_dir, &exclude).unwrap();
  assert!(files.is_empty());
}

#[test]
fn non_missing_errors_propagate() {
  let (_tmp, layout) = project(&["server/api.ts"]);
  // root is a regular file, so listing it fails with something other than NotFound
  let result = read_dir_recursive(&layout.server_dir.join("api.ts"), &layout.server_dir, &[]);
  assert!(result.is_err());
}
