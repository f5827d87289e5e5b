/* src/cli/codegen/src/paths.rs */

// Path helpers for turning filesystem paths into import specifiers.

use std::path::{Component, Path};

/// Join path components with `/` regardless of platform.
pub fn to_slash(path: &Path) -> String {
  path
    .components()
    .filter_map(|c| match c {
      Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
      Component::ParentDir => Some("..".to_string()),
      _ => None,
    })
    .collect::<Vec<_>>()
    .join("/")
}

/// Lexically normalize `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> Vec<Component<'_>> {
  let mut out: Vec<Component<'_>> = Vec::new();
  for c in path.components() {
    match c {
      Component::CurDir => {}
      Component::ParentDir => match out.last() {
        Some(Component::Normal(_)) => {
          out.pop();
        }
        _ => out.push(c),
      },
      other => out.push(other),
    }
  }
  out
}

/// Relative `/`-separated path from directory `from` to `to`, like Node's `path.relative`.
/// Both paths must share the same anchor (both absolute or both relative to the same base).
pub fn relative_path(from: &Path, to: &Path) -> String {
  let from = normalize(from);
  let to = normalize(to);
  let common = from.iter().zip(to.iter()).take_while(|(a, b)| a == b).count();

  let mut parts: Vec<String> = Vec::new();
  for c in &from[common..] {
    if matches!(c, Component::Normal(_)) {
      parts.push("..".to_string());
    }
  }
  for c in &to[common..] {
    match c {
      Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
      Component::ParentDir => parts.push("..".to_string()),
      _ => {}
    }
  }
  parts.join("/")
}

/// Relative module specifier: always starts with `./` or `../`.
pub fn import_specifier(from_dir: &Path, to: &Path) -> String {
  let rel = relative_path(from_dir, to);
  if rel.starts_with("../") || rel == ".." { rel } else { format!("./{rel}") }
}

/// Strip the final extension from a `/`-separated specifier (`a/item.get.ts` -> `a/item.get`).
pub fn strip_extension(specifier: &str) -> &str {
  let file_start = specifier.rfind('/').map_or(0, |i| i + 1);
  match specifier[file_start..].rfind('.') {
    Some(dot) if dot > 0 => &specifier[..file_start + dot],
    _ => specifier,
  }
}
