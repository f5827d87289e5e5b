/* src/cli/codegen/src/method.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method a handler responds to, or `Default` when the file name
/// carries no method suffix and the handler serves every method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
  Get,
  Head,
  Patch,
  Post,
  Put,
  Delete,
  Connect,
  Options,
  Trace,
  Default,
}

impl Method {
  /// Suffix lookup order. The first suffix that matches a file stem wins.
  pub const HTTP: [Method; 9] = [
    Method::Get,
    Method::Head,
    Method::Patch,
    Method::Post,
    Method::Put,
    Method::Delete,
    Method::Connect,
    Method::Options,
    Method::Trace,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Get => "get",
      Self::Head => "head",
      Self::Patch => "patch",
      Self::Post => "post",
      Self::Put => "put",
      Self::Delete => "delete",
      Self::Connect => "connect",
      Self::Options => "options",
      Self::Trace => "trace",
      Self::Default => "default",
    }
  }

  /// Parse a router-reported method name. Unknown or empty names map to `Default`.
  pub fn parse_lenient(name: &str) -> Self {
    let lower = name.trim().to_ascii_lowercase();
    Self::HTTP.into_iter().find(|m| m.as_str() == lower).unwrap_or(Self::Default)
  }

  /// Split a method suffix off a file stem: `item.get` -> (`Get`, `item`).
  /// Matching is case-insensitive; a stem without a known suffix is returned whole.
  pub fn split_suffix(stem: &str) -> (Self, &str) {
    let lower = stem.to_ascii_lowercase();
    for method in Self::HTTP {
      let suffix = format!(".{}", method.as_str());
      if lower.ends_with(&suffix) {
        // ASCII lowercasing keeps byte offsets stable
        return (method, &stem[..stem.len() - suffix.len()]);
      }
    }
    (Self::Default, stem)
  }
}

impl fmt::Display for Method {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
