/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::RoutegenConfig;

pub const CONFIG_FILE: &str = "routegen.toml";

/// Walk upward from `start` looking for `routegen.toml`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
  start.ancestors().map(|dir| dir.join(CONFIG_FILE)).find(|candidate| candidate.is_file())
}

pub fn load_config(path: &Path) -> Result<RoutegenConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: RoutegenConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid config {}", path.display()))?;
  Ok(config)
}

/// Load the config and the project root it applies to.
///
/// An explicit path must exist. Otherwise the nearest `routegen.toml` above
/// `cwd` is used, falling back to defaults rooted at `cwd`. The root is
/// canonicalized so it lines up with the absolute paths file watchers report.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<(RoutegenConfig, PathBuf)> {
  let found = match explicit {
    Some(path) => Some(cwd.join(path)),
    None => find_config(cwd),
  };
  let (config, root) = match found {
    Some(path) => {
      let config = load_config(&path)?;
      let root = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
      tracing::debug!(config = %path.display(), "loaded config");
      (config, root)
    }
    None => {
      tracing::debug!(cwd = %cwd.display(), "no {CONFIG_FILE} found, using defaults");
      (RoutegenConfig::default(), cwd.to_path_buf())
    }
  };
  let root =
    std::fs::canonicalize(&root).with_context(|| format!("failed to resolve {}", root.display()))?;
  Ok((config, root))
}
