/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};
use routegen::{RenderOptions, ServerLayout};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutegenConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub generate: GenerateSection,
  #[serde(default)]
  pub watch: WatchSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_server_dir")]
  pub dir: String,
  #[serde(default = "default_extension")]
  pub extension: String,
  #[serde(default)]
  pub exclude: Vec<String>,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { dir: default_server_dir(), extension: default_extension(), exclude: Vec::new() }
  }
}

fn default_server_dir() -> String {
  "server".to_string()
}

fn default_extension() -> String {
  "ts".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSection {
  #[serde(default = "default_out_file")]
  pub out_file: String,
  #[serde(default = "default_module")]
  pub module: String,
  pub reference_file: Option<String>,
  #[serde(default = "default_reactive_wrapper")]
  pub reactive_wrapper: String,
  #[serde(default = "default_reactive_import")]
  pub reactive_import: String,
}

impl Default for GenerateSection {
  fn default() -> Self {
    Self {
      out_file: default_out_file(),
      module: default_module(),
      reference_file: None,
      reactive_wrapper: default_reactive_wrapper(),
      reactive_import: default_reactive_import(),
    }
  }
}

fn default_out_file() -> String {
  ".routegen/types/routegen.d.ts".to_string()
}

fn default_module() -> String {
  "routegen".to_string()
}

fn default_reactive_wrapper() -> String {
  "MaybeRef".to_string()
}

fn default_reactive_import() -> String {
  "vue".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
  #[serde(default = "default_debounce_ms")]
  pub debounce_ms: u64,
}

impl Default for WatchSection {
  fn default() -> Self {
    Self { debounce_ms: default_debounce_ms() }
  }
}

fn default_debounce_ms() -> u64 {
  200
}

impl RoutegenConfig {
  pub fn validate(&self) -> Result<()> {
    if self.server.extension.trim_start_matches('.').is_empty() {
      bail!("server.extension must not be empty");
    }
    if self.generate.module.trim().is_empty() {
      bail!("generate.module must not be empty");
    }
    if self.generate.out_file.trim().is_empty() {
      bail!("generate.out_file must not be empty");
    }
    if self.watch.debounce_ms == 0 {
      bail!("watch.debounce_ms must be greater than 0");
    }
    Ok(())
  }

  /// Handler layout for a project rooted at `root` (the config file's directory).
  pub fn layout(&self, root: &Path) -> ServerLayout {
    ServerLayout::new(root)
      .with_server_dir(root.join(&self.server.dir))
      .with_extension(self.server.extension.as_str())
      .with_exclude(self.server.exclude.clone())
  }

  pub fn out_file(&self, root: &Path) -> PathBuf {
    root.join(&self.generate.out_file)
  }

  pub fn reference_file(&self, root: &Path) -> Option<PathBuf> {
    self.generate.reference_file.as_ref().map(|f| root.join(f))
  }

  /// `types_dir` is filled in by the session from the output file.
  pub fn render_options(&self) -> RenderOptions {
    let mut options = RenderOptions::new(self.generate.module.as_str(), PathBuf::new());
    options.reactive_wrapper.clone_from(&self.generate.reactive_wrapper);
    options.reactive_import.clone_from(&self.generate.reactive_import);
    options
  }

  pub fn debounce(&self) -> Duration {
    Duration::from_millis(self.watch.debounce_ms)
  }
}
