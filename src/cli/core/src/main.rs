/* src/cli/core/src/main.rs */

mod config;
mod generate;
mod ui;
mod watcher;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CONFIG_FILE, resolve_config};
use crate::generate::{Inputs, run_generate, run_routes};
use crate::watcher::run_watch;

#[derive(Parser)]
#[command(name = "routegen", version, about = "Generate TypeScript route types from server handler files")]
struct Cli {
  /// Increase log verbosity (-v debug, -vv trace)
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Discover handlers and write the declaration file once
  Generate {
    /// Path to routegen.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Read routes from a router snapshot (JSON) instead of walking the server directory
    #[arg(short, long)]
    router: Option<PathBuf>,
    /// Output file, overrides generate.out_file
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// List discovered routes
  Routes {
    /// Path to routegen.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Read routes from a router snapshot (JSON)
    #[arg(short, long)]
    router: Option<PathBuf>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
  },
  /// Generate, then regenerate whenever handler files are added or removed
  Watch {
    /// Path to routegen.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

fn init_tracing(verbose: u8) {
  let base_filter = match std::env::var("ROUTEGEN_LOG") {
    Ok(filter) => filter,
    Err(_) => match verbose {
      0 => "warn".to_string(),
      1 => "warn,routegen=debug".to_string(),
      _ => "info,routegen=trace".to_string(),
    },
  };
  let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_target(true).with_writer(std::io::stderr).compact())
    .init();
}

fn absolute(cwd: &Path, path: Option<PathBuf>) -> Option<PathBuf> {
  path.map(|p| cwd.join(p))
}

async fn run(cli: Cli) -> Result<()> {
  let cwd = std::env::current_dir().context("failed to read current directory")?;
  match cli.command {
    Command::Generate { config, router, out } => {
      let (config, root) = resolve_config(config.as_deref(), &cwd)?;
      let inputs = Inputs {
        config: &config,
        root: &root,
        router: absolute(&cwd, router),
        out_file: absolute(&cwd, out),
      };
      run_generate(&inputs)
    }
    Command::Routes { config, router, json } => {
      let (config, root) = resolve_config(config.as_deref(), &cwd)?;
      let inputs =
        Inputs { config: &config, root: &root, router: absolute(&cwd, router), out_file: None };
      run_routes(&inputs, json)
    }
    Command::Watch { config: config_path } => {
      let (config, root) = resolve_config(config_path.as_deref(), &cwd)?;
      if config_path.is_none() && !root.join(CONFIG_FILE).is_file() {
        ui::warn(&format!("no {CONFIG_FILE} found, using defaults"));
      }
      let inputs = Inputs { config: &config, root: &root, router: None, out_file: None };
      run_watch(&inputs).await
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  run(cli).await
}
