/* src/cli/core/src/watcher.rs */

// `routegen watch`: keep the declaration in sync with handler files.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use routegen::{FileEvent, Flush, watch_routes};
use tokio::signal;
use tokio::sync::mpsc;

use crate::generate::{Inputs, build_session, display_path};
use crate::ui::{self, DIM, RESET};

/// Translate a notify event into add/unlink events. Content modifications do
/// not change the route set and are dropped.
pub(crate) fn file_events(event: &Event) -> Vec<FileEvent> {
  let paths = &event.paths;
  match event.kind {
    EventKind::Create(_) => paths.iter().cloned().map(FileEvent::add).collect(),
    EventKind::Remove(_) => paths.iter().cloned().map(FileEvent::unlink).collect(),
    EventKind::Modify(ModifyKind::Name(mode)) => match mode {
      RenameMode::From => paths.iter().cloned().map(FileEvent::unlink).collect(),
      RenameMode::To => paths.iter().cloned().map(FileEvent::add).collect(),
      RenameMode::Both => match paths.as_slice() {
        [from, to] => vec![FileEvent::unlink(from.clone()), FileEvent::add(to.clone())],
        _ => Vec::new(),
      },
      // backends that cannot tell which side of the rename a path is on
      _ => paths.iter().cloned().map(existence_event).collect(),
    },
    _ => Vec::new(),
  }
}

fn existence_event(path: PathBuf) -> FileEvent {
  if path.exists() { FileEvent::add(path) } else { FileEvent::unlink(path) }
}

fn setup_watcher() -> Result<(RecommendedWatcher, mpsc::Receiver<FileEvent>)> {
  let (tx, rx) = mpsc::channel(256);
  let watcher = RecommendedWatcher::new(
    move |res: std::result::Result<Event, notify::Error>| match res {
      Ok(event) => {
        for file_event in file_events(&event) {
          if tx.blocking_send(file_event).is_err() {
            return;
          }
        }
      }
      Err(e) => tracing::warn!(error = %e, "file watcher error"),
    },
    notify::Config::default(),
  )?;
  Ok((watcher, rx))
}

pub async fn run_watch(inputs: &Inputs<'_>) -> Result<()> {
  let mut session = build_session(inputs)?;
  let root = inputs.root;
  let server_dir = session.layout().server_dir.clone();
  if !server_dir.is_dir() {
    bail!("server directory {} does not exist", server_dir.display());
  }

  let out = display_path(root, session.out_file());
  ui::banner("watch");
  let written = session.persist()?;
  let count = session.routes().len();
  if written {
    ui::detail_ok(&format!("{out} {DIM}({count} routes){RESET}"));
  } else {
    ui::detail(&format!("{out} {DIM}up to date ({count} routes){RESET}"));
  }

  let (mut watcher, mut events) = setup_watcher()?;
  watcher
    .watch(&server_dir, RecursiveMode::Recursive)
    .with_context(|| format!("failed to watch {}", server_dir.display()))?;
  ui::arrow(&format!("watching {}/ {DIM}(ctrl+c to stop){RESET}", display_path(root, &server_dir)));

  let quiet = inputs.config.debounce();
  let report = |result: Result<Flush>| match result {
    Ok(flush) if flush.written => {
      let trigger = display_path(root, &flush.trigger.path);
      ui::detail_ok(&format!("{out} {DIM}({} routes, after {trigger}){RESET}", flush.route_count));
    }
    Ok(flush) => tracing::debug!(routes = flush.route_count, "declaration unchanged"),
    Err(e) => ui::fail(&format!("{e:#}")),
  };

  // Dropping the watcher closes the event channel; the loop then flushes any
  // pending burst and returns.
  let shutdown = async move {
    if let Err(e) = signal::ctrl_c().await {
      tracing::warn!(error = %e, "failed to listen for ctrl+c");
    }
    drop(watcher);
  };
  tokio::join!(watch_routes(&mut session, &mut events, quiet, report), shutdown);

  println!();
  ui::ok("watch stopped");
  Ok(())
}
