/* src/cli/codegen/src/watch.rs */

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::coalesce::Coalescer;
use crate::route_set::FileEvent;
use crate::session::{Flush, Session};

/// Drive a session from a stream of file events until the stream closes.
///
/// Each event is applied to the route set as soon as it arrives, and events
/// that change the set arm the coalescer. Rendering is
/// coalesced so a burst within `quiet` produces one write. Renders run on this
/// task only, so they never overlap: events that land during a render wait in
/// the channel and start the next burst. A pending burst is flushed when the
/// stream closes.
pub async fn watch_routes<F>(
  session: &mut Session,
  events: &mut mpsc::Receiver<FileEvent>,
  quiet: Duration,
  mut on_flush: F,
) where
  F: FnMut(Result<Flush>),
{
  let mut pending = Coalescer::new(quiet);

  loop {
    tokio::select! {
      event = events.recv() => match event {
        Some(event) => {
          let changed = session.apply(&event);
          tracing::trace!(?event, changed, "file event");
          if changed {
            pending.push(event);
          }
        }
        None => break,
      },
      trigger = pending.ready() => {
        on_flush(session.flush(trigger));
      }
    }
  }

  if let Some(trigger) = pending.take() {
    on_flush(session.flush(trigger));
  }
}
