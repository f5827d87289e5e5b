/* src/cli/codegen/src/coalesce.rs */

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Timer-based coalescing queue.
///
/// Every `push` replaces the pending payload and re-arms the deadline, so a
/// burst of pushes closer together than `quiet` resolves `ready` once, with the
/// last payload of the burst.
#[derive(Debug)]
pub struct Coalescer<T> {
  quiet: Duration,
  pending: Option<(Instant, T)>,
}

impl<T> Coalescer<T> {
  pub fn new(quiet: Duration) -> Self {
    Self { quiet, pending: None }
  }

  pub fn push(&mut self, payload: T) {
    self.pending = Some((Instant::now() + self.quiet, payload));
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some()
  }

  /// Drain the pending payload without waiting.
  pub fn take(&mut self) -> Option<T> {
    self.pending.take().map(|(_, payload)| payload)
  }

  /// Wait for the quiet window to elapse and return the latest payload.
  /// Never resolves while nothing is pending. Cancel-safe: dropping the
  /// future leaves the pending payload in place.
  pub async fn ready(&mut self) -> T {
    let Some(deadline) = self.pending.as_ref().map(|(deadline, _)| *deadline) else {
      return std::future::pending().await;
    };
    sleep_until(deadline).await;
    match self.take() {
      Some(payload) => payload,
      None => std::future::pending().await,
    }
  }
}
