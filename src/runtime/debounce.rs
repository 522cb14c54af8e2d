//! Cancellable quiet-period timer.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Delays a message until input has been quiet for a fixed period.
///
/// At most one timer is outstanding: [`schedule`](Self::schedule) aborts the
/// previous one before starting the next, so an earlier message is never
/// delivered once a later one has been scheduled.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Sends `message` to `target` after the quiet period, replacing any
    /// timer still running.
    pub fn schedule<T>(&mut self, message: T, target: UnboundedSender<T>)
    where
        T: Send + 'static,
    {
        self.cancel();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            // Receiver gone means the controller shut down.
            let _ = target.send(message);
        }));
    }

    /// Aborts the running timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Returns `true` while a timer is running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
