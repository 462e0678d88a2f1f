//! One-shot delayed navigation after a successful registration

use super::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Default pause before leaving the register view, long enough to read the banner
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(3000);

/// Handle to a pending redirect.
///
/// The timer posts [`AppEvent::RedirectDue`] once after `delay`. Dropping the
/// handle or calling [`RedirectTimer::cancel`] aborts it if it hasn't fired.
#[derive(Debug)]
pub struct RedirectTimer {
    handle: JoinHandle<()>,
}

impl RedirectTimer {
    /// Spawn the timer on the current tokio runtime
    pub fn schedule(delay: Duration, events: UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(?delay, "redirect timer fired");
            let _ = events.send(AppEvent::RedirectDue);
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RedirectTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
