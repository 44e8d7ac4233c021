//! Save acknowledgement
//!
//! Transient "Settings Saved!" confirmation. Becomes visible on an explicit
//! save and hides itself after a fixed delay; saving again while visible
//! restarts the full window.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long the saved confirmation stays visible
pub const SAVED_MESSAGE_DELAY: Duration = Duration::from_millis(2000);

/// One-shot, auto-dismissing visibility signal
pub struct SaveAcknowledgement {
    visible: Arc<AtomicBool>,
    dismiss: Option<JoinHandle<()>>,
    delay: Duration,
}

impl SaveAcknowledgement {
    pub fn new() -> Self {
        Self::with_delay(SAVED_MESSAGE_DELAY)
    }

    /// Use a custom dismiss delay
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(false)),
            dismiss: None,
            delay,
        }
    }

    /// Show the confirmation and arm the dismiss timer
    ///
    /// Must be called from within a tokio runtime. An already-armed timer
    /// is cancelled first, so the confirmation stays up for one full fresh
    /// delay window.
    pub fn trigger(&mut self) {
        if let Some(timer) = self.dismiss.take() {
            timer.abort();
        }

        self.visible.store(true, Ordering::SeqCst);

        let visible = Arc::clone(&self.visible);
        let delay = self.delay;
        self.dismiss = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            visible.store(false, Ordering::SeqCst);
        }));
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl Default for SaveAcknowledgement {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SaveAcknowledgement {
    fn drop(&mut self) {
        // The dismiss task must not outlive the state it updates
        if let Some(timer) = self.dismiss.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_delay() {
        let mut ack = SaveAcknowledgement::new();
        assert!(!ack.is_visible());

        ack.trigger();
        assert!(ack.is_visible());

        // Still up just before the deadline
        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(ack.is_visible());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!ack.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_restarts_the_window() {
        let mut ack = SaveAcknowledgement::new();
        ack.trigger();

        tokio::time::sleep(Duration::from_millis(1500)).await;
        ack.trigger();

        // The first window would have expired by now; the second keeps the
        // confirmation up
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(ack.is_visible());

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert!(!ack.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_the_timer() {
        let mut ack = SaveAcknowledgement::with_delay(Duration::from_millis(50));
        ack.trigger();

        let visible = Arc::clone(&ack.visible);
        drop(ack);

        tokio::time::sleep(Duration::from_millis(100)).await;
        // The aborted timer never acted after teardown
        assert!(visible.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let mut ack = SaveAcknowledgement::with_delay(Duration::from_millis(100));
        ack.trigger();

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert!(ack.is_visible());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!ack.is_visible());
    }
}
