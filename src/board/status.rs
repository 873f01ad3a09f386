//! Transient status line management
//!
//! The status line is the single shared message element of the board. The
//! pending auto-hide is an owned task handle: showing a newer message aborts
//! the older timer first, so two messages can never race to hide each other.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::view::BoardView;

/// Owner of the pending auto-hide timer
#[derive(Debug, Default)]
pub struct StatusLine {
    hide_timer: Option<JoinHandle<()>>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort any pending hide so an older timer cannot hide a newer message
    pub fn cancel_pending_hide(&mut self) {
        if let Some(handle) = self.hide_timer.take() {
            handle.abort();
        }
    }

    /// Schedule the view's status line to hide after `delay`, replacing any
    /// pending hide
    pub fn schedule_hide<V>(&mut self, view: Arc<Mutex<V>>, delay: Duration)
    where
        V: BoardView + Send + 'static,
    {
        self.cancel_pending_hide();
        self.hide_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            view.lock().await.hide_message();
        }));
    }
}

impl Drop for StatusLine {
    fn drop(&mut self) {
        self.cancel_pending_hide();
    }
}
