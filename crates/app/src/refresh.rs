//! User-requested refreshes travel to the runtime loop over a channel.

use tokio::sync::mpsc;
use ui::RefreshTrigger;

/// Sending half handed to the dispatcher.
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    tx: mpsc::UnboundedSender<()>,
}

/// Receiving half polled by the runtime loop.
pub type RefreshRequests = mpsc::UnboundedReceiver<()>;

/// Connected handle and receiver.
pub fn channel() -> (RefreshHandle, RefreshRequests) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RefreshHandle { tx }, rx)
}

impl RefreshTrigger for RefreshHandle {
    fn trigger_refresh(&mut self) {
        if self.tx.send(()).is_err() {
            tracing::warn!("refresh requested after the runtime loop stopped");
        }
    }
}
