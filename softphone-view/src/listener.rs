use tokio::sync::mpsc;

use crate::ViewEvent;

/// Receives every event the model emits, in emission order.
pub trait ViewListener: Send + Sync {
    fn on_view_event(&self, event: &ViewEvent);
}

pub struct StubListener;

impl ViewListener for StubListener {
    fn on_view_event(&self, _event: &ViewEvent) {}
}

/// Forwards events into an unbounded channel.
///
/// Library API for consumers that observe the model from another task; the
/// desktop app reads events from each operation's return value instead.
pub struct ChannelListener {
    tx: mpsc::UnboundedSender<ViewEvent>,
}

impl ChannelListener {
    pub fn new(tx: mpsc::UnboundedSender<ViewEvent>) -> Self {
        Self { tx }
    }
}

impl ViewListener for ChannelListener {
    fn on_view_event(&self, event: &ViewEvent) {
        if let Err(err) = self.tx.send(event.clone()) {
            tracing::warn!(?err, "Cannot forward view event, receiver dropped");
        }
    }
}
