use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::service::ServiceListener;

#[derive(Clone, Debug)]
pub enum UiEvent {
    ServiceOnline { own_id: String },
    ServiceOffline,
    IncomingCall { remote_id: String },
    CallConnected { remote_id: String },
    CallEnded { remote_id: String, reason: String },
}

pub struct UiEventListener {
    tx: mpsc::Sender<UiEvent>,
}

impl UiEventListener {
    pub fn new(tx: mpsc::Sender<UiEvent>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl ServiceListener for UiEventListener {
    async fn on_service_online(&self, own_id: String) {
        if let Err(err) = self.tx.send(UiEvent::ServiceOnline { own_id }).await {
            tracing::error!(?err, "Cannot send UI event: ServiceOnline");
        }
    }

    async fn on_service_offline(&self) {
        if let Err(err) = self.tx.send(UiEvent::ServiceOffline).await {
            tracing::error!(?err, "Cannot send UI event: ServiceOffline");
        }
    }

    async fn on_incoming_call(&self, remote_id: String) {
        if let Err(err) = self.tx.send(UiEvent::IncomingCall { remote_id }).await {
            tracing::error!(?err, "Cannot send UI event: IncomingCall");
        }
    }

    async fn on_call_connected(&self, remote_id: String) {
        if let Err(err) = self.tx.send(UiEvent::CallConnected { remote_id }).await {
            tracing::error!(?err, "Cannot send UI event: CallConnected");
        }
    }

    async fn on_call_ended(&self, remote_id: String, reason: &str) {
        if let Err(err) = self
            .tx
            .send(UiEvent::CallEnded {
                remote_id,
                reason: reason.to_string(),
            })
            .await
        {
            tracing::error!(?err, "Cannot send UI event: CallEnded");
        }
    }
}
