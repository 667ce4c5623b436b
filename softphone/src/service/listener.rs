use async_trait::async_trait;

/// Callbacks from the signaling service.
///
/// Identifiers are passed as reported by the service, unformatted.
#[async_trait]
pub trait ServiceListener: Send + Sync {
    async fn on_service_online(&self, own_id: String);

    async fn on_service_offline(&self);

    async fn on_incoming_call(&self, remote_id: String);

    async fn on_call_connected(&self, remote_id: String);

    async fn on_call_ended(&self, remote_id: String, reason: &str);
}

pub struct StubListener;

#[async_trait]
impl ServiceListener for StubListener {
    async fn on_service_online(&self, _own_id: String) {}

    async fn on_service_offline(&self) {}

    async fn on_incoming_call(&self, _remote_id: String) {}

    async fn on_call_connected(&self, _remote_id: String) {}

    async fn on_call_ended(&self, _remote_id: String, _reason: &str) {}
}
