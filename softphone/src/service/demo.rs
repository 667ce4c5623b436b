use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tokio::sync::RwLock;

use crate::config::AppConfig;

use super::{ServiceListener, StubListener};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConnState {
    Offline,
    /// Waiting out the connect delay.
    Connecting,
    Online,
}

/// Local stand-in for the signaling service.
///
/// Goes online after a fixed delay and answers call requests immediately;
/// it never touches the network.
pub struct DemoService {
    own_id: String,
    connect_delay: Duration,
    incoming: Option<(String, Duration)>,
    listener: Arc<dyn ServiceListener>,
    conn: RwLock<ConnState>,
    ringing: RwLock<Option<String>>,
    current_call: RwLock<Option<String>>,
}

impl DemoService {
    pub fn new(config: &AppConfig) -> Arc<Self> {
        Self::with_listener(config, Arc::new(StubListener))
    }

    pub fn with_listener<L>(config: &AppConfig, listener: Arc<L>) -> Arc<Self>
    where
        L: ServiceListener + 'static,
    {
        let incoming = config.incoming_call.as_ref().map(|incoming| {
            (
                incoming.remote_id.clone(),
                Duration::from_millis(incoming.after_ms),
            )
        });
        Arc::new(Self {
            own_id: config.own_id.clone(),
            connect_delay: config.connect_delay(),
            incoming,
            listener,
            conn: RwLock::new(ConnState::Offline),
            ringing: RwLock::new(None),
            current_call: RwLock::new(None),
        })
    }

    pub async fn is_online(&self) -> bool {
        *self.conn.read().await == ConnState::Online
    }

    pub async fn current_call(&self) -> Option<String> {
        self.current_call.read().await.clone()
    }

    /// Connect and, when configured, ring once with the simulated caller.
    ///
    /// Only the first of overlapping calls connects; the others return
    /// immediately.
    pub async fn connect(&self) {
        {
            let mut conn = self.conn.write().await;
            if *conn != ConnState::Offline {
                tracing::debug!(state = ?*conn, "Demo service already connecting or online");
                return;
            }
            *conn = ConnState::Connecting;
        }
        tracing::info!(delay = ?self.connect_delay, "Connecting demo service");
        tokio::time::sleep(self.connect_delay).await;
        {
            let mut conn = self.conn.write().await;
            if *conn != ConnState::Connecting {
                tracing::debug!("Connect cancelled by disconnect");
                return;
            }
            *conn = ConnState::Online;
        }
        self.listener.on_service_online(self.own_id.clone()).await;

        if let Some((remote_id, after)) = self.incoming.clone() {
            tokio::time::sleep(after).await;
            if !self.is_online().await || self.current_call().await.is_some() {
                tracing::debug!("Skipping simulated incoming call");
                return;
            }
            tracing::info!(%remote_id, "Simulating incoming call");
            *self.ringing.write().await = Some(remote_id.clone());
            self.listener.on_incoming_call(remote_id).await;
        }
    }

    pub async fn disconnect(&self) {
        let previous = std::mem::replace(&mut *self.conn.write().await, ConnState::Offline);
        match previous {
            ConnState::Offline => return,
            ConnState::Connecting => {
                tracing::info!("Demo service connect aborted");
                return;
            }
            ConnState::Online => {}
        }
        self.ringing.write().await.take();
        let ended = self.current_call.write().await.take();
        if let Some(remote_id) = ended {
            self.listener
                .on_call_ended(remote_id, "service offline")
                .await;
        }
        tracing::info!("Demo service offline");
        self.listener.on_service_offline().await;
    }

    pub async fn place_call(&self, remote_id: String) -> Result<(), anyhow::Error> {
        tracing::info!(%remote_id, "Placing call");
        if !self.is_online().await {
            tracing::warn!("Cannot place call - service is offline");
            return Err(anyhow!("Service is offline"));
        }
        if remote_id.is_empty() {
            return Err(anyhow!("Remote id is empty"));
        }
        let mut current = self.current_call.write().await;
        if current.is_some() {
            tracing::warn!("Cannot place call - already in a call");
            return Err(anyhow!("Already in a call"));
        }
        *current = Some(remote_id.clone());
        drop(current);
        self.listener.on_call_connected(remote_id).await;
        Ok(())
    }

    pub async fn accept_call(&self, remote_id: String) -> Result<(), anyhow::Error> {
        let ringing = self.ringing.write().await.take();
        let Some(caller) = ringing else {
            return Err(anyhow!("No incoming call to accept"));
        };
        if caller != remote_id {
            tracing::warn!(%caller, %remote_id, "Accepting call from a different id");
        }
        let mut current = self.current_call.write().await;
        if current.is_some() {
            return Err(anyhow!("Already in a call"));
        }
        *current = Some(caller.clone());
        drop(current);
        tracing::info!(%caller, "Call accepted");
        self.listener.on_call_connected(caller).await;
        Ok(())
    }

    pub async fn reject_call(&self, remote_id: String) -> Result<(), anyhow::Error> {
        let ringing = self.ringing.write().await.take();
        match ringing {
            Some(caller) => {
                tracing::info!(%caller, %remote_id, "Call rejected");
                Ok(())
            }
            None => Err(anyhow!("No incoming call to reject")),
        }
    }

    pub async fn hang_up(&self) -> Result<(), anyhow::Error> {
        let Some(remote_id) = self.current_call.write().await.take() else {
            return Err(anyhow!("No active call"));
        };
        tracing::info!(%remote_id, "Hanging up");
        self.listener.on_call_ended(remote_id, "hangup").await;
        Ok(())
    }
}
