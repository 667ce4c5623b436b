use std::time::Duration;

use crate::{CallState, Modal, Page, ServiceState};

/// Transition edge reported by the model.
///
/// No-op transitions never produce an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    PageChanged { from: Page, to: Page },
    /// The modal just became visible. Fired once per opening, including
    /// when it replaces another modal.
    ModalOpened(Modal),
    /// The modal was closed and its exit transition started.
    ModalClosing(HideTicket),
    /// The exit transition finished; the modal may be removed from view.
    ModalHidden(Modal),
    ServiceStateChanged(ServiceState),
    CallStateChanged(CallState),
    /// New formatted remote identifier.
    RemoteIdChanged(String),
}

/// Pending "fully hidden" signal for a closing modal.
///
/// Await [`HideTicket::elapsed`] and hand the ticket back to
/// [`crate::ViewStateModel::complete_modal_hide`]. A ticket is invalidated by
/// any modal opening that happens in between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HideTicket {
    modal: Modal,
    generation: u64,
    delay: Duration,
}

impl HideTicket {
    pub(crate) fn new(modal: Modal, generation: u64, delay: Duration) -> Self {
        Self {
            modal,
            generation,
            delay,
        }
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits for the exit transition and returns the ticket.
    pub async fn elapsed(self) -> Self {
        tokio::time::sleep(self.delay).await;
        self
    }
}
