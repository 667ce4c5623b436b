use std::sync::Arc;
use std::time::Duration;

use crate::{
    CallState, HideTicket, Modal, Page, Result, ScreenVariant, ServiceState, StubListener,
    ViewError, ViewEvent, ViewListener, ViewState, backspace, format_id, id_digits,
};

/// Default duration of a modal exit transition.
pub const DEFAULT_MODAL_TRANSITION: Duration = Duration::from_millis(210);

/// Owner of the session's [`ViewState`].
///
/// Every mutation goes through this type. Each operation returns the event
/// it emitted, or `None` when the requested state was already current, and
/// also hands the event to the attached [`ViewListener`].
pub struct ViewStateModel {
    variant: ScreenVariant,
    state: ViewState,
    closing: Option<HideTicket>,
    generation: u64,
    modal_transition: Duration,
    listener: Arc<dyn ViewListener>,
}

impl ViewStateModel {
    pub fn new(variant: ScreenVariant) -> Self {
        Self::with_listener(variant, Arc::new(StubListener))
    }

    pub fn with_listener<L>(variant: ScreenVariant, listener: Arc<L>) -> Self
    where
        L: ViewListener + 'static,
    {
        Self {
            variant,
            state: ViewState::new(variant),
            closing: None,
            generation: 0,
            modal_transition: DEFAULT_MODAL_TRANSITION,
            listener,
        }
    }

    pub fn with_modal_transition(mut self, duration: Duration) -> Self {
        self.modal_transition = duration;
        self
    }

    pub fn variant(&self) -> ScreenVariant {
        self.variant
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn page(&self) -> Page {
        self.state.page
    }

    pub fn modal(&self) -> Option<Modal> {
        self.state.modal
    }

    pub fn service_state(&self) -> ServiceState {
        self.state.service
    }

    pub fn call_state(&self) -> CallState {
        self.state.call
    }

    /// Formatted remote identifier.
    pub fn remote_id(&self) -> &str {
        &self.state.remote_id
    }

    /// Remote identifier without group separators.
    pub fn remote_digits(&self) -> String {
        id_digits(&self.state.remote_id)
    }

    /// Modal whose exit transition is still running.
    pub fn closing_modal(&self) -> Option<Modal> {
        self.closing.as_ref().map(HideTicket::modal)
    }

    /// Modal that should currently be drawn: the open one, or the one still
    /// transitioning out.
    pub fn visible_modal(&self) -> Option<Modal> {
        self.state.modal.or_else(|| self.closing_modal())
    }

    pub fn modal_transition(&self) -> Duration {
        self.modal_transition
    }

    pub fn set_page(&mut self, target: Page) -> Result<Option<ViewEvent>> {
        if !self.variant.has_page(target) {
            return Err(ViewError::invalid("page", target.as_str()));
        }
        let from = self.state.page;
        if from == target {
            tracing::trace!(page = %target, "Page already shown");
            return Ok(None);
        }
        self.state.page = target;
        tracing::debug!(%from, to = %target, "Page changed");
        Ok(self.emit(ViewEvent::PageChanged { from, to: target }))
    }

    /// Opens `target`, or closes the current modal when `target` is `None`.
    ///
    /// Opening replaces any modal already shown and cancels a pending hide.
    /// Closing starts the exit transition and returns a
    /// [`ViewEvent::ModalClosing`] carrying the ticket to complete it with.
    pub fn set_modal(&mut self, target: Option<Modal>) -> Result<Option<ViewEvent>> {
        match target {
            Some(modal) => self.open_modal(modal),
            None => Ok(self.close_modal()),
        }
    }

    pub fn open_modal(&mut self, modal: Modal) -> Result<Option<ViewEvent>> {
        if !self.variant.has_modal(modal) {
            return Err(ViewError::invalid("modal", modal.as_str()));
        }
        if self.state.modal == Some(modal) {
            tracing::trace!(%modal, "Modal already open");
            return Ok(None);
        }
        if let Some(ticket) = self.closing.take() {
            tracing::debug!(closing = %ticket.modal(), "Pending modal hide cancelled");
        }
        self.generation += 1;
        let replaced = self.state.modal.replace(modal);
        tracing::debug!(%modal, ?replaced, "Modal opened");
        Ok(self.emit(ViewEvent::ModalOpened(modal)))
    }

    pub fn close_modal(&mut self) -> Option<ViewEvent> {
        let modal = match self.state.modal.take() {
            Some(modal) => modal,
            None => {
                tracing::trace!("No modal to close");
                return None;
            }
        };
        self.generation += 1;
        let ticket = HideTicket::new(modal, self.generation, self.modal_transition);
        self.closing = Some(ticket.clone());
        tracing::debug!(%modal, delay = ?self.modal_transition, "Modal closing");
        self.emit(ViewEvent::ModalClosing(ticket))
    }

    /// Finishes the exit transition started by [`Self::close_modal`].
    ///
    /// Returns [`ViewEvent::ModalHidden`] only for the most recent ticket;
    /// tickets made stale by a later opening are ignored.
    pub fn complete_modal_hide(&mut self, ticket: &HideTicket) -> Option<ViewEvent> {
        if self.closing.as_ref() != Some(ticket) {
            tracing::debug!(
                modal = %ticket.modal(),
                generation = ticket.generation(),
                "Ignoring stale modal hide"
            );
            return None;
        }
        self.closing = None;
        tracing::debug!(modal = %ticket.modal(), "Modal hidden");
        self.emit(ViewEvent::ModalHidden(ticket.modal()))
    }

    pub fn set_service_state(&mut self, service: ServiceState) -> Option<ViewEvent> {
        if self.state.service == service {
            tracing::trace!(%service, "Service state unchanged");
            return None;
        }
        self.state.service = service;
        tracing::info!(%service, "Service state changed");
        self.emit(ViewEvent::ServiceStateChanged(service))
    }

    pub fn set_call_state(&mut self, call: CallState) -> Option<ViewEvent> {
        if self.state.call == call {
            tracing::trace!(%call, "Call state unchanged");
            return None;
        }
        self.state.call = call;
        tracing::info!(%call, "Call state changed");
        self.emit(ViewEvent::CallStateChanged(call))
    }

    /// Replaces the remote identifier with the formatted form of `raw`.
    pub fn set_remote_id(&mut self, raw: &str) -> Option<ViewEvent> {
        self.update_remote_id(format_id(raw))
    }

    /// Appends a dial pad key. Non-digits and digits past the limit leave
    /// the identifier unchanged.
    pub fn push_remote_digit(&mut self, key: char) -> Option<ViewEvent> {
        let mut raw = self.state.remote_id.clone();
        raw.push(key);
        self.update_remote_id(format_id(&raw))
    }

    pub fn backspace_remote_id(&mut self) -> Option<ViewEvent> {
        self.update_remote_id(backspace(&self.state.remote_id))
    }

    pub fn clear_remote_id(&mut self) -> Option<ViewEvent> {
        self.update_remote_id(String::new())
    }

    fn update_remote_id(&mut self, formatted: String) -> Option<ViewEvent> {
        if self.state.remote_id == formatted {
            return None;
        }
        self.state.remote_id = formatted.clone();
        tracing::debug!(remote_id = %formatted, "Remote id changed");
        self.emit(ViewEvent::RemoteIdChanged(formatted))
    }

    fn emit(&self, event: ViewEvent) -> Option<ViewEvent> {
        self.listener.on_view_event(&event);
        Some(event)
    }
}

impl std::fmt::Debug for ViewStateModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewStateModel")
            .field("variant", &self.variant)
            .field("state", &self.state)
            .field("closing", &self.closing)
            .finish()
    }
}
