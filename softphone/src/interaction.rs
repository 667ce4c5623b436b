//! Input dispatch for the phone screens.
//!
//! Maps button taps and service notifications onto [`ViewStateModel`]
//! operations. The resulting [`Outcome`] lists the view events that fired
//! and the side effects the presentation layer still has to carry out
//! (scrolling, talking to the service).

use softphone_view::{
    CallState, HideTicket, Modal, Page, ServiceState, ViewError, ViewEvent, ViewStateModel,
};

/// Tappable controls across both screen variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Button {
    /// Open the dial pad.
    Dial,
    /// Leave the dial pad for the chat page.
    Back,
    /// Dial pad key.
    Digit(char),
    Backspace,
    Clear,
    Call,
    Disconnect,
    Accept,
    Reject,
    /// Contact list entry, carrying the contact's id.
    OpenContact(String),
    BackToList,
    ShowLogin,
    Login,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Tap(Button),
    /// Free-form edit of the remote id field.
    EditRemoteId(String),
    ServiceOnline,
    ServiceOffline,
    IncomingCall(String),
    CallConnected,
    CallEnded,
}

/// Work left for the presentation layer after an input was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    ScrollToBottom,
    /// Start a call to the given digits.
    PlaceCall(String),
    AcceptCall(String),
    RejectCall(String),
    HangUp,
    Connect,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub events: Vec<ViewEvent>,
    pub effects: Vec<Effect>,
}

impl Outcome {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.effects.is_empty()
    }

    /// Tickets of modals that started closing.
    pub fn hide_tickets(&self) -> impl Iterator<Item = &HideTicket> {
        self.events.iter().filter_map(|event| match event {
            ViewEvent::ModalClosing(ticket) => Some(ticket),
            _ => None,
        })
    }

    fn record(&mut self, event: Option<ViewEvent>) {
        self.events.extend(event);
    }
}

/// Applies one input to the model.
///
/// Inputs that address a page or modal the running variant does not have
/// fail with [`ViewError::InvalidArgument`] before touching the model.
pub fn apply(model: &mut ViewStateModel, input: Input) -> Result<Outcome, ViewError> {
    let mut outcome = Outcome::default();
    match input {
        Input::Tap(button) => tap(model, button, &mut outcome)?,
        Input::EditRemoteId(raw) => outcome.record(model.set_remote_id(&raw)),
        Input::ServiceOnline => outcome.record(model.set_service_state(ServiceState::Online)),
        Input::ServiceOffline => outcome.record(model.set_service_state(ServiceState::Offline)),
        Input::IncomingCall(remote_id) => {
            if !model.variant().has_modal(Modal::Incoming) {
                return Err(ViewError::invalid("modal", Modal::Incoming.as_str()));
            }
            outcome.record(model.set_remote_id(&remote_id));
            outcome.record(model.open_modal(Modal::Incoming)?);
        }
        Input::CallConnected => outcome.record(model.set_call_state(CallState::Connected)),
        Input::CallEnded => {
            // The caller may give up before the call was answered.
            if model.modal() == Some(Modal::Incoming) {
                outcome.record(model.close_modal());
            }
            outcome.record(model.set_call_state(CallState::Disconnected));
            outcome.effects.push(Effect::ScrollToBottom);
        }
    }
    Ok(outcome)
}

/// Brings the model back in line with the service after `effect` failed.
///
/// A call the model already shows as connected is ended when the service
/// refused to place or accept it. Other failures leave the model alone.
pub fn apply_failure(model: &mut ViewStateModel, effect: &Effect) -> Outcome {
    let mut outcome = Outcome::default();
    match effect {
        Effect::PlaceCall(_) | Effect::AcceptCall(_) => {
            outcome.record(model.set_call_state(CallState::Disconnected));
            outcome.effects.push(Effect::ScrollToBottom);
        }
        Effect::ScrollToBottom | Effect::RejectCall(_) | Effect::HangUp | Effect::Connect => {}
    }
    outcome
}

fn tap(model: &mut ViewStateModel, button: Button, outcome: &mut Outcome) -> Result<(), ViewError> {
    match button {
        Button::Dial => outcome.record(model.set_page(Page::Dial)?),
        Button::Back => {
            outcome.record(model.set_page(Page::Chat)?);
            outcome.effects.push(Effect::ScrollToBottom);
        }
        Button::Digit(key) => outcome.record(model.push_remote_digit(key)),
        Button::Backspace => outcome.record(model.backspace_remote_id()),
        Button::Clear => outcome.record(model.clear_remote_id()),
        Button::Call => {
            let digits = model.remote_digits();
            if digits.is_empty() {
                tracing::debug!("Call tapped with an empty remote id");
                return Ok(());
            }
            outcome.record(model.set_page(Page::Chat)?);
            outcome.effects.push(Effect::ScrollToBottom);
            outcome.record(model.set_call_state(CallState::Connected));
            outcome.effects.push(Effect::PlaceCall(digits));
        }
        Button::Disconnect => {
            outcome.record(model.set_call_state(CallState::Disconnected));
            outcome.effects.push(Effect::HangUp);
        }
        Button::Accept => {
            outcome.record(model.close_modal());
            outcome.record(model.set_page(Page::Chat)?);
            outcome.effects.push(Effect::ScrollToBottom);
            outcome.record(model.set_call_state(CallState::Connected));
            outcome.effects.push(Effect::AcceptCall(model.remote_digits()));
        }
        Button::Reject => {
            outcome.record(model.close_modal());
            outcome.effects.push(Effect::RejectCall(model.remote_digits()));
        }
        Button::OpenContact(id) => {
            if !model.variant().has_page(Page::List) {
                return Err(ViewError::invalid("page", Page::List.as_str()));
            }
            outcome.record(model.set_remote_id(&id));
            outcome.record(model.set_page(Page::Chat)?);
            outcome.effects.push(Effect::ScrollToBottom);
        }
        Button::BackToList => outcome.record(model.set_page(Page::List)?),
        Button::ShowLogin => outcome.record(model.open_modal(Modal::Login)?),
        Button::Login => {
            if !model.variant().has_modal(Modal::Login) {
                return Err(ViewError::invalid("modal", Modal::Login.as_str()));
            }
            outcome.record(model.close_modal());
            outcome.effects.push(Effect::Connect);
        }
    }
    Ok(())
}
