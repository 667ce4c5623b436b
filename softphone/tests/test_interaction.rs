use softphone::interaction::{Button, Effect, Input, apply};
use softphone_view::{
    CallState, Modal, Page, ScreenVariant, ServiceState, ViewError, ViewEvent, ViewStateModel,
};

fn tap(model: &mut ViewStateModel, button: Button) -> softphone::interaction::Outcome {
    apply(model, Input::Tap(button)).unwrap()
}

fn dial(model: &mut ViewStateModel, digits: &str) {
    for key in digits.chars() {
        tap(model, Button::Digit(key));
    }
}

#[test]
fn test_dial_button_opens_dial_page() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    let outcome = tap(&mut model, Button::Dial);
    assert_eq!(model.page(), Page::Dial);
    assert_eq!(
        outcome.events,
        vec![ViewEvent::PageChanged {
            from: Page::Chat,
            to: Page::Dial
        }]
    );
    assert!(outcome.effects.is_empty());
}

#[test]
fn test_back_returns_to_chat_and_scrolls() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    tap(&mut model, Button::Dial);
    let outcome = tap(&mut model, Button::Back);
    assert_eq!(model.page(), Page::Chat);
    assert_eq!(outcome.effects, vec![Effect::ScrollToBottom]);
}

#[test]
fn test_keypad_edits_remote_id() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    tap(&mut model, Button::Dial);
    dial(&mut model, "12345");
    assert_eq!(model.remote_id(), "1234 5");

    let outcome = tap(&mut model, Button::Backspace);
    assert_eq!(model.remote_id(), "1234");
    assert_eq!(
        outcome.events,
        vec![ViewEvent::RemoteIdChanged("1234".to_string())]
    );

    tap(&mut model, Button::Clear);
    assert_eq!(model.remote_id(), "");
    // Clearing an empty buffer changes nothing.
    assert!(tap(&mut model, Button::Clear).is_empty());
}

#[test]
fn test_free_form_edit_is_formatted() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    apply(&mut model, Input::EditRemoteId("12-34 56a7".to_string())).unwrap();
    assert_eq!(model.remote_id(), "1234 567");
}

#[test]
fn test_call_with_empty_remote_id_does_nothing() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    tap(&mut model, Button::Dial);
    let outcome = tap(&mut model, Button::Call);
    assert!(outcome.is_empty());
    assert_eq!(model.page(), Page::Dial);
    assert_eq!(model.call_state(), CallState::Disconnected);
}

#[test]
fn test_call_connects_and_returns_to_chat() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    tap(&mut model, Button::Dial);
    dial(&mut model, "55501234");
    let outcome = tap(&mut model, Button::Call);
    assert_eq!(model.page(), Page::Chat);
    assert_eq!(model.call_state(), CallState::Connected);
    assert_eq!(
        outcome.effects,
        vec![
            Effect::ScrollToBottom,
            Effect::PlaceCall("55501234".to_string())
        ]
    );
    assert!(
        outcome
            .events
            .contains(&ViewEvent::CallStateChanged(CallState::Connected))
    );
}

#[test]
fn test_disconnect_hangs_up() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    apply(&mut model, Input::CallConnected).unwrap();
    let outcome = tap(&mut model, Button::Disconnect);
    assert_eq!(model.call_state(), CallState::Disconnected);
    assert_eq!(outcome.effects, vec![Effect::HangUp]);
}

#[test]
fn test_service_notifications() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    let outcome = apply(&mut model, Input::ServiceOnline).unwrap();
    assert_eq!(model.service_state(), ServiceState::Online);
    assert_eq!(
        outcome.events,
        vec![ViewEvent::ServiceStateChanged(ServiceState::Online)]
    );
    assert!(apply(&mut model, Input::ServiceOnline).unwrap().is_empty());

    apply(&mut model, Input::CallConnected).unwrap();
    apply(&mut model, Input::ServiceOffline).unwrap();
    assert_eq!(model.service_state(), ServiceState::Offline);
    // Going offline does not touch the call axis.
    assert_eq!(model.call_state(), CallState::Connected);
}

#[test]
fn test_incoming_call_then_accept() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    tap(&mut model, Button::Dial);
    let outcome = apply(&mut model, Input::IncomingCall("100020003000".to_string())).unwrap();
    assert_eq!(model.modal(), Some(Modal::Incoming));
    assert_eq!(model.remote_id(), "1000 2000 3000");
    assert!(outcome.events.contains(&ViewEvent::ModalOpened(Modal::Incoming)));

    let outcome = tap(&mut model, Button::Accept);
    assert_eq!(model.modal(), None);
    assert_eq!(model.visible_modal(), Some(Modal::Incoming));
    assert_eq!(model.page(), Page::Chat);
    assert_eq!(model.call_state(), CallState::Connected);
    assert_eq!(
        outcome.effects,
        vec![
            Effect::ScrollToBottom,
            Effect::AcceptCall("100020003000".to_string())
        ]
    );

    let tickets: Vec<_> = outcome.hide_tickets().cloned().collect();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].modal(), Modal::Incoming);
    model.complete_modal_hide(&tickets[0]);
    assert_eq!(model.visible_modal(), None);
}

#[test]
fn test_incoming_call_then_reject() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    apply(&mut model, Input::IncomingCall("42".to_string())).unwrap();
    let outcome = tap(&mut model, Button::Reject);
    assert_eq!(model.modal(), None);
    assert_eq!(model.call_state(), CallState::Disconnected);
    assert_eq!(outcome.effects, vec![Effect::RejectCall("42".to_string())]);
    assert_eq!(outcome.hide_tickets().count(), 1);
}

#[test]
fn test_call_ended_closes_ringing_modal() {
    let mut model = ViewStateModel::new(ScreenVariant::Contacts);
    apply(&mut model, Input::IncomingCall("7".to_string())).unwrap();
    let outcome = apply(&mut model, Input::CallEnded).unwrap();
    assert_eq!(model.modal(), None);
    assert_eq!(outcome.hide_tickets().count(), 1);
    assert_eq!(outcome.effects, vec![Effect::ScrollToBottom]);
}

#[test]
fn test_call_ended_leaves_login_modal_open() {
    let mut model = ViewStateModel::new(ScreenVariant::Contacts);
    tap(&mut model, Button::ShowLogin);
    apply(&mut model, Input::CallConnected).unwrap();
    let outcome = apply(&mut model, Input::CallEnded).unwrap();
    assert_eq!(model.modal(), Some(Modal::Login));
    assert_eq!(outcome.hide_tickets().count(), 0);
    assert_eq!(
        outcome.events,
        vec![ViewEvent::CallStateChanged(CallState::Disconnected)]
    );
}

#[test]
fn test_contacts_open_and_back_to_list() {
    let mut model = ViewStateModel::new(ScreenVariant::Contacts);
    let outcome = tap(&mut model, Button::OpenContact("555012340000".to_string()));
    assert_eq!(model.page(), Page::Chat);
    assert_eq!(model.remote_id(), "5550 1234 0000");
    assert_eq!(outcome.effects, vec![Effect::ScrollToBottom]);

    tap(&mut model, Button::BackToList);
    assert_eq!(model.page(), Page::List);
}

#[test]
fn test_login_closes_modal_and_connects() {
    let mut model = ViewStateModel::new(ScreenVariant::Contacts);
    let outcome = tap(&mut model, Button::ShowLogin);
    assert_eq!(outcome.events, vec![ViewEvent::ModalOpened(Modal::Login)]);

    let outcome = tap(&mut model, Button::Login);
    assert_eq!(model.modal(), None);
    assert_eq!(model.closing_modal(), Some(Modal::Login));
    assert_eq!(outcome.effects, vec![Effect::Connect]);
}

#[test]
fn test_incoming_call_replaces_login_modal() {
    let mut model = ViewStateModel::new(ScreenVariant::Contacts);
    tap(&mut model, Button::ShowLogin);
    apply(&mut model, Input::IncomingCall("9".to_string())).unwrap();
    assert_eq!(model.modal(), Some(Modal::Incoming));
}

#[test]
fn test_inputs_outside_variant_are_rejected() {
    let mut dialer = ViewStateModel::new(ScreenVariant::Dialer);
    for button in [
        Button::OpenContact("1".to_string()),
        Button::BackToList,
        Button::ShowLogin,
        Button::Login,
    ] {
        let err = apply(&mut dialer, Input::Tap(button)).unwrap_err();
        assert!(matches!(err, ViewError::InvalidArgument { .. }));
    }
    assert_eq!(dialer.remote_id(), "");
    assert_eq!(dialer.page(), Page::Chat);

    let mut contacts = ViewStateModel::new(ScreenVariant::Contacts);
    let err = apply(&mut contacts, Input::Tap(Button::Dial)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid page: `dial`");
    assert_eq!(contacts.page(), Page::List);
}
