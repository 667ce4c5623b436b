use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use softphone::config::{AppConfig, IncomingCallConfig};
use softphone::interaction::{Button, Effect, Input, apply, apply_failure};
use softphone::service::{DemoService, ServiceListener};
use softphone::ui::{UiEvent, UiEventListener};
use softphone_view::{CallState, ScreenVariant, ViewEvent, ViewStateModel};
use tokio::sync::mpsc;
use tracing_test::traced_test;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    Online(String),
    Offline,
    Incoming(String),
    Connected(String),
    Ended(String, String),
}

#[derive(Default)]
struct RecordingListener {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingListener {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    fn push(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[async_trait]
impl ServiceListener for RecordingListener {
    async fn on_service_online(&self, own_id: String) {
        self.push(Notice::Online(own_id));
    }

    async fn on_service_offline(&self) {
        self.push(Notice::Offline);
    }

    async fn on_incoming_call(&self, remote_id: String) {
        self.push(Notice::Incoming(remote_id));
    }

    async fn on_call_connected(&self, remote_id: String) {
        self.push(Notice::Connected(remote_id));
    }

    async fn on_call_ended(&self, remote_id: String, reason: &str) {
        self.push(Notice::Ended(remote_id, reason.to_string()));
    }
}

fn config(incoming: Option<&str>) -> AppConfig {
    AppConfig {
        own_id: "111122223333".to_string(),
        connect_delay_ms: 500,
        incoming_call: incoming.map(|remote_id| IncomingCallConfig {
            remote_id: remote_id.to_string(),
            after_ms: 2000,
        }),
        ..AppConfig::default()
    }
}

fn recorded(incoming: Option<&str>) -> (Arc<DemoService>, Arc<RecordingListener>) {
    let listener = Arc::new(RecordingListener::default());
    let service = DemoService::with_listener(&config(incoming), listener.clone());
    (service, listener)
}

#[tokio::test(start_paused = true)]
async fn test_connect_waits_for_delay() {
    let (service, listener) = recorded(None);
    let started = tokio::time::Instant::now();
    service.connect().await;
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert!(service.is_online().await);
    assert_eq!(
        listener.notices(),
        vec![Notice::Online("111122223333".to_string())]
    );

    // Already online: no second notification.
    service.connect().await;
    assert_eq!(listener.notices().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_connects_report_online_once() {
    let (service, listener) = recorded(Some("42"));
    tokio::join!(service.connect(), service.connect());
    assert!(service.is_online().await);
    assert_eq!(
        listener.notices(),
        vec![
            Notice::Online("111122223333".to_string()),
            Notice::Incoming("42".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_while_connecting_aborts_connect() {
    let (service, listener) = recorded(None);
    tokio::join!(service.connect(), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.disconnect().await;
    });
    assert!(!service.is_online().await);
    assert!(listener.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_place_call_and_hang_up() {
    let (service, listener) = recorded(None);
    let err = service.place_call("1234".to_string()).await.unwrap_err();
    assert_eq!(err.to_string(), "Service is offline");

    service.connect().await;
    let err = service.place_call(String::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "Remote id is empty");

    service.place_call("1234".to_string()).await.unwrap();
    assert_eq!(service.current_call().await, Some("1234".to_string()));
    let err = service.place_call("5678".to_string()).await.unwrap_err();
    assert_eq!(err.to_string(), "Already in a call");

    service.hang_up().await.unwrap();
    assert_eq!(service.current_call().await, None);
    let err = service.hang_up().await.unwrap_err();
    assert_eq!(err.to_string(), "No active call");

    assert_eq!(
        listener.notices()[1..],
        [
            Notice::Connected("1234".to_string()),
            Notice::Ended("1234".to_string(), "hangup".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_simulated_incoming_call_accept() {
    let (service, listener) = recorded(Some("100020003000"));
    service.connect().await;
    assert_eq!(
        listener.notices(),
        vec![
            Notice::Online("111122223333".to_string()),
            Notice::Incoming("100020003000".to_string()),
        ]
    );

    service.accept_call("100020003000".to_string()).await.unwrap();
    assert_eq!(service.current_call().await, Some("100020003000".to_string()));
    let err = service.accept_call("100020003000".to_string()).await.unwrap_err();
    assert_eq!(err.to_string(), "No incoming call to accept");
}

#[tokio::test(start_paused = true)]
async fn test_simulated_incoming_call_reject() {
    let (service, listener) = recorded(Some("42"));
    service.connect().await;
    service.reject_call("42".to_string()).await.unwrap();
    assert_eq!(service.current_call().await, None);
    let err = service.reject_call("42".to_string()).await.unwrap_err();
    assert_eq!(err.to_string(), "No incoming call to reject");
    assert_eq!(listener.notices().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_ends_active_call() {
    let (service, listener) = recorded(None);
    service.disconnect().await;
    assert!(listener.notices().is_empty());

    service.connect().await;
    service.place_call("77".to_string()).await.unwrap();
    service.disconnect().await;
    assert!(!service.is_online().await);
    assert_eq!(
        listener.notices()[2..],
        [
            Notice::Ended("77".to_string(), "service offline".to_string()),
            Notice::Offline,
        ]
    );
}

#[tokio::test(start_paused = true)]
#[traced_test]
async fn test_ui_listener_forwards_events() {
    let (tx, mut rx) = mpsc::channel(10);
    let service = DemoService::with_listener(&config(None), Arc::new(UiEventListener::new(tx)));
    service.connect().await;
    service.place_call("5".to_string()).await.unwrap();

    match rx.recv().await {
        Some(UiEvent::ServiceOnline { own_id }) => assert_eq!(own_id, "111122223333"),
        other => panic!("unexpected event: {other:?}"),
    }
    match rx.recv().await {
        Some(UiEvent::CallConnected { remote_id }) => assert_eq!(remote_id, "5"),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(logs_contain("Placing call"));
}

#[tokio::test(start_paused = true)]
#[traced_test]
async fn test_ui_listener_logs_closed_channel() {
    let (tx, rx) = mpsc::channel(10);
    drop(rx);
    let service = DemoService::with_listener(&config(None), Arc::new(UiEventListener::new(tx)));
    service.connect().await;
    assert!(service.is_online().await);
    assert!(logs_contain("Cannot send UI event: ServiceOnline"));
}

async fn run_call_effects(service: &DemoService, model: &mut ViewStateModel, effects: Vec<Effect>) {
    for effect in effects {
        let result = match &effect {
            Effect::PlaceCall(remote_id) => service.place_call(remote_id.clone()).await,
            Effect::AcceptCall(remote_id) => service.accept_call(remote_id.clone()).await,
            _ => Ok(()),
        };
        if result.is_err() {
            apply_failure(model, &effect);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_failed_place_call_disconnects_model() {
    let (service, _listener) = recorded(None);
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    apply(&mut model, Input::Tap(Button::Dial)).unwrap();
    for key in "1234".chars() {
        apply(&mut model, Input::Tap(Button::Digit(key))).unwrap();
    }
    let outcome = apply(&mut model, Input::Tap(Button::Call)).unwrap();
    assert_eq!(model.call_state(), CallState::Connected);

    // Still offline: the service refuses the call.
    run_call_effects(&service, &mut model, outcome.effects).await;
    assert_eq!(service.current_call().await, None);
    assert_eq!(model.call_state(), CallState::Disconnected);
}

#[tokio::test(start_paused = true)]
async fn test_failed_accept_disconnects_model() {
    let (service, _listener) = recorded(None);
    service.connect().await;
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    apply(&mut model, Input::IncomingCall("42".to_string())).unwrap();
    let outcome = apply(&mut model, Input::Tap(Button::Accept)).unwrap();
    assert_eq!(model.call_state(), CallState::Connected);

    // Nothing is ringing on the service side.
    run_call_effects(&service, &mut model, outcome.effects).await;
    assert_eq!(model.call_state(), CallState::Disconnected);
}

#[test]
fn test_failure_of_other_requests_keeps_model() {
    let mut model = ViewStateModel::new(ScreenVariant::Dialer);
    apply(&mut model, Input::CallConnected).unwrap();
    for effect in [
        Effect::HangUp,
        Effect::RejectCall("42".to_string()),
        Effect::Connect,
        Effect::ScrollToBottom,
    ] {
        assert!(apply_failure(&mut model, &effect).is_empty());
    }
    assert_eq!(model.call_state(), CallState::Connected);

    let outcome = apply_failure(&mut model, &Effect::PlaceCall("42".to_string()));
    assert_eq!(
        outcome.events,
        vec![ViewEvent::CallStateChanged(CallState::Disconnected)]
    );
    assert_eq!(outcome.effects, vec![Effect::ScrollToBottom]);
}
