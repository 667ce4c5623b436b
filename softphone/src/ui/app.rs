use std::any::TypeId;
use std::sync::Arc;

use iced::futures::sink::SinkExt as _;
use iced::widget::{Space, column, container, row, stack, text};
use iced::{Alignment, Element, Length, Padding, Subscription, Task, Theme, stream};
use softphone_view::{CallState, HideTicket, Page, ScreenVariant, ViewEvent, ViewStateModel, format_id};
use tokio::sync::{Mutex as TokioMutex, mpsc};

use crate::config::AppConfig;
use crate::interaction::{self, Button, Effect, Input, Outcome};
use crate::service::DemoService;
use crate::ui::core::{Screen, ScreenCommand};
use crate::ui::screens::{
    ChatMessage, ChatScreen, ContactsMessage, ContactsScreen, DialMessage, DialScreen,
    ModalLayer, ModalMessage,
};
use crate::ui::theme::{colors, styles};
use crate::ui::{UiEvent, UiEventListener};

pub struct AppContext {
    pub config: AppConfig,
    pub model: ViewStateModel,
    pub service: Arc<DemoService>,
    /// Formatted identifier reported by the service while online.
    pub own_id: Option<String>,
    pub theme: Theme,
    pub ui_event_rx: Arc<TokioMutex<mpsc::Receiver<UiEvent>>>,
}

impl AppContext {
    fn new(config: AppConfig) -> Self {
        let (ui_event_tx, ui_event_rx) = mpsc::channel(100);
        let service = DemoService::with_listener(&config, Arc::new(UiEventListener::new(ui_event_tx)));
        let model = ViewStateModel::new(config.variant).with_modal_transition(config.modal_transition());
        let theme = config.theme.to_iced_theme();
        Self {
            config,
            model,
            service,
            own_id: None,
            theme,
            ui_event_rx: Arc::new(TokioMutex::new(ui_event_rx)),
        }
    }
}

pub struct PhoneApp {
    ctx: AppContext,
    dial: DialScreen,
    chat: ChatScreen,
    contacts: ContactsScreen,
    modal: ModalLayer,
}

#[derive(Clone, Debug)]
pub enum AppMessage {
    // Wrapped screen messages
    Dial(DialMessage),
    Chat(ChatMessage),
    Contacts(ContactsMessage),
    Modal(ModalMessage),
    // Events from the service subscription
    UiEvent(UiEvent),
    ModalHideElapsed(HideTicket),
    /// Service request finished; carries the effect that issued it.
    ServiceDone(Effect, Result<(), String>),
}

impl PhoneApp {
    pub fn new(config: AppConfig) -> (Self, Task<AppMessage>) {
        let variant = config.variant;
        let contacts = ContactsScreen::new(config.contacts.clone());
        let mut app = Self {
            ctx: AppContext::new(config),
            dial: DialScreen::new(),
            chat: ChatScreen::new(),
            contacts,
            modal: ModalLayer::new(),
        };
        let task = match variant {
            ScreenVariant::Dialer => app.connect(),
            ScreenVariant::Contacts => app.dispatch(Input::Tap(Button::ShowLogin)),
        };
        (app, task)
    }

    pub fn subscription(&self) -> Subscription<AppMessage> {
        let event_rx = self.ctx.ui_event_rx.clone();
        let ui_event_sub = stream::channel(100, move |mut output| async move {
            loop {
                let mut rx = event_rx.lock().await;
                match rx.recv().await {
                    Some(event) => {
                        let _ = output.send(AppMessage::UiEvent(event)).await;
                    }
                    None => {
                        break;
                    }
                }
            }
        });
        Subscription::run_with_id(TypeId::of::<UiEvent>(), ui_event_sub)
    }

    pub fn title(&self) -> String {
        match self.ctx.model.page() {
            Page::List => "Softphone: Contacts".to_string(),
            Page::Chat => "Softphone".to_string(),
            Page::Dial => "Softphone: Dial".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.ctx.theme.clone()
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match message {
            AppMessage::Dial(msg) => {
                let cmd = self.dial.update(msg, &mut self.ctx);
                self.handle_screen_command(cmd, AppMessage::Dial)
            }
            AppMessage::Chat(msg) => {
                let cmd = self.chat.update(msg, &mut self.ctx);
                self.handle_screen_command(cmd, AppMessage::Chat)
            }
            AppMessage::Contacts(msg) => {
                let cmd = self.contacts.update(msg, &mut self.ctx);
                self.handle_screen_command(cmd, AppMessage::Contacts)
            }
            AppMessage::Modal(msg) => {
                let cmd = self.modal.update(msg, &mut self.ctx);
                self.handle_screen_command(cmd, AppMessage::Modal)
            }
            AppMessage::UiEvent(event) => self.apply_ui_event(event),
            AppMessage::ModalHideElapsed(ticket) => {
                if let Some(event) = self.ctx.model.complete_modal_hide(&ticket) {
                    tracing::debug!(?event, "Modal removed from view");
                }
                Task::none()
            }
            AppMessage::ServiceDone(effect, result) => {
                let Err(err) = result else {
                    return Task::none();
                };
                tracing::error!(?effect, %err, "Service request failed");
                self.chat.log(format!("Error: {err}"));
                let outcome = interaction::apply_failure(&mut self.ctx.model, &effect);
                self.run_outcome(outcome)
            }
        }
    }

    pub fn view(&self) -> Element<'_, AppMessage> {
        let theme = &self.ctx.theme;
        let page = match self.ctx.model.page() {
            Page::List => self.contacts.view(&self.ctx, theme).map(AppMessage::Contacts),
            Page::Chat => self.chat.view(&self.ctx, theme).map(AppMessage::Chat),
            Page::Dial => self.dial.view(&self.ctx, theme).map(AppMessage::Dial),
        };
        let base = container(column![self.build_status_bar(theme), page])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |t: &Theme| container::Style {
                background: Some(iced::Background::Color(colors::background_base(t))),
                ..Default::default()
            });
        if self.ctx.model.visible_modal().is_some() {
            let modal = self.modal.view(&self.ctx, theme).map(AppMessage::Modal);
            stack![base, modal].into()
        } else {
            base.into()
        }
    }

    /// Helper method to handle ScreenCommand and convert to Task<AppMessage>
    fn handle_screen_command<M, F>(&mut self, cmd: ScreenCommand<M>, wrap: F) -> Task<AppMessage>
    where
        M: Send + 'static,
        F: Fn(M) -> AppMessage + 'static + Send + Sync + Clone,
    {
        match cmd {
            ScreenCommand::None => Task::none(),
            ScreenCommand::Message(task) => task.map(wrap),
            ScreenCommand::Input(input) => self.dispatch(input),
        }
    }

    fn apply_ui_event(&mut self, event: UiEvent) -> Task<AppMessage> {
        let input = match event {
            UiEvent::ServiceOnline { own_id } => {
                self.ctx.own_id = Some(format_id(&own_id));
                Input::ServiceOnline
            }
            UiEvent::ServiceOffline => {
                self.ctx.own_id = None;
                Input::ServiceOffline
            }
            UiEvent::IncomingCall { remote_id } => {
                self.chat
                    .log(format!("Incoming call from {}", format_id(&remote_id)));
                Input::IncomingCall(remote_id)
            }
            UiEvent::CallConnected { .. } => Input::CallConnected,
            UiEvent::CallEnded { remote_id, reason } => {
                tracing::info!(%remote_id, %reason, "Call ended by service");
                Input::CallEnded
            }
        };
        self.dispatch(input)
    }

    fn dispatch(&mut self, input: Input) -> Task<AppMessage> {
        tracing::debug!(?input, "Dispatching input");
        match interaction::apply(&mut self.ctx.model, input) {
            Ok(outcome) => self.run_outcome(outcome),
            Err(err) => {
                tracing::error!(%err, "Input rejected by view model");
                Task::none()
            }
        }
    }

    fn run_outcome(&mut self, outcome: Outcome) -> Task<AppMessage> {
        let mut tasks = Vec::new();
        for ticket in outcome.hide_tickets() {
            tasks.push(Task::perform(
                ticket.clone().elapsed(),
                AppMessage::ModalHideElapsed,
            ));
        }
        for event in &outcome.events {
            if let ViewEvent::CallStateChanged(state) = event {
                let line = match state {
                    CallState::Connected => format!("Call with {}", self.ctx.model.remote_id()),
                    CallState::Disconnected => "Call ended".to_string(),
                };
                self.chat.log(line);
            }
        }
        for effect in outcome.effects {
            let task = match effect {
                Effect::ScrollToBottom => self.chat.scroll_to_bottom().map(AppMessage::Chat),
                Effect::Connect => self.connect(),
                Effect::PlaceCall(_) | Effect::AcceptCall(_) | Effect::RejectCall(_) | Effect::HangUp => {
                    self.request(effect)
                }
            };
            tasks.push(task);
        }
        Task::batch(tasks)
    }

    fn connect(&self) -> Task<AppMessage> {
        let service = self.ctx.service.clone();
        Task::perform(
            async move {
                service.connect().await;
                Ok::<(), String>(())
            },
            |result| AppMessage::ServiceDone(Effect::Connect, result),
        )
    }

    /// Runs a call request against the service.
    fn request(&self, effect: Effect) -> Task<AppMessage> {
        let service = self.ctx.service.clone();
        let request = effect.clone();
        Task::perform(
            async move {
                let result = match request {
                    Effect::PlaceCall(remote_id) => service.place_call(remote_id).await,
                    Effect::AcceptCall(remote_id) => service.accept_call(remote_id).await,
                    Effect::RejectCall(remote_id) => service.reject_call(remote_id).await,
                    Effect::HangUp => service.hang_up().await,
                    Effect::ScrollToBottom | Effect::Connect => Ok(()),
                };
                result.map_err(|e| e.to_string())
            },
            move |result| AppMessage::ServiceDone(effect.clone(), result),
        )
    }

    fn build_status_bar(&self, theme: &Theme) -> Element<'_, AppMessage> {
        let model = &self.ctx.model;
        let online = model.service_state().is_online();
        let dot = container(Space::new(Length::Fixed(12.0), Length::Fixed(12.0))).style(if online {
            styles::status_online
        } else {
            styles::status_offline
        });
        let own_id = match (&self.ctx.own_id, online) {
            (Some(own_id), true) => format!("ID {own_id}"),
            _ => String::new(),
        };
        let call = if model.call_state().is_connected() {
            "In call"
        } else {
            ""
        };
        container(
            row![
                dot,
                Space::with_width(8),
                text(model.service_state().as_str()).size(13),
                Space::with_width(12),
                text(own_id)
                    .size(13)
                    .color(colors::text_secondary(theme)),
                Space::with_width(Length::Fill),
                text(call).size(13).color(colors::text_success(theme)),
            ]
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([8, 16]))
        .style(styles::header)
        .into()
    }
}
