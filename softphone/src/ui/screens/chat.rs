use iced::widget::{Column, Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Padding, Task, Theme};
use softphone_view::ScreenVariant;

use crate::interaction::{Button, Input};
use crate::ui::AppContext;
use crate::ui::core::{Screen, ScreenCommand};
use crate::ui::theme::{colors, styles};

use super::{HANGUP_ICON, PHONE_ICON, icon};

#[derive(Clone, Debug)]
pub enum ChatMessage {
    ComposeChanged(String),
    SendNote,
    Dial,
    Call,
    Disconnect,
    BackToList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Typed by the user.
    Note,
    /// Written by the app (call started, call ended, errors).
    Log,
}

#[derive(Clone, Debug)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
}

/// Chat page: a local transcript of notes and call log lines.
pub struct ChatScreen {
    transcript: Vec<TranscriptEntry>,
    compose_text: String,
    scroll_id: scrollable::Id,
}

impl ChatScreen {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            compose_text: String::new(),
            scroll_id: scrollable::Id::unique(),
        }
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            kind: EntryKind::Log,
            text: line.into(),
        });
    }

    pub fn scroll_to_bottom(&self) -> Task<ChatMessage> {
        scrollable::snap_to(self.scroll_id.clone(), scrollable::RelativeOffset::END)
    }

    fn build_header<'a>(&'a self, ctx: &'a AppContext, theme: &'a Theme) -> Element<'a, ChatMessage> {
        let model = &ctx.model;
        let peer = if model.remote_id().is_empty() {
            "No remote party"
        } else {
            model.remote_id()
        };
        let leading: Element<'a, ChatMessage> = match model.variant() {
            ScreenVariant::Contacts => button(text("‹ Contacts").size(14))
                .on_press(ChatMessage::BackToList)
                .padding([6, 8])
                .style(button::text)
                .into(),
            ScreenVariant::Dialer => Space::with_width(0).into(),
        };
        let trailing: Element<'a, ChatMessage> = if model.call_state().is_connected() {
            button(icon(HANGUP_ICON, theme.extended_palette().danger.base.text))
                .on_press(ChatMessage::Disconnect)
                .padding(10)
                .style(styles::button_danger)
                .into()
        } else {
            let phone = icon(PHONE_ICON, theme.extended_palette().success.base.text);
            match model.variant() {
                ScreenVariant::Dialer => button(
                    row![phone, Space::with_width(6), text("Dial").size(14)]
                        .align_y(Alignment::Center),
                )
                .on_press(ChatMessage::Dial)
                .padding([8, 14])
                .style(styles::button_success)
                .into(),
                ScreenVariant::Contacts => button(phone)
                    .on_press_maybe((!model.remote_id().is_empty()).then_some(ChatMessage::Call))
                    .padding(10)
                    .style(styles::button_success)
                    .into(),
            }
        };
        container(
            row![
                leading,
                Space::with_width(8),
                text(peer).size(18),
                Space::with_width(Length::Fill),
                trailing,
            ]
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([8, 12]))
        .into()
    }

    fn build_body(&self, theme: &Theme) -> Element<'_, ChatMessage> {
        if self.transcript.is_empty() {
            return container(
                text("Nothing here yet")
                    .size(14)
                    .color(colors::text_muted(theme)),
            )
            .center(Length::Fill)
            .into();
        }
        let entries = self.transcript.iter().map(|entry| {
            let bubble = container(text(entry.text.as_str()).size(14)).padding(Padding::from([8, 12]));
            let item: Element<'_, ChatMessage> = match entry.kind {
                EntryKind::Note => row![
                    Space::with_width(Length::Fill),
                    bubble.style(styles::note_bubble)
                ]
                .into(),
                EntryKind::Log => row![bubble.style(styles::log_bubble)].into(),
            };
            item
        });
        scrollable(
            Column::with_children(entries)
                .spacing(8)
                .padding(Padding::from([12, 16])),
        )
        .id(self.scroll_id.clone())
        .height(Length::Fill)
        .into()
    }

    fn build_footer(&self) -> Element<'_, ChatMessage> {
        let can_send = !self.compose_text.trim().is_empty();
        let input = text_input("Write a note...", &self.compose_text)
            .on_input(ChatMessage::ComposeChanged)
            .on_submit(ChatMessage::SendNote)
            .padding(10)
            .size(14)
            .width(Length::Fill);
        let send = button(text("Send").size(14))
            .on_press_maybe(can_send.then_some(ChatMessage::SendNote))
            .padding([8, 14])
            .style(if can_send {
                button::primary
            } else {
                button::secondary
            });
        container(
            row![input, Space::with_width(8), send]
                .align_y(Alignment::Center)
                .padding(12),
        )
        .width(Length::Fill)
        .style(styles::header)
        .into()
    }
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ChatScreen {
    type Message = ChatMessage;

    fn update(&mut self, message: ChatMessage, _ctx: &mut AppContext) -> ScreenCommand<ChatMessage> {
        match message {
            ChatMessage::ComposeChanged(value) => {
                self.compose_text = value;
                ScreenCommand::None
            }
            ChatMessage::SendNote => {
                let note = self.compose_text.trim().to_string();
                if note.is_empty() {
                    return ScreenCommand::None;
                }
                self.compose_text.clear();
                self.transcript.push(TranscriptEntry {
                    kind: EntryKind::Note,
                    text: note,
                });
                ScreenCommand::Message(self.scroll_to_bottom())
            }
            ChatMessage::Dial => ScreenCommand::Input(Input::Tap(Button::Dial)),
            ChatMessage::Call => ScreenCommand::Input(Input::Tap(Button::Call)),
            ChatMessage::Disconnect => ScreenCommand::Input(Input::Tap(Button::Disconnect)),
            ChatMessage::BackToList => ScreenCommand::Input(Input::Tap(Button::BackToList)),
        }
    }

    fn view<'a>(&'a self, ctx: &'a AppContext, theme: &'a Theme) -> Element<'a, ChatMessage> {
        let mut content = column![self.build_header(ctx, theme)];
        if ctx.model.call_state().is_connected() {
            let call_bar = container(
                text(format!("In call with {}", ctx.model.remote_id()))
                    .size(14)
                    .color(colors::text_success(theme)),
            )
            .width(Length::Fill)
            .padding(Padding::from([8, 12]))
            .style(styles::active_call);
            content = content.push(container(call_bar).padding(Padding::from([0, 12])));
        }
        content
            .push(self.build_body(theme))
            .push(self.build_footer())
            .height(Length::Fill)
            .into()
    }
}
