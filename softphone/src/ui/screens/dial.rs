use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::interaction::{Button, Input};
use crate::ui::AppContext;
use crate::ui::core::{Screen, ScreenCommand};
use crate::ui::theme::{colors, styles};

use super::{BACKSPACE_ICON, PHONE_ICON, icon};

const KEY_ROWS: [[char; 3]; 3] = [['1', '2', '3'], ['4', '5', '6'], ['7', '8', '9']];

#[derive(Clone, Debug)]
pub enum DialMessage {
    Key(char),
    Backspace,
    Clear,
    Call,
    Back,
    RemoteIdChanged(String),
}

/// Dial pad page. All of its state lives in the view model.
#[derive(Default)]
pub struct DialScreen;

impl DialScreen {
    pub fn new() -> Self {
        Self
    }

    fn key<'a>(label: String, message: DialMessage) -> Element<'a, DialMessage> {
        button(container(text(label).size(24)).center_x(Length::Fill))
            .on_press(message)
            .width(Length::Fill)
            .height(Length::Fixed(64.0))
            .padding(Padding::from([14, 0]))
            .style(button::secondary)
            .into()
    }
}

impl Screen for DialScreen {
    type Message = DialMessage;

    fn update(&mut self, message: DialMessage, _ctx: &mut AppContext) -> ScreenCommand<DialMessage> {
        let input = match message {
            DialMessage::Key(key) => Input::Tap(Button::Digit(key)),
            DialMessage::Backspace => Input::Tap(Button::Backspace),
            DialMessage::Clear => Input::Tap(Button::Clear),
            DialMessage::Call => Input::Tap(Button::Call),
            DialMessage::Back => Input::Tap(Button::Back),
            DialMessage::RemoteIdChanged(raw) => Input::EditRemoteId(raw),
        };
        ScreenCommand::Input(input)
    }

    fn view<'a>(&'a self, ctx: &'a AppContext, theme: &'a Theme) -> Element<'a, DialMessage> {
        let remote_id = ctx.model.remote_id();
        let display = container(
            text_input("0000 0000 0000", remote_id)
                .on_input(DialMessage::RemoteIdChanged)
                .on_submit(DialMessage::Call)
                .size(28)
                .padding(12),
        )
        .padding(8)
        .width(Length::Fill)
        .style(styles::card);

        let mut keypad = column![].spacing(8);
        for keys in KEY_ROWS {
            let mut keys_row = row![].spacing(8);
            for key in keys {
                keys_row = keys_row.push(Self::key(key.to_string(), DialMessage::Key(key)));
            }
            keypad = keypad.push(keys_row);
        }
        let backspace = button(
            container(icon(BACKSPACE_ICON, colors::text_secondary(theme))).center_x(Length::Fill),
        )
        .on_press(DialMessage::Backspace)
        .width(Length::Fill)
        .height(Length::Fixed(64.0))
        .padding(Padding::from([22, 0]))
        .style(button::secondary);
        keypad = keypad.push(
            row![
                Self::key("C".to_string(), DialMessage::Clear),
                Self::key("0".to_string(), DialMessage::Key('0')),
                backspace,
            ]
            .spacing(8),
        );

        let call_icon = icon(PHONE_ICON, theme.extended_palette().success.base.text);
        let call_button = button(
            row![call_icon, Space::with_width(8), text("Call").size(16)].align_y(Alignment::Center),
        )
        .on_press_maybe((!remote_id.is_empty()).then_some(DialMessage::Call))
        .padding([12, 28])
        .style(styles::button_success);
        let actions = row![
            button(text("Back").size(14))
                .on_press(DialMessage::Back)
                .padding([12, 16])
                .style(button::text),
            Space::with_width(Length::Fill),
            call_button,
        ]
        .align_y(Alignment::Center);

        container(column![display, keypad, Space::with_height(Length::Fill), actions].spacing(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }
}
