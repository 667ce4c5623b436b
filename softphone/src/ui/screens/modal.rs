use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use softphone_view::{Modal, format_id};

use crate::interaction::{Button, Input};
use crate::ui::AppContext;
use crate::ui::core::{Screen, ScreenCommand};
use crate::ui::theme::{colors, styles};

use super::{HANGUP_ICON, PHONE_ICON, icon};

#[derive(Clone, Debug)]
pub enum ModalMessage {
    Accept,
    Reject,
    Login,
}

/// Overlay drawn above the current page while a modal is open or still
/// running its exit transition.
#[derive(Default)]
pub struct ModalLayer;

impl ModalLayer {
    pub fn new() -> Self {
        Self
    }

    fn build_incoming<'a>(ctx: &'a AppContext, theme: &Theme, active: bool) -> Element<'a, ModalMessage> {
        let palette = theme.extended_palette();
        let accept = button(
            row![
                icon(PHONE_ICON, palette.success.base.text),
                Space::with_width(6),
                text("Accept").size(14)
            ]
            .align_y(Alignment::Center),
        )
        .on_press_maybe(active.then_some(ModalMessage::Accept))
        .padding([10, 18])
        .style(styles::button_success);
        let reject = button(
            row![
                icon(HANGUP_ICON, palette.danger.base.text),
                Space::with_width(6),
                text("Reject").size(14)
            ]
            .align_y(Alignment::Center),
        )
        .on_press_maybe(active.then_some(ModalMessage::Reject))
        .padding([10, 18])
        .style(styles::button_danger);
        column![
            text("Incoming call").size(16),
            text(ctx.model.remote_id()).size(30),
            Space::with_height(12),
            row![reject, Space::with_width(Length::Fill), accept].align_y(Alignment::Center),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into()
    }

    fn build_login<'a>(ctx: &'a AppContext, theme: &Theme, active: bool) -> Element<'a, ModalMessage> {
        column![
            text("Sign in").size(20),
            text("Your ID").size(12).color(colors::text_secondary(theme)),
            text(format_id(&ctx.config.own_id)).size(24),
            Space::with_height(12),
            button(text("Connect").size(14))
                .on_press_maybe(active.then_some(ModalMessage::Login))
                .padding([10, 18])
                .style(button::primary),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into()
    }
}

impl Screen for ModalLayer {
    type Message = ModalMessage;

    fn update(&mut self, message: ModalMessage, _ctx: &mut AppContext) -> ScreenCommand<ModalMessage> {
        let button = match message {
            ModalMessage::Accept => Button::Accept,
            ModalMessage::Reject => Button::Reject,
            ModalMessage::Login => Button::Login,
        };
        ScreenCommand::Input(Input::Tap(button))
    }

    fn view<'a>(&'a self, ctx: &'a AppContext, theme: &'a Theme) -> Element<'a, ModalMessage> {
        let Some(modal) = ctx.model.visible_modal() else {
            return Space::with_width(0).into();
        };
        // A closing modal stays on screen but no longer takes input.
        let active = ctx.model.modal() == Some(modal);
        let body = match modal {
            Modal::Incoming => Self::build_incoming(ctx, theme, active),
            Modal::Login => Self::build_login(ctx, theme, active),
        };
        let card = container(body)
            .width(Length::Fixed(320.0))
            .padding(24)
            .style(styles::card);
        container(card)
            .center(Length::Fill)
            .style(if active {
                styles::modal_overlay
            } else {
                styles::modal_overlay_closing
            })
            .into()
    }
}
