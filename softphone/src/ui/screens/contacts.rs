use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Padding, Theme};
use softphone_view::format_id;

use crate::config::ContactEntry;
use crate::interaction::{Button, Input};
use crate::ui::AppContext;
use crate::ui::core::{Screen, ScreenCommand};
use crate::ui::theme::colors;

#[derive(Clone, Debug)]
pub enum ContactsMessage {
    Open(String),
    ShowLogin,
}

pub struct ContactsScreen {
    contacts: Vec<ContactEntry>,
}

impl ContactsScreen {
    pub fn new(contacts: Vec<ContactEntry>) -> Self {
        Self { contacts }
    }

    fn build_contact<'a>(contact: &'a ContactEntry, theme: &Theme) -> Element<'a, ContactsMessage> {
        button(
            column![
                text(contact.name.as_str()).size(16),
                text(format_id(&contact.id))
                    .size(12)
                    .color(colors::text_secondary(theme)),
            ]
            .spacing(2),
        )
        .on_press(ContactsMessage::Open(contact.id.clone()))
        .width(Length::Fill)
        .padding(Padding::from([10, 16]))
        .style(button::text)
        .into()
    }
}

impl Screen for ContactsScreen {
    type Message = ContactsMessage;

    fn update(
        &mut self,
        message: ContactsMessage,
        _ctx: &mut AppContext,
    ) -> ScreenCommand<ContactsMessage> {
        match message {
            ContactsMessage::Open(id) => ScreenCommand::Input(Input::Tap(Button::OpenContact(id))),
            ContactsMessage::ShowLogin => ScreenCommand::Input(Input::Tap(Button::ShowLogin)),
        }
    }

    fn view<'a>(&'a self, ctx: &'a AppContext, theme: &'a Theme) -> Element<'a, ContactsMessage> {
        let sign_in: Element<'a, ContactsMessage> = if ctx.model.service_state().is_online() {
            Space::with_width(0).into()
        } else {
            button(text("Sign in").size(14))
                .on_press(ContactsMessage::ShowLogin)
                .padding([6, 12])
                .style(button::primary)
                .into()
        };
        let header = container(
            row![
                text("Contacts").size(22),
                Space::with_width(Length::Fill),
                sign_in
            ]
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([12, 16]));

        let list: Element<'a, ContactsMessage> = if self.contacts.is_empty() {
            container(
                text("No contacts configured")
                    .size(14)
                    .color(colors::text_muted(theme)),
            )
            .center(Length::Fill)
            .into()
        } else {
            scrollable(Column::with_children(
                self.contacts
                    .iter()
                    .map(|contact| Self::build_contact(contact, theme)),
            ))
            .height(Length::Fill)
            .into()
        };

        column![header, list].height(Length::Fill).into()
    }
}
