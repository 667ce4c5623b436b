mod chat;
mod contacts;
mod dial;
mod modal;

pub use chat::*;
pub use contacts::*;
pub use dial::*;
pub use modal::*;

use iced::widget::svg;
use iced::{Color, Length};

// SVG Icons for call controls
const PHONE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
    <path d="M20.01 15.38c-1.23 0-2.42-.2-3.53-.56a.977.977 0 0 0-1.01.24l-1.57 1.97c-2.83-1.35-5.48-3.9-6.89-6.83l1.95-1.66c.27-.28.35-.67.24-1.02-.37-1.11-.56-2.3-.56-3.53 0-.54-.45-.99-.99-.99H4.19C3.65 3 3 3.24 3 3.99 3 13.28 10.73 21 20.01 21c.71 0 .99-.63.99-1.18v-3.45c0-.54-.45-.99-.99-.99z"/>
</svg>"#;

const HANGUP_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
    <path d="M12 9c-1.6 0-3.15.25-4.6.72v3.1c0 .39-.23.74-.56.9-.98.49-1.87 1.12-2.66 1.85-.18.18-.43.28-.68.28-.3 0-.55-.13-.74-.33l-2.31-2.31a.96.96 0 0 1-.29-.7c0-.28.11-.54.29-.71C3.85 8.09 7.75 6 12 6s8.15 2.09 11.55 5.8c.18.17.29.43.29.71 0 .28-.11.54-.29.7l-2.31 2.31c-.19.2-.44.33-.74.33-.25 0-.5-.1-.68-.28a9.27 9.27 0 0 0-2.66-1.85.978.978 0 0 1-.56-.9v-3.1C15.15 9.25 13.6 9 12 9z"/>
</svg>"#;

const BACKSPACE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
    <path d="M22 3H7c-.69 0-1.23.35-1.59.88L0 12l5.41 8.11c.36.53.9.89 1.59.89h15c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm-3 12.59L17.59 17 14 13.41 10.41 17 9 15.59 12.59 12 9 8.41 10.41 7 14 10.59 17.59 7 19 8.41 15.41 12 19 15.59z"/>
</svg>"#;

fn icon(source: &'static str, color: Color) -> svg::Svg<'static> {
    svg::Svg::new(svg::Handle::from_memory(source.as_bytes()))
        .width(Length::Fixed(20.0))
        .height(Length::Fixed(20.0))
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}
