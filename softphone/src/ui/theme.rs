//! Theme management for the softphone UI
//!
//! Light and dark palettes plus the handful of container and button styles
//! shared by the pages and overlays.

use iced::widget::{button, container};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Theme preference that can be stored in config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn to_iced_theme(self) -> Theme {
        match self {
            Self::Light => Theme::CatppuccinLatte,
            Self::Dark => Theme::CatppuccinMocha,
        }
    }
}

/// Custom styles for various UI components
pub mod styles {
    use super::*;

    /// Style for the status header above every page
    pub fn header(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            ..Default::default()
        }
    }

    /// Style for card containers (modals, dial display)
    pub fn card(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            border: iced::Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }

    /// Backdrop behind an open modal
    pub fn modal_overlay(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        let mut base_color = palette.background.base.color;
        base_color.a = 0.85;
        container::Style {
            background: Some(iced::Background::Color(base_color)),
            ..Default::default()
        }
    }

    /// Backdrop while a modal runs its exit transition
    pub fn modal_overlay_closing(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        let mut base_color = palette.background.base.color;
        base_color.a = 0.35;
        container::Style {
            background: Some(iced::Background::Color(base_color)),
            text_color: Some(colors::text_muted(theme)),
            ..Default::default()
        }
    }

    /// Service status dot (online)
    pub fn status_online(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.success.strong.color)),
            border: iced::Border {
                color: palette.success.base.color,
                width: 2.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }

    /// Service status dot (offline)
    pub fn status_offline(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(Color::TRANSPARENT)),
            border: iced::Border {
                color: palette.background.strong.color,
                width: 2.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }

    /// Call bar on the chat page while connected
    pub fn active_call(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.success.weak.color)),
            border: iced::Border {
                color: palette.success.strong.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }

    /// Note typed by the user
    pub fn note_bubble(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.primary.base.color)),
            border: iced::Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            text_color: Some(palette.primary.base.text),
            ..Default::default()
        }
    }

    /// Call log line
    pub fn log_bubble(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.strong.color)),
            border: iced::Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Style for hang up and reject buttons
    pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let pair = match status {
            button::Status::Active | button::Status::Pressed => palette.danger.base,
            button::Status::Hovered => palette.danger.strong,
            button::Status::Disabled => palette.background.strong,
        };
        button::Style {
            background: Some(iced::Background::Color(pair.color)),
            text_color: pair.text,
            border: iced::Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Style for call and accept buttons
    pub fn button_success(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let pair = match status {
            button::Status::Active | button::Status::Pressed => palette.success.base,
            button::Status::Hovered => palette.success.strong,
            button::Status::Disabled => palette.background.strong,
        };
        button::Style {
            background: Some(iced::Background::Color(pair.color)),
            text_color: pair.text,
            border: iced::Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub mod colors {
    use super::*;

    pub fn text_secondary(theme: &Theme) -> Color {
        let palette = theme.extended_palette();
        let mut color = palette.background.base.text;
        color.a = 0.7;
        color
    }

    pub fn text_muted(theme: &Theme) -> Color {
        let palette = theme.extended_palette();
        let mut color = palette.background.base.text;
        color.a = 0.5;
        color
    }

    pub fn text_success(theme: &Theme) -> Color {
        theme.extended_palette().success.strong.color
    }

    pub fn background_base(theme: &Theme) -> Color {
        theme.extended_palette().background.base.color
    }
}
