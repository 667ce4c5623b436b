use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ViewError;

/// Top-level screen currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    List,
    Chat,
    Dial,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::List, Page::Chat, Page::Dial];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Chat => "chat",
            Self::Dial => "dial",
        }
    }
}

/// Overlay dialog shown above the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modal {
    Login,
    Incoming,
}

impl Modal {
    pub const ALL: [Modal; 2] = [Modal::Login, Modal::Incoming];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Incoming => "incoming",
        }
    }

    /// Parses a modal target where `"none"` means "close".
    pub fn parse_target(s: &str) -> Result<Option<Self>, ViewError> {
        match s {
            "none" | "" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

/// Connectivity to the signaling backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Online,
    #[default]
    Offline,
}

impl ServiceState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    pub fn is_online(self) -> bool {
        self == Self::Online
    }
}

/// Whether a call session is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallState {
    Connected,
    #[default]
    Disconnected,
}

impl CallState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }

    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

/// Which of the two screen layouts is running.
///
/// The dialer has a chat page and a dial pad; the contacts layout has a
/// contact list, a chat page and a login dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenVariant {
    #[default]
    Dialer,
    Contacts,
}

impl ScreenVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dialer => "dialer",
            Self::Contacts => "contacts",
        }
    }

    pub fn pages(self) -> &'static [Page] {
        match self {
            Self::Dialer => &[Page::Chat, Page::Dial],
            Self::Contacts => &[Page::List, Page::Chat],
        }
    }

    pub fn modals(self) -> &'static [Modal] {
        match self {
            Self::Dialer => &[Modal::Incoming],
            Self::Contacts => &[Modal::Login, Modal::Incoming],
        }
    }

    pub fn initial_page(self) -> Page {
        match self {
            Self::Dialer => Page::Chat,
            Self::Contacts => Page::List,
        }
    }

    pub fn has_page(self, page: Page) -> bool {
        self.pages().contains(&page)
    }

    pub fn has_modal(self, modal: Modal) -> bool {
        self.modals().contains(&modal)
    }
}

macro_rules! impl_name_conversions {
    ($ty:ty, $kind:literal, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ViewError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$($variant),+]
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ViewError::invalid($kind, s))
            }
        }
    };
}

impl_name_conversions!(Page, "page", [Page::List, Page::Chat, Page::Dial]);
impl_name_conversions!(Modal, "modal", [Modal::Login, Modal::Incoming]);
impl_name_conversions!(
    ServiceState,
    "service state",
    [ServiceState::Online, ServiceState::Offline]
);
impl_name_conversions!(
    CallState,
    "call state",
    [CallState::Connected, CallState::Disconnected]
);
impl_name_conversions!(
    ScreenVariant,
    "screen variant",
    [ScreenVariant::Dialer, ScreenVariant::Contacts]
);

/// Snapshot of everything the presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub page: Page,
    pub modal: Option<Modal>,
    pub service: ServiceState,
    pub call: CallState,
    /// Always kept in formatted form.
    pub remote_id: String,
}

impl ViewState {
    pub fn new(variant: ScreenVariant) -> Self {
        Self {
            page: variant.initial_page(),
            modal: None,
            service: ServiceState::Offline,
            call: CallState::Disconnected,
            remote_id: String::new(),
        }
    }
}
