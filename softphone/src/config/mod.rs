use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, anyhow};
use serde::{Deserialize, Serialize};
use softphone_view::{ScreenVariant, format_id};

use crate::DEFAULT_OWN_ID;
use crate::ui::theme::ThemePreference;

/// Absolute path of the JSON config file to use instead of the default one.
pub const CONFIG_ENV: &str = "SOFTPHONE_CONFIG";
/// Overrides the configured screen variant (`dialer` or `contacts`).
pub const VARIANT_ENV: &str = "SOFTPHONE_VARIANT";

/// Application settings, read from `config.json`.
/// Every field is optional in the file:
/// - `"variant"`: `"dialer"` or `"contacts"`
/// - `"modal_transition_ms"`: modal exit transition length
/// - `"own_id"`: identifier the demo service reports when going online
/// - `"connect_delay_ms"`: delay before the demo service goes online
/// - `"incoming_call"`: optional simulated call, `{"remote_id", "after_ms"}`
/// - `"contacts"`: entries for the contact list, `{"name", "id"}`
/// - `"theme"`: `"light"` or `"dark"`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub variant: ScreenVariant,
    pub modal_transition_ms: u64,
    pub own_id: String,
    pub connect_delay_ms: u64,
    pub incoming_call: Option<IncomingCallConfig>,
    pub contacts: Vec<ContactEntry>,
    pub theme: ThemePreference,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingCallConfig {
    pub remote_id: String,
    #[serde(default = "default_incoming_after_ms")]
    pub after_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub name: String,
    pub id: String,
}

fn default_incoming_after_ms() -> u64 {
    3000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: ScreenVariant::Dialer,
            modal_transition_ms: 210,
            own_id: DEFAULT_OWN_ID.to_string(),
            connect_delay_ms: 1000,
            incoming_call: None,
            contacts: vec![
                ContactEntry {
                    name: "Front desk".to_string(),
                    id: "100020003000".to_string(),
                },
                ContactEntry {
                    name: "Support".to_string(),
                    id: "555012340000".to_string(),
                },
            ],
            theme: ThemePreference::default(),
        }
    }
}

impl AppConfig {
    /// Load the config from `$SOFTPHONE_CONFIG` or the user config directory,
    /// then apply `$SOFTPHONE_VARIANT`. A missing file yields the defaults.
    pub fn load() -> Result<Self, anyhow::Error> {
        let mut config = match Self::config_path() {
            Some(path) => Self::from_path(&path)?,
            None => {
                tracing::warn!("Cannot determine config directory, using defaults");
                Self::default()
            }
        };
        if let Ok(variant) = std::env::var(VARIANT_ENV) {
            config.variant = variant
                .parse()
                .with_context(|| format!("Failed to parse {VARIANT_ENV}"))?;
        }
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, anyhow::Error> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if format_id(&self.own_id).is_empty() {
            return Err(anyhow!("own_id must contain at least one digit"));
        }
        if let Some(ref incoming) = self.incoming_call {
            if format_id(&incoming.remote_id).is_empty() {
                return Err(anyhow!("incoming_call.remote_id must contain digits"));
            }
        }
        if let Some(contact) = self.contacts.iter().find(|c| format_id(&c.id).is_empty()) {
            return Err(anyhow!("Contact '{}' has no digits in its id", contact.name));
        }
        Ok(())
    }

    pub fn modal_transition(&self) -> Duration {
        Duration::from_millis(self.modal_transition_ms)
    }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    fn config_path() -> Option<PathBuf> {
        // Check for custom config file from environment variable
        if let Ok(custom) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(custom);
            if path.is_absolute() {
                return Some(path);
            }
            tracing::warn!("{CONFIG_ENV} is not an absolute path, using default");
        }
        dirs::config_dir()
            .or_else(dirs::data_dir)
            .map(|dir| dir.join("softphone").join("config.json"))
    }
}
