pub mod config;
pub mod interaction;
pub mod service;
pub mod ui;

/// Identifier reported by the demo service when none is configured.
pub const DEFAULT_OWN_ID: &str = "123456789012";
