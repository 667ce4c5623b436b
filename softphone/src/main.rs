#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use softphone::config::AppConfig;
use softphone::ui::PhoneApp;
use tracing_subscriber::prelude::*;

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing (optional, controlled via RUST_LOG)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "softphone=info,softphone_view=info,iced=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!(variant = %config.variant, "Starting softphone");
    iced::application(PhoneApp::title, PhoneApp::update, PhoneApp::view)
        .subscription(PhoneApp::subscription)
        .theme(PhoneApp::theme)
        .window_size(iced::Size::new(420.0, 720.0))
        .run_with(move || PhoneApp::new(config))?;
    Ok(())
}
