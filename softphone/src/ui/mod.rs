pub mod core;
pub mod screens;
pub mod theme;

mod app;
mod listener;

pub use app::*;
pub use listener::*;
