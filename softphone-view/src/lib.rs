//! View state for the softphone screens.
//!
//! The presentation layer owns one [`ViewStateModel`] per session, drives it
//! from user input and connectivity callbacks, and renders whatever
//! [`ViewState`] it reports.

mod error;
mod event;
mod id;
mod listener;
mod model;
mod state;

pub use error::*;
pub use event::*;
pub use id::*;
pub use listener::*;
pub use model::*;
pub use state::*;
