mod demo;
mod listener;

pub use demo::*;
pub use listener::*;
