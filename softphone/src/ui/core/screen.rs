use iced::{Element, Task, Theme};
use std::fmt::Debug;

use crate::interaction::Input;
use crate::ui::AppContext;

/// Command returned from screen update methods
pub enum ScreenCommand<M> {
    /// No action needed
    None,
    /// Execute a command with screen's message type
    Message(Task<M>),
    /// Hand an input to the view model
    Input(Input),
}

/// Base trait for the pages and overlays of the phone window
pub trait Screen {
    /// Message type for this screen
    type Message: Debug + Clone + Send + 'static;

    /// Process a screen message and return a command
    fn update(
        &mut self,
        message: Self::Message,
        ctx: &mut AppContext,
    ) -> ScreenCommand<Self::Message>;

    /// Create the view for this screen
    fn view<'a>(&'a self, ctx: &'a AppContext, theme: &'a Theme) -> Element<'a, Self::Message>;
}
