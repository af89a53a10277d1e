pub mod components;
pub mod config;
pub mod content;
pub mod gui;
pub mod logging;
pub mod services;
pub mod utils;
pub mod views;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(force_ui, [Quit, CloseModal]);

// Takes a reference to the action (often unused) and mutable app context
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
