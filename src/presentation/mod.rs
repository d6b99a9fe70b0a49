//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! handles keyboard input, and renders the flashcard display. The UI
//! is a pure projection of the application state; all mutation goes
//! through the input handler.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
