//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the converter screen with ratatui and maps
//! crossterm key events onto application state changes.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
