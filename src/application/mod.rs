//! Application layer managing the converter session and UI state.
//!
//! This module sits between the domain layer and the presentation layer:
//! it owns the converter state, keeps its output current, and tracks
//! focus and dropdown state for the terminal front end.

pub mod state;
pub mod app;

pub use state::*;
pub use app::*;
