//! Unit Converter Library
//!
//! A fixed four-unit length converter (centimeters, meters, feet,
//! millimeters) with a terminal front end built on ratatui.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
