//! Infrastructure layer for system-level concerns.
//!
//! Currently this is only the log filter the binary installs.

pub mod logging;

pub use logging::*;
