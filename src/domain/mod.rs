//! Domain layer: the unit table and conversion arithmetic.

pub mod models;
pub mod services;
pub mod errors;

pub use models::*;
pub use services::*;
pub use errors::*;
