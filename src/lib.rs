pub mod cli;
pub mod commands;
pub mod error;
pub mod loader;
pub mod models;
pub mod telemetry;
pub mod validation;

pub use error::{Result, SchemeGuardError};
