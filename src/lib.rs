pub mod cli;
pub mod commands;
pub mod converters;
pub mod error;
pub mod loader;
pub mod models;
pub mod telemetry;

pub use error::{ConvertError, Result};
