//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The condition recorder and its last-recorded-forecast state
//! - The forecast value object and summary formatting
//! - Configuration and logging setup
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod logging;
pub mod model;
pub mod recorder;

pub use config::{Config, OutputFormat, UnknownOutputFormat};
pub use logging::{FilterSelection, Verbosity, build_filter, init_logging};
pub use model::{CONDITION_SEPARATOR, Forecast, format_forecast};
pub use recorder::{ConditionRecorder, SharedRecorder};
