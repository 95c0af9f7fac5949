//! Shared settings for the shelf workspace.

pub mod settings;

pub use settings::{ApiSettings, Environment, LogFormat, Settings, TelemetrySettings};
