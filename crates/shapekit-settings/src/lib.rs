//! ShapeKit Settings Crate
//!
//! Handles editor configuration: canvas size, grid and render style, with
//! persistence as TOML or JSON in the platform config directory.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{CanvasSettings, Config, StyleSettings};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
