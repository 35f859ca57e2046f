//! Configuration module for instasaver.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, FfmpegConfig, InstagramConfig, OptionsConfig};
pub use validation::validate_config;
