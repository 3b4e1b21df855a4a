//! Configuration
//!
//! Loads user preferences from RON files, with fallback to built-in defaults.

pub mod loader;

pub use loader::{FocusConfig, ConfigError, load_config, config_path};
