//! Configuration loading and management for the Severance Engine.
//!
//! This module provides functionality to load the engine configuration from
//! a YAML file: the active proration policy, the formula settings, the
//! supported date bounds, the default display locale, and the input
//! defaults offered to the UI.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/severance.yaml").unwrap();
//! println!("Active policy: {}", config.policy().as_str());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BoundsConfig, DisplayConfig, EngineConfig, EngineSection, InputDefaults};
