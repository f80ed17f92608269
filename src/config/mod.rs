//! Configuration module.
//!
//! Loads dataset layout options and the dataset description from TOML files.

pub mod loader;

pub use loader::{Config, OptionsConfig};
