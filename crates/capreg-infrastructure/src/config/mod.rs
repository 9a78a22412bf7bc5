//! Configuration management
//!
//! Configuration is layered with figment: built-in defaults, then a TOML
//! file, then `CAPREG__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RegistryConfig};
