//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the capability registry.
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration through figment |
//! | [`bootstrap`] | Provider discovery and the one-time registry build |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

// Force-link capreg-providers so their linkme registrations are included
extern crate capreg_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{build_registry, discover, init_services, services};
pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
pub use error_ext::ErrorContext;
