//! Port definitions
//!
//! - **registry/** - Auto-registration system for capability providers

/// Provider registry for compile-time provider discovery
pub mod registry;
