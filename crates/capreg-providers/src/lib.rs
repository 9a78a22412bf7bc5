//! # Capability Registry - Provider Implementations
//!
//! Reference providers for the capability ports declared in
//! `capreg_domain::ports`. Every provider registers itself into the
//! `capreg_application::PROVIDERS` slice, so linking this crate is enough to
//! make them discoverable.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Clock | `Clock` | SystemClock |
//! | Identity | `IdGenerator` | UuidV4Generator |
//! | Platform | `HostInfo`, `PlatformInfo` | LocalHost |
//!
//! ## Feature Flags
//!
//! Each provider can be enabled/disabled via feature flags for minimal builds:
//!
//! ```toml
//! [dependencies]
//! capreg-providers = { version = "0.1", default-features = false, features = ["clock-system"] }
//! ```

// Re-export capreg-domain types commonly used with providers
pub use capreg_domain::error::{Error, Result};
pub use capreg_domain::ports::{Clock, HostInfo, IdGenerator, PlatformInfo};

/// Provider-specific constants
pub mod constants;

/// Clock provider implementations
#[cfg(feature = "clock-system")]
pub mod clock;

/// Identifier generator implementations
#[cfg(feature = "identity-uuid")]
pub mod identity;

/// Platform information implementations
#[cfg(feature = "platform-local")]
pub mod platform;
