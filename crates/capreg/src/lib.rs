//! # Capability Registry
//!
//! Discovers the providers linked into the process, indexes each one under
//! every capability trait it implements, and hands out lazily created,
//! shared instances by capability.
//!
//! ## Example
//!
//! ```ignore
//! use capreg::domain::ports::Clock;
//!
//! if let Some(clock) = capreg::load::<dyn Clock>()? {
//!     println!("{}", clock.now());
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Type graph, capability ports and errors
//! - `application` - Provider registration and the registry itself
//! - `infrastructure` - Configuration, logging and the process-wide registry
//! - `providers` - Reference provider implementations

// Force-link capreg-providers so their linkme registrations are included
extern crate capreg_providers;

use std::sync::Arc;

use tracing::warn;

pub mod cli;

/// Domain layer - type graph, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use capreg_domain::*;
}

/// Application layer - provider registration and registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use capreg_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use capreg_infrastructure::*;
}

/// Reference providers
pub mod providers {
    pub use capreg_providers::*;
}

pub use capreg_application::{CapabilityRegistry, register_provider};
pub use capreg_domain::{Error, Result, Service, implementation, interface, upcast};

/// Load the provider of capability `C` from the process-wide registry
///
/// Returns `Ok(None)` when no linked provider implements `C`. The provider
/// is created on first use and shared afterwards.
pub fn load<C: ?Sized + 'static>() -> Result<Option<Arc<C>>> {
    capreg_infrastructure::services()?.lookup::<C>()
}

/// Whether the process-wide registry holds any provider at all
///
/// False as well when the registry could not be built.
pub fn are_any_services_available() -> bool {
    match capreg_infrastructure::services() {
        Ok(registry) => registry.has_any_registrations(),
        Err(err) => {
            warn!(error = %err, "Capability registry unavailable");
            false
        }
    }
}
