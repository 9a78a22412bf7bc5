//! Registry bootstrap
//!
//! Turns the linked provider set into a [`CapabilityRegistry`]. Embedders
//! that own their registry call [`build_registry`]; the process-wide
//! instance behind [`services`] is built once, either explicitly through
//! [`init_services`] at startup or lazily with the loaded configuration on
//! first use.

use std::sync::OnceLock;

use capreg_application::{CapabilityRegistry, ProviderDescriptor, discovered_providers};
use capreg_domain::error::{Error, Result};
use tracing::{info, warn};

use crate::config::{AppConfig, ConfigLoader};

/// Registry, or the message of its failed build
type Stored = std::result::Result<CapabilityRegistry, String>;

/// Process-wide registry
static SERVICES: OnceLock<Stored> = OnceLock::new();

/// Discovered providers minus the ones disabled in configuration
pub fn discover(config: &AppConfig) -> Vec<ProviderDescriptor> {
    let discovered = discovered_providers();

    for name in &config.registry.disabled_providers {
        if !discovered.iter().any(|descriptor| descriptor.name() == name) {
            warn!(provider = %name, "Disabled provider is not linked into this build");
        }
    }

    discovered
        .into_iter()
        .filter(|descriptor| !config.registry.is_disabled(descriptor.name()))
        .collect()
}

/// Build a registry from the discovered providers
pub fn build_registry(config: &AppConfig) -> Result<CapabilityRegistry> {
    let descriptors = discover(config);
    info!(providers = descriptors.len(), "Building capability registry");
    CapabilityRegistry::build(descriptors)
}

/// Build the process-wide registry
///
/// Must run at most once, before the first call to [`services`]. A build
/// failure is returned here and reported by every later [`services`] call.
/// Fails with [`Error::AlreadyInitialized`] when the registry was already
/// built, by an earlier call or by [`services`].
pub fn init_services(config: &AppConfig) -> Result<&'static CapabilityRegistry> {
    initialize(&SERVICES, || build_registry(config))
}

/// The process-wide registry
///
/// Built from the loaded configuration on first use unless [`init_services`]
/// ran before.
pub fn services() -> Result<&'static CapabilityRegistry> {
    let stored = SERVICES.get_or_init(|| {
        ConfigLoader::new()
            .load()
            .and_then(|config| build_registry(&config))
            .map_err(|err| err.to_string())
    });
    stored_registry(stored)
}

/// Run `build` into `cell` unless the cell is already settled
///
/// The check and the build happen under the cell's one-time guard, so a
/// racing lazy build can never slip in between.
fn initialize<'a, F>(cell: &'a OnceLock<Stored>, build: F) -> Result<&'a CapabilityRegistry>
where
    F: FnOnce() -> Result<CapabilityRegistry>,
{
    let mut ran = false;
    let mut failure = None;
    let stored = cell.get_or_init(|| {
        ran = true;
        build().map_err(|err| {
            let message = err.to_string();
            failure = Some(err);
            message
        })
    });

    if let Some(err) = failure {
        return Err(err);
    }
    if !ran {
        return Err(Error::AlreadyInitialized);
    }
    stored_registry(stored)
}

fn stored_registry(stored: &Stored) -> Result<&CapabilityRegistry> {
    stored
        .as_ref()
        .map_err(|message| Error::registry_unavailable(message.clone()))
}
