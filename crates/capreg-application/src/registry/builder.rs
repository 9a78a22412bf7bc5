//! One-time registry build
//!
//! The builder is the "building" state of the registry: it accepts provider
//! descriptors, indexes each one under every type of its hierarchy that
//! reaches the `Service` marker, and is consumed by [`RegistryBuilder::build`]
//! into the read-only [`CapabilityRegistry`].

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use capreg_domain::{Error, Result, TypeKind};
use tracing::{debug, info, warn};

use super::capability_registry::{CapabilityRegistry, Registration};
use super::hierarchy::resolve_claims;
use super::slot::ProviderSlot;
use crate::ports::registry::ProviderDescriptor;

/// Accumulates provider registrations before the registry is frozen
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registrations: HashMap<TypeId, Registration>,
    slots: Vec<Arc<ProviderSlot>>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one provider under every type it qualifies for
    ///
    /// Returns the number of types the provider was registered under; zero
    /// when its hierarchy never reaches the `Service` marker. A type already
    /// claimed by an earlier provider is taken over by this one.
    ///
    /// The factory is not invoked.
    pub fn register(&mut self, descriptor: ProviderDescriptor) -> Result<usize> {
        validate(&descriptor)?;
        let claims = resolve_claims(descriptor.name(), descriptor.implementation())?;

        if claims.is_empty() {
            warn!(
                provider = descriptor.name(),
                implementation = descriptor.implementation().name,
                "Provider does not implement any Service capability, skipping"
            );
            return Ok(0);
        }

        let slot = Arc::new(ProviderSlot::new(descriptor));
        let claimed = claims.len();
        for claim in claims {
            let registration = Registration {
                node: claim.node,
                slot: Arc::clone(&slot),
                path: claim.path,
            };
            match self.registrations.insert(claim.node.id(), registration) {
                Some(previous) => debug!(
                    capability = claim.node.name,
                    previous = previous.slot.provider(),
                    provider = slot.provider(),
                    "Capability reassigned to a later provider"
                ),
                None => debug!(
                    capability = claim.node.name,
                    provider = slot.provider(),
                    "Capability registered"
                ),
            }
        }
        self.slots.push(slot);
        Ok(claimed)
    }

    /// Register every descriptor, stopping at the first malformed one
    pub fn register_all<I>(&mut self, descriptors: I) -> Result<()>
    where
        I: IntoIterator<Item = ProviderDescriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(())
    }

    /// Freeze the registrations into a read-only registry
    ///
    /// Providers whose every type was taken over by later providers are
    /// dropped along with their unused factories.
    pub fn build(self) -> CapabilityRegistry {
        let Self {
            registrations,
            mut slots,
        } = self;
        slots.retain(|slot| {
            registrations
                .values()
                .any(|registration| Arc::ptr_eq(&registration.slot, slot))
        });

        info!(
            capabilities = registrations.len(),
            providers = slots.len(),
            "Capability registry ready"
        );
        CapabilityRegistry::from_parts(registrations, slots)
    }
}

fn validate(descriptor: &ProviderDescriptor) -> Result<()> {
    if descriptor.name().trim().is_empty() {
        return Err(Error::malformed_descriptor(
            "<unnamed>",
            format!(
                "provider of '{}' has an empty name",
                descriptor.implementation().name
            ),
        ));
    }

    let implementation = descriptor.implementation();
    if implementation.kind != TypeKind::Concrete {
        return Err(Error::malformed_descriptor(
            descriptor.name(),
            format!(
                "implementation type '{}' is a {} type, expected a concrete type",
                implementation.name, implementation.kind
            ),
        ));
    }
    Ok(())
}
