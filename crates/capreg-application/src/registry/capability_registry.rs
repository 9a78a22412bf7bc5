//! Frozen capability index

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use capreg_domain::{Error, Result, TypeKind, TypeNode, Upcast, unerase};
use serde::Serialize;
use tracing::trace;

use super::builder::RegistryBuilder;
use super::slot::{ProviderSlot, SlotState};
use crate::ports::registry::ProviderDescriptor;

/// One indexed type and the slot serving it
#[derive(Clone)]
pub(crate) struct Registration {
    pub node: &'static TypeNode,
    pub slot: Arc<ProviderSlot>,
    pub path: Vec<Upcast>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("node", &self.node.name)
            .field("provider", &self.slot.provider())
            .field("depth", &self.path.len())
            .finish()
    }
}

/// Report line describing one indexed type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// Name of the indexed type
    pub capability: &'static str,
    /// Whether the type is a trait or the provider's concrete type
    pub kind: TypeKind,
    /// Name of the provider serving it
    pub provider: String,
    /// Materialization state of that provider
    pub state: SlotState,
}

/// Read-only map from capability type to the provider implementing it
///
/// Built once through [`CapabilityRegistry::build`] or a
/// [`RegistryBuilder`], then shared by reference. Lookups never mutate the
/// map, so the registry can be used from any number of threads.
///
/// # Example
///
/// ```ignore
/// let registry = CapabilityRegistry::build(discovered_providers())?;
/// if let Some(clock) = registry.lookup::<dyn Clock>()? {
///     println!("{}", clock.now());
/// }
/// ```
pub struct CapabilityRegistry {
    registrations: HashMap<TypeId, Registration>,
    slots: Vec<Arc<ProviderSlot>>,
}

impl CapabilityRegistry {
    /// Start a registry build
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from a full set of provider descriptors
    ///
    /// Fails on the first malformed descriptor rather than returning a
    /// partially populated registry.
    pub fn build<I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = ProviderDescriptor>,
    {
        let mut builder = RegistryBuilder::new();
        builder.register_all(descriptors)?;
        Ok(builder.build())
    }

    /// A registry with no providers
    pub fn empty() -> Self {
        Self::from_parts(HashMap::new(), Vec::new())
    }

    pub(crate) fn from_parts(
        registrations: HashMap<TypeId, Registration>,
        slots: Vec<Arc<ProviderSlot>>,
    ) -> Self {
        Self {
            registrations,
            slots,
        }
    }

    /// Look up the provider of capability `C`
    ///
    /// Returns `Ok(None)` when no provider implements `C`. Otherwise the
    /// provider is materialized on first use and the same instance is
    /// returned on every call, whichever of its capabilities is requested.
    /// The marker `dyn Service` itself is never indexed.
    pub fn lookup<C: ?Sized + 'static>(&self) -> Result<Option<Arc<C>>> {
        let Some(registration) = self.registrations.get(&TypeId::of::<C>()) else {
            trace!(capability = type_name::<C>(), "No provider registered");
            return Ok(None);
        };

        let instance = registration.slot.materialize()?;
        let view = registration
            .path
            .iter()
            .try_fold(instance, |handle, upcast| upcast(&handle));

        view.as_ref()
            .and_then(unerase::<C>)
            .map(Some)
            .ok_or_else(|| Error::type_mismatch(registration.slot.provider(), type_name::<C>()))
    }

    /// Whether any provider was indexed
    ///
    /// Distinguishes "no providers linked into the build" from "nobody
    /// provides this capability".
    pub fn has_any_registrations(&self) -> bool {
        !self.registrations.is_empty()
    }

    /// Whether a provider is indexed under `C`, without materializing it
    pub fn contains<C: ?Sized + 'static>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<C>())
    }

    /// Name of the provider indexed under `C`
    pub fn provider_of<C: ?Sized + 'static>(&self) -> Option<&str> {
        self.registrations
            .get(&TypeId::of::<C>())
            .map(|registration| registration.slot.provider())
    }

    /// Number of indexed types
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no type is indexed
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Slots of the providers still serving at least one type
    pub fn slots(&self) -> &[Arc<ProviderSlot>] {
        &self.slots
    }

    /// Every indexed type with its provider, sorted by type name
    pub fn bindings(&self) -> Vec<Binding> {
        let mut bindings: Vec<Binding> = self
            .registrations
            .values()
            .map(|registration| Binding {
                capability: registration.node.name,
                kind: registration.node.kind,
                provider: registration.slot.provider().to_string(),
                state: registration.slot.state(),
            })
            .collect();
        bindings.sort_by(|a, b| {
            a.capability
                .cmp(b.capability)
                .then_with(|| a.provider.cmp(&b.provider))
        });
        bindings
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("registrations", &self.registrations.values().collect::<Vec<_>>())
            .field("providers", &self.slots.len())
            .finish()
    }
}
