//! Static provider entries collected at link time

use capreg_domain::{Erased, Result, TypeNode};

use super::descriptor::ProviderDescriptor;

/// Registry entry for capability providers
///
/// Each provider registers itself with this entry using
/// [`register_provider!`](crate::register_provider). The entry carries
/// metadata, the provider's concrete type node and a factory function.
pub struct ProviderEntry {
    /// Unique provider name (e.g., "system-clock")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Concrete type node of the provider, with its implemented capabilities
    pub implementation: &'static TypeNode,
    /// Factory function producing the provider instance
    pub factory: fn() -> Result<Erased>,
}

impl std::fmt::Debug for ProviderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("name", &self.name)
            .field("implementation", &self.implementation.name)
            .finish_non_exhaustive()
    }
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static PROVIDERS: [ProviderEntry] = [..];

/// Convert every registered entry into a descriptor
///
/// Entry order follows the link order, which is unspecified.
pub fn discovered_providers() -> Vec<ProviderDescriptor> {
    PROVIDERS.iter().map(ProviderDescriptor::from).collect()
}

/// Find a registered entry by name
pub fn find_provider(name: &str) -> Option<&'static ProviderEntry> {
    PROVIDERS.iter().find(|entry| entry.name == name)
}

/// List all registered providers
///
/// Returns a list of (name, description) tuples for all registered
/// providers. Useful for CLI output.
pub fn list_providers() -> Vec<(&'static str, &'static str)> {
    PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
