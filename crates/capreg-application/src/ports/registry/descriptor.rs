//! Provider descriptors handed to the registry build

use std::fmt;
use std::sync::Arc;

use capreg_domain::{Erased, Result, TypeNode, erase};

use super::entry::ProviderEntry;

/// Deferred production step of one provider
pub type Factory = Box<dyn FnOnce() -> Result<Erased> + Send>;

/// A provider as seen by the registry build
///
/// Pairs the provider's concrete type node with a one-shot factory. The
/// factory runs at most once, when the provider is first looked up.
pub struct ProviderDescriptor {
    name: String,
    description: String,
    implementation: &'static TypeNode,
    factory: Factory,
}

impl ProviderDescriptor {
    /// Create a descriptor from a typed factory
    pub fn new<T, F>(name: impl Into<String>, implementation: &'static TypeNode, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        Self::from_erased(name, implementation, move || {
            factory().map(|service| erase(Arc::new(service)))
        })
    }

    /// Create a descriptor from a factory that already erases its result
    ///
    /// The factory must return a handle wrapping `Arc<T>`, `T` being the type
    /// described by `implementation`.
    pub fn from_erased<F>(
        name: impl Into<String>,
        implementation: &'static TypeNode,
        factory: F,
    ) -> Self
    where
        F: FnOnce() -> Result<Erased> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            implementation,
            factory: Box::new(factory),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Provider name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Concrete type node of the provider
    pub fn implementation(&self) -> &'static TypeNode {
        self.implementation
    }

    pub(crate) fn into_parts(self) -> (String, String, &'static TypeNode, Factory) {
        (self.name, self.description, self.implementation, self.factory)
    }
}

impl From<&'static ProviderEntry> for ProviderDescriptor {
    fn from(entry: &'static ProviderEntry) -> Self {
        Self::from_erased(entry.name, entry.implementation, entry.factory)
            .with_description(entry.description)
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("implementation", &self.implementation.name)
            .finish_non_exhaustive()
    }
}
