//! Application Layer - Capability Registry
//!
//! This crate implements the registry itself:
//!
//! - `ports::registry`: the provider source. Providers register a static
//!   [`ProviderEntry`] into the [`PROVIDERS`] linkme slice with
//!   [`register_provider!`], and are turned into [`ProviderDescriptor`]s once.
//! - `registry`: the one-time build walking each provider's declared type
//!   hierarchy ([`RegistryBuilder`]), the frozen [`CapabilityRegistry`], and
//!   the lazily materialized [`ProviderSlot`].
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `capreg-domain`: for the type graph, capability ports and errors
//! - `linkme`, `tracing` and `serde`

pub mod ports;
pub mod registry;

mod macros;

// Re-exports used by `register_provider!` expansions in provider crates
#[doc(hidden)]
pub use capreg_domain::implementation;
#[doc(hidden)]
pub use linkme;

pub use capreg_domain::{Erased, Error, Result, TypeNode, erase};
pub use ports::registry::{
    PROVIDERS, ProviderDescriptor, ProviderEntry, discovered_providers, find_provider,
    list_providers,
};
pub use registry::{Binding, CapabilityRegistry, ProviderSlot, RegistryBuilder, SlotState};
