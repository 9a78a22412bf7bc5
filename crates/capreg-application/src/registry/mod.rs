//! Capability registry
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`slot`] | Lazily materialized holder of one provider |
//! | [`builder`] | One-time build indexing providers by capability |
//! | [`capability_registry`] | Frozen capability index serving lookups |

pub mod builder;
pub mod capability_registry;
pub mod slot;

mod hierarchy;

pub use builder::RegistryBuilder;
pub use capability_registry::{Binding, CapabilityRegistry};
pub use slot::{ProviderSlot, SlotState};
