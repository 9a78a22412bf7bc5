//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for capability providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that are discovered once and indexed by the capability registry.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  register_provider! { static ENTRY: .. }  │
//! │                        (a #[distributed_slice(PROVIDERS)] item) │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Discovery:         discovered_providers()                   │
//! │                              ↓                                  │
//! │  4. Build:             CapabilityRegistry::build(descriptors)   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Crates holding providers must be linked into the final binary (for
//! instance with `extern crate capreg_providers;`) for their entries to show
//! up in the slice.

pub mod descriptor;
pub mod entry;

pub use descriptor::{Factory, ProviderDescriptor};
pub use entry::{PROVIDERS, ProviderEntry, discovered_providers, find_provider, list_providers};
