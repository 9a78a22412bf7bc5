//! Capability ports
//!
//! Capabilities served by the reference providers. Each port is a trait
//! extending [`Service`](crate::Service) plus its declared
//! [`TypeNode`](crate::TypeNode), so providers can list it in
//! `register_provider!`.

/// Wall clock access
pub mod clock;
/// Unique identifier generation
pub mod identity;
/// Platform and host introspection
pub mod platform;

pub use clock::{CLOCK, Clock};
pub use identity::{ID_GENERATOR, IdGenerator};
pub use platform::{HOST_INFO, HostInfo, PLATFORM_INFO, PlatformInfo};
