//! Domain layer constants

/// Name of the universal marker capability
pub const SERVICE_MARKER_NAME: &str = "Service";

/// Message recorded when a production step ended without a result
///
/// Happens when the factory panicked: the slot cannot run it again.
pub const ABANDONED_PRODUCTION_MESSAGE: &str = "production step did not complete";
