//! Random (version 4) UUID generator

use capreg_application::register_provider;
use capreg_domain::Service;
use capreg_domain::ports::{ID_GENERATOR, IdGenerator};
use uuid::Uuid;

use crate::constants::UUID_V4_PROVIDER;

/// Identifier generator producing random version 4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl UuidV4Generator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }
}

impl Service for UuidV4Generator {}

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

register_provider! {
    static UUID_V4: UuidV4Generator {
        name: UUID_V4_PROVIDER,
        description: "Random version 4 UUID generator",
        implements: [ID_GENERATOR: dyn IdGenerator],
        factory: || Ok(UuidV4Generator::new()),
    }
}
