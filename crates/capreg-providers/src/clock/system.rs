//! Operating system clock

use capreg_application::register_provider;
use capreg_domain::Service;
use capreg_domain::ports::{CLOCK, Clock};
use chrono::{DateTime, Utc};

use crate::constants::SYSTEM_CLOCK_PROVIDER;

/// Clock reading the operating system's wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Service for SystemClock {}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

register_provider! {
    static SYSTEM_CLOCK: SystemClock {
        name: SYSTEM_CLOCK_PROVIDER,
        description: "Wall clock backed by the operating system",
        implements: [CLOCK: dyn Clock],
        factory: || Ok(SystemClock::new()),
    }
}
