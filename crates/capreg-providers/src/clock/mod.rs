//! Clock provider implementations

mod system;

pub use system::SystemClock;
