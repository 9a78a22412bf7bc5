//! Platform information implementations

mod local;

pub use local::LocalHost;
