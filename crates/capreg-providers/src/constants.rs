//! Provider names and descriptions

/// Name of the operating system clock provider
pub const SYSTEM_CLOCK_PROVIDER: &str = "system-clock";

/// Name of the random UUID generator provider
pub const UUID_V4_PROVIDER: &str = "uuid-v4";

/// Name of the local host information provider
pub const LOCAL_HOST_PROVIDER: &str = "local-host";
