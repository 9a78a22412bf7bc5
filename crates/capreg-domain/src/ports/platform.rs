use crate::capability::{SERVICE, Service};

/// Static facts about the platform the process runs on
pub trait PlatformInfo: Service {
    /// Operating system name (e.g. "linux")
    fn os(&self) -> &str;

    /// CPU architecture (e.g. "x86_64")
    fn arch(&self) -> &str;
}

/// Platform facts plus the identity of the current host
///
/// Extends [`PlatformInfo`], so a `HostInfo` provider is also returned for
/// `PlatformInfo` lookups.
pub trait HostInfo: PlatformInfo {
    /// Host name as reported by the operating system
    fn hostname(&self) -> &str;
}

crate::interface! {
    /// Type node of [`PlatformInfo`]
    pub static PLATFORM_INFO: dyn PlatformInfo => [SERVICE: dyn Service];
}

crate::interface! {
    /// Type node of [`HostInfo`]
    pub static HOST_INFO: dyn HostInfo => [PLATFORM_INFO: dyn PlatformInfo];
}
