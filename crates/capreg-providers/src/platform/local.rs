//! Information about the machine the process runs on

use capreg_application::register_provider;
use capreg_domain::ports::{HOST_INFO, HostInfo, PlatformInfo};
use capreg_domain::{Error, Result, Service};
use tracing::debug;

use crate::constants::LOCAL_HOST_PROVIDER;

/// Platform and host facts of the local machine
///
/// The host name is read once, when the provider is materialized.
#[derive(Debug, Clone)]
pub struct LocalHost {
    hostname: String,
}

impl LocalHost {
    /// Read the local host name from the operating system
    pub fn detect() -> Result<Self> {
        let hostname = hostname::get()
            .map_err(|e| {
                Error::production_with_source(LOCAL_HOST_PROVIDER, "cannot read host name", e)
            })?
            .into_string()
            .map_err(|raw| {
                Error::production(
                    LOCAL_HOST_PROVIDER,
                    format!("host name is not valid UTF-8: {:?}", raw),
                )
            })?;
        debug!(hostname = %hostname, "Detected local host");
        Ok(Self::with_hostname(hostname))
    }

    /// Create with a known host name
    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }
}

impl Service for LocalHost {}

impl PlatformInfo for LocalHost {
    fn os(&self) -> &str {
        std::env::consts::OS
    }

    fn arch(&self) -> &str {
        std::env::consts::ARCH
    }
}

impl HostInfo for LocalHost {
    fn hostname(&self) -> &str {
        &self.hostname
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

register_provider! {
    static LOCAL_HOST: LocalHost {
        name: LOCAL_HOST_PROVIDER,
        description: "Operating system, architecture and host name of the local machine",
        implements: [HOST_INFO: dyn HostInfo],
        factory: LocalHost::detect,
    }
}
