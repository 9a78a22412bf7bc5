//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the capability registry
#[derive(Error, Debug)]
pub enum Error {
    /// A provider's production step failed
    #[error("Provider '{provider}' failed to produce its service: {message}")]
    Production {
        /// Name of the provider
        provider: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A provider whose production already failed was requested again
    #[error("Provider '{provider}' is unavailable after a failed production: {message}")]
    Poisoned {
        /// Name of the provider
        provider: String,
        /// Message of the original failure
        message: String,
    },

    /// A provider descriptor cannot be classified
    #[error("Malformed provider descriptor '{provider}': {message}")]
    MalformedDescriptor {
        /// Name of the provider
        provider: String,
        /// Why the descriptor was rejected
        message: String,
    },

    /// Declared supertype edges loop back onto themselves
    #[error("Type hierarchy of provider '{provider}' contains a cycle through '{type_name}'")]
    CyclicHierarchy {
        /// Name of the provider
        provider: String,
        /// First type found twice on the walk
        type_name: String,
    },

    /// A materialized instance cannot be viewed as the requested type
    #[error("Provider '{provider}' produced a value that cannot be viewed as '{requested}'")]
    TypeMismatch {
        /// Name of the provider
        provider: String,
        /// Requested type name
        requested: String,
    },

    /// The process-wide registry was already built
    #[error("Capability registry is already initialized")]
    AlreadyInitialized,

    /// The process-wide registry could not be built
    #[error("Capability registry unavailable: {message}")]
    RegistryUnavailable {
        /// Why the build failed
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Provider error creation methods
impl Error {
    /// Create a production error
    pub fn production<P: Into<String>, S: Into<String>>(provider: P, message: S) -> Self {
        Self::Production {
            provider: provider.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a production error with source
    pub fn production_with_source<
        P: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        provider: P,
        message: S,
        source: E,
    ) -> Self {
        Self::Production {
            provider: provider.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a poisoned provider error
    pub fn poisoned<P: Into<String>, S: Into<String>>(provider: P, message: S) -> Self {
        Self::Poisoned {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<P: Into<String>, S: Into<String>>(provider: P, requested: S) -> Self {
        Self::TypeMismatch {
            provider: provider.into(),
            requested: requested.into(),
        }
    }
}

// Build error creation methods
impl Error {
    /// Create a malformed descriptor error
    pub fn malformed_descriptor<P: Into<String>, S: Into<String>>(provider: P, message: S) -> Self {
        Self::MalformedDescriptor {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a cyclic hierarchy error
    pub fn cyclic_hierarchy<P: Into<String>, S: Into<String>>(provider: P, type_name: S) -> Self {
        Self::CyclicHierarchy {
            provider: provider.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a registry unavailable error
    pub fn registry_unavailable<S: Into<String>>(message: S) -> Self {
        Self::RegistryUnavailable {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error was raised while building the registry
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedDescriptor { .. } | Self::CyclicHierarchy { .. }
        )
    }
}
