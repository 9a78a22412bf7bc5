//! Lazily materialized provider slot
//!
//! A slot owns one provider's factory and runs it at most once. `OnceLock`
//! serializes concurrent first calls; once the slot is settled every read is
//! lock-free. The factory is taken out of its mutex on first use, so nothing
//! captured by it outlives that call.

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use capreg_domain::constants::ABANDONED_PRODUCTION_MESSAGE;
use capreg_domain::{Erased, Error, Result, TypeNode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::ports::registry::{Factory, ProviderDescriptor};

/// Materialization state of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// The factory has not run yet
    Uninitialized,
    /// The instance is available
    Ready,
    /// The factory failed; the slot will not retry
    Failed,
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Ready => write!(f, "ready"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Single-assignment holder of one provider's instance
pub struct ProviderSlot {
    provider: String,
    description: String,
    implementation: &'static TypeNode,
    factory: Mutex<Option<Factory>>,
    // Failed productions keep their message so later callers see why
    instance: OnceLock<std::result::Result<Erased, String>>,
}

impl ProviderSlot {
    /// Wrap a descriptor without running its factory
    pub fn new(descriptor: ProviderDescriptor) -> Self {
        let (provider, description, implementation, factory) = descriptor.into_parts();
        Self {
            provider,
            description,
            implementation,
            factory: Mutex::new(Some(factory)),
            instance: OnceLock::new(),
        }
    }

    /// Name of the wrapped provider
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Description of the wrapped provider
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Concrete type node of the wrapped provider
    pub fn implementation(&self) -> &'static TypeNode {
        self.implementation
    }

    /// Current materialization state
    pub fn state(&self) -> SlotState {
        match self.instance.get() {
            None => SlotState::Uninitialized,
            Some(Ok(_)) => SlotState::Ready,
            Some(Err(_)) => SlotState::Failed,
        }
    }

    /// Return the provider instance, producing it on first call
    ///
    /// Concurrent first callers block until the single production step
    /// finishes and then share its outcome. The caller that ran a failing
    /// production receives the factory's error; everyone after that receives
    /// [`Error::Poisoned`].
    pub fn materialize(&self) -> Result<Erased> {
        let mut failure = None;
        let outcome = self.instance.get_or_init(|| {
            let factory = self
                .factory
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            let Some(factory) = factory else {
                return Err(ABANDONED_PRODUCTION_MESSAGE.to_string());
            };

            debug!(provider = %self.provider, "Materializing provider");
            match factory() {
                Ok(instance) => Ok(instance),
                Err(err) => {
                    warn!(provider = %self.provider, error = %err, "Provider production failed");
                    let message = err.to_string();
                    failure = Some(err);
                    Err(message)
                }
            }
        });

        if let Some(err) = failure {
            return Err(err);
        }
        match outcome {
            Ok(instance) => Ok(Arc::clone(instance)),
            Err(message) => Err(Error::poisoned(&self.provider, message.as_str())),
        }
    }
}

impl fmt::Debug for ProviderSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSlot")
            .field("provider", &self.provider)
            .field("implementation", &self.implementation.name)
            .field("state", &self.state())
            .finish()
    }
}
