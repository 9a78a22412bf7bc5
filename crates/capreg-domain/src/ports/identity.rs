use uuid::Uuid;

use crate::capability::{SERVICE, Service};

/// Generator of unique identifiers
pub trait IdGenerator: Service {
    /// Produce a new identifier, distinct from every previous one
    fn next_id(&self) -> Uuid;
}

crate::interface! {
    /// Type node of [`IdGenerator`]
    pub static ID_GENERATOR: dyn IdGenerator => [SERVICE: dyn Service];
}
