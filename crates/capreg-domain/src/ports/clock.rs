use chrono::{DateTime, Utc};

use crate::capability::{SERVICE, Service};

/// Source of the current time
pub trait Clock: Service {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

crate::interface! {
    /// Type node of [`Clock`]
    pub static CLOCK: dyn Clock => [SERVICE: dyn Service];
}
