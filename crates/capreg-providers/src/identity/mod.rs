//! Identifier generator implementations

mod uuid_v4;

pub use uuid_v4::UuidV4Generator;
