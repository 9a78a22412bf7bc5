//! # Capability Registry - Domain Layer
//!
//! Core types shared by every other crate of the workspace:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`capability`] | The `Service` marker, the static type graph and type-erased handles |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`ports`] | Capability traits implemented by the reference providers |
//! | [`constants`] | Shared constants |
//!
//! Capabilities are plain traits extending [`Service`]. Their position in the
//! hierarchy is declared once with [`interface!`], and concrete providers
//! describe the capabilities they implement with [`implementation!`]:
//!
//! ```
//! use capreg_domain::{Service, SERVICE, implementation, interface};
//!
//! pub trait Greeter: Service {
//!     fn greet(&self) -> String;
//! }
//!
//! interface! {
//!     pub static GREETER: dyn Greeter => [SERVICE: dyn Service];
//! }
//!
//! struct English;
//! impl Service for English {}
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! implementation! {
//!     static ENGLISH: English => [GREETER: dyn Greeter];
//! }
//!
//! assert_eq!(ENGLISH.supertypes.len(), 1);
//! ```

pub mod capability;
pub mod constants;
pub mod error;
pub mod ports;

mod macros;

pub use capability::{Erased, SERVICE, Service, Supertype, TypeKind, TypeNode, Upcast, erase, unerase};
pub use error::{Error, Result};
