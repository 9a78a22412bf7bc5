//! Capability type graph
//!
//! Rust has no runtime view of which traits a type implements, so the
//! hierarchy the registry walks is declared statically. Every participating
//! type (the [`Service`] marker, capability traits, plain interfaces and
//! concrete providers) is described by one [`TypeNode`]. Each node lists its
//! direct supertypes as [`Supertype`] edges, and every edge carries an
//! [`Upcast`] that converts a handle of the node's type into a handle of the
//! supertype.
//!
//! ## Handles
//!
//! Service instances travel through the registry as [`Erased`] values. An
//! erased handle always wraps an `Arc<X>` where `X` is the type of the node the
//! handle belongs to: `Arc<T>` for a concrete provider `T`, `Arc<dyn C>` for a
//! capability `C`. All handles derived from one instance point at the same
//! allocation.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Universal marker capability
///
/// Every capability trait extends `Service`, directly or through other
/// capabilities. A type only becomes reachable through the registry if its
/// declared ancestry ends here.
pub trait Service: Any + Send + Sync {}

/// Type-erased handle to a service instance
pub type Erased = Arc<dyn Any + Send + Sync>;

/// Converts a handle of one node's type into a handle of one of its supertypes
///
/// Returns `None` when the handle does not hold the expected source type.
pub type Upcast = fn(&Erased) -> Option<Erased>;

/// Wrap a shared value into an erased handle
pub fn erase<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Erased {
    Arc::new(value)
}

/// Recover a typed `Arc` from an erased handle
///
/// Only succeeds when the handle was produced for exactly `T`.
pub fn unerase<T: ?Sized + 'static>(erased: &Erased) -> Option<Arc<T>> {
    erased.downcast_ref::<Arc<T>>().cloned()
}

/// Role of a type in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// The universal [`Service`] marker
    Marker,
    /// A trait (capability or unrelated interface)
    Interface,
    /// A concrete implementation type
    Concrete,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Marker => "marker",
            Self::Interface => "interface",
            Self::Concrete => "concrete",
        })
    }
}

/// Static description of one type and its direct supertypes
///
/// Usually declared through [`interface!`](crate::interface) or
/// [`implementation!`](crate::implementation) rather than by hand.
pub struct TypeNode {
    /// Human readable type name
    pub name: &'static str,
    /// Role of the type
    pub kind: TypeKind,
    /// `TypeId` of the described type (`dyn Trait` for interfaces)
    pub type_id: fn() -> TypeId,
    /// Direct supertypes, in declaration order
    pub supertypes: &'static [Supertype],
}

impl TypeNode {
    /// `TypeId` of the described type
    pub fn id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Whether this node describes the universal [`Service`] marker
    pub fn is_marker(&self) -> bool {
        self.id() == TypeId::of::<dyn Service>()
    }
}

impl fmt::Debug for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeNode")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field(
                "supertypes",
                &self
                    .supertypes
                    .iter()
                    .map(|s| s.node.name)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Edge from a type to one of its direct supertypes
#[derive(Clone, Copy)]
pub struct Supertype {
    /// The supertype
    pub node: &'static TypeNode,
    /// Conversion from the subtype's handle to the supertype's handle
    pub upcast: Upcast,
}

impl fmt::Debug for Supertype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Supertype").field(&self.node.name).finish()
    }
}

/// Node of the universal [`Service`] marker
pub static SERVICE: TypeNode = TypeNode {
    name: crate::constants::SERVICE_MARKER_NAME,
    kind: TypeKind::Marker,
    type_id: TypeId::of::<dyn Service>,
    supertypes: &[],
};
