//! Declaration macros for the capability type graph

/// Build an [`Upcast`](crate::Upcast) from `Arc<From>` to `Arc<To>`
///
/// `From` must coerce to `To`: a concrete type to a trait it implements, or a
/// trait object to one of its supertraits.
///
/// The `via` form reaches a concrete base held by composition: `field` must
/// be an `Arc<To>` field of `From`. The resulting handle points at the base
/// instance, not at `From`.
#[macro_export]
macro_rules! upcast {
    ($from:ty => $to:ty) => {
        |erased: &$crate::Erased| -> ::core::option::Option<$crate::Erased> {
            erased
                .downcast_ref::<::std::sync::Arc<$from>>()
                .map(|value| $crate::erase(::std::sync::Arc::clone(value) as ::std::sync::Arc<$to>))
        }
    };
    ($from:ty => $to:ty, via $field:ident) => {
        |erased: &$crate::Erased| -> ::core::option::Option<$crate::Erased> {
            erased
                .downcast_ref::<::std::sync::Arc<$from>>()
                .map(|value| $crate::erase::<$to>(::std::sync::Arc::clone(&value.$field)))
        }
    };
}

/// Declare the [`TypeNode`](crate::TypeNode) of a trait
///
/// ```
/// use capreg_domain::{Service, SERVICE, interface};
///
/// pub trait Storage: Service {}
/// pub trait BlobStorage: Storage {}
///
/// interface! {
///     pub static STORAGE: dyn Storage => [SERVICE: dyn Service];
/// }
/// interface! {
///     pub static BLOB_STORAGE: dyn BlobStorage => [STORAGE: dyn Storage];
/// }
///
/// assert_eq!(BLOB_STORAGE.supertypes[0].node.name, "Storage");
/// ```
///
/// A trait whose declared ancestry never reaches `SERVICE` can still be
/// declared; the registry simply never indexes providers under it.
#[macro_export]
macro_rules! interface {
    (
        $(#[$meta:meta])*
        $vis:vis static $node:ident: dyn $iface:path $(=> [$($super_node:path: dyn $super:path),* $(,)?])?;
    ) => {
        $(#[$meta])*
        $vis static $node: $crate::TypeNode = $crate::TypeNode {
            name: ::core::stringify!($iface),
            kind: $crate::TypeKind::Interface,
            type_id: ::std::any::TypeId::of::<dyn $iface>,
            supertypes: &[$($(
                $crate::Supertype {
                    node: &$super_node,
                    upcast: $crate::upcast!(dyn $iface => dyn $super),
                }
            ),*)?],
        };
    };
}

/// Declare the [`TypeNode`](crate::TypeNode) of a concrete provider type
///
/// The bracketed supertypes are the traits the type implements directly. A
/// concrete base type reached through composition has no coercion, so it is
/// listed under `bases` together with its [`Upcast`](crate::Upcast), usually
/// built with `upcast!(Type => Base, via field)`.
///
/// ```
/// use std::sync::Arc;
/// use capreg_domain::{Service, SERVICE, implementation, interface, upcast};
///
/// pub trait Engine: Service {}
/// interface! { pub static ENGINE: dyn Engine => [SERVICE: dyn Service]; }
///
/// struct Diesel;
/// impl Service for Diesel {}
/// impl Engine for Diesel {}
/// implementation! { static DIESEL: Diesel => [ENGINE: dyn Engine]; }
///
/// struct Truck {
///     engine: Arc<Diesel>,
/// }
/// implementation! {
///     static TRUCK: Truck => [], bases: [DIESEL: upcast!(Truck => Diesel, via engine)];
/// }
///
/// assert_eq!(TRUCK.supertypes[0].node.name, "Diesel");
/// ```
#[macro_export]
macro_rules! implementation {
    (
        $(#[$meta:meta])*
        $vis:vis static $node:ident: $ty:ty => [$($super_node:path: $super:ty),* $(,)?]
        $(, bases: [$($base_node:path: $base_upcast:expr),* $(,)?])?;
    ) => {
        $(#[$meta])*
        $vis static $node: $crate::TypeNode = $crate::TypeNode {
            name: ::core::stringify!($ty),
            kind: $crate::TypeKind::Concrete,
            type_id: ::std::any::TypeId::of::<$ty>,
            supertypes: &[
                $(
                    $crate::Supertype {
                        node: &$super_node,
                        upcast: $crate::upcast!($ty => $super),
                    },
                )*
                $($(
                    $crate::Supertype {
                        node: &$base_node,
                        upcast: $base_upcast,
                    },
                )*)?
            ],
        };
    };
}
