/// Register a provider into the [`PROVIDERS`](crate::PROVIDERS) slice
///
/// Declares the provider's concrete type node from the `implements` list and
/// wraps the factory so it is only invoked when the registry materializes the
/// provider.
///
/// ```ignore
/// use capreg_application::register_provider;
/// use capreg_domain::ports::{CLOCK, Clock};
///
/// register_provider! {
///     static SYSTEM_CLOCK_PROVIDER: SystemClock {
///         name: "system-clock",
///         description: "Wall clock backed by the operating system",
///         implements: [CLOCK: dyn Clock],
///         factory: || Ok(SystemClock::new()),
///     }
/// }
/// ```
///
/// A provider that reaches capabilities through a concrete base held by
/// composition lists that base under `bases`, with the upcast to it:
///
/// ```ignore
/// register_provider! {
///     static AUDITED_CLOCK_PROVIDER: AuditedClock {
///         name: "audited-clock",
///         description: "System clock with an audit trail",
///         implements: [AUDIT: dyn Audit],
///         bases: [SYSTEM_CLOCK: upcast!(AuditedClock => SystemClock, via inner)],
///         factory: AuditedClock::new,
///     }
/// }
/// ```
#[macro_export]
macro_rules! register_provider {
    (
        $(#[$meta:meta])*
        static $entry:ident: $ty:ty {
            name: $name:expr,
            description: $description:expr,
            implements: [$($node:path: $cap:ty),* $(,)?],
            $(bases: [$($base_node:path: $base_upcast:expr),* $(,)?],)?
            factory: $factory:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[$crate::linkme::distributed_slice($crate::ports::registry::PROVIDERS)]
        #[linkme(crate = $crate::linkme)]
        static $entry: $crate::ports::registry::ProviderEntry =
            $crate::ports::registry::ProviderEntry {
                name: $name,
                description: $description,
                implementation: {
                    $crate::implementation! {
                        static IMPLEMENTATION: $ty => [$($node: $cap),*]
                            $(, bases: [$($base_node: $base_upcast),*])?;
                    }
                    &IMPLEMENTATION
                },
                factory: {
                    fn produce() -> $crate::Result<$crate::Erased> {
                        let factory: fn() -> $crate::Result<$ty> = $factory;
                        factory().map(|service| $crate::erase(::std::sync::Arc::new(service)))
                    }
                    produce
                },
            };
    };
}
