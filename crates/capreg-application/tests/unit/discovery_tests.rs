//! Tests for link-time provider discovery
//!
//! Uses `extern crate capreg_providers` to force linkme registration of the
//! reference providers, and registers two more providers from this test crate.

// Force linkme registration of all providers from capreg-providers
extern crate capreg_providers;

use std::sync::Arc;

use capreg_application::{
    CapabilityRegistry, discovered_providers, find_provider, list_providers, register_provider,
};
use capreg_domain::ports::{Clock, HostInfo, IdGenerator, PlatformInfo};
use capreg_domain::{SERVICE, Service, implementation, interface, upcast};

pub trait Beacon: Service {
    fn signal(&self) -> u8;
}

interface! { pub static BEACON: dyn Beacon => [SERVICE: dyn Service]; }

pub struct TestBeacon;

impl Service for TestBeacon {}

impl Beacon for TestBeacon {
    fn signal(&self) -> u8 {
        7
    }
}

register_provider! {
    static TEST_BEACON_PROVIDER: TestBeacon {
        name: "test-beacon",
        description: "Beacon registered from the discovery tests",
        implements: [BEACON: dyn Beacon],
        factory: || Ok(TestBeacon),
    }
}

pub trait Optic: Service {
    fn focus(&self) -> u8;
}

interface! { pub static OPTIC: dyn Optic => [SERVICE: dyn Service]; }

pub struct Lens;

impl Service for Lens {}

impl Optic for Lens {
    fn focus(&self) -> u8 {
        3
    }
}

implementation! { pub static LENS: Lens => [OPTIC: dyn Optic]; }

pub struct Lighthouse {
    lens: Arc<Lens>,
}

register_provider! {
    static LIGHTHOUSE_PROVIDER: Lighthouse {
        name: "lighthouse",
        description: "Provider reaching its capability through a composed base",
        implements: [],
        bases: [LENS: upcast!(Lighthouse => Lens, via lens)],
        factory: || Ok(Lighthouse { lens: Arc::new(Lens) }),
    }
}

#[test]
fn test_list_providers_includes_reference_providers() {
    let providers = list_providers();

    for expected in ["system-clock", "uuid-v4", "local-host", "test-beacon"] {
        assert!(
            providers.iter().any(|(name, _)| *name == expected),
            "Provider '{}' should be registered. Available: {:?}",
            expected,
            providers
        );
    }
}

#[test]
fn test_list_providers_has_descriptions() {
    for (name, description) in list_providers() {
        assert!(!name.is_empty(), "Provider name should not be empty");
        assert!(
            !description.is_empty(),
            "Provider '{}' should have a description",
            name
        );
    }
}

#[test]
fn test_find_provider_by_name() {
    let entry = find_provider("test-beacon").expect("test-beacon should be registered");
    assert_eq!(entry.implementation.name, "TestBeacon");
    assert!(find_provider("nonexistent_provider_xyz").is_none());
}

#[test]
fn test_discovered_providers_build_a_registry() {
    let registry = CapabilityRegistry::build(discovered_providers()).expect("build");

    assert!(registry.has_any_registrations());
    assert!(registry.contains::<dyn Clock>());
    assert!(registry.contains::<dyn IdGenerator>());
    assert!(registry.contains::<dyn HostInfo>());
    assert!(registry.contains::<dyn PlatformInfo>());

    let beacon = registry.lookup::<dyn Beacon>().unwrap().unwrap();
    assert_eq!(beacon.signal(), 7);
}

#[test]
fn test_registered_base_serves_its_capabilities() {
    let entry = find_provider("lighthouse").expect("lighthouse should be registered");
    assert_eq!(entry.implementation.supertypes.len(), 1);
    assert_eq!(entry.implementation.supertypes[0].node.name, "Lens");

    let registry = CapabilityRegistry::build(discovered_providers()).expect("build");
    assert_eq!(registry.provider_of::<dyn Optic>(), Some("lighthouse"));
    assert_eq!(registry.provider_of::<Lens>(), Some("lighthouse"));

    let optic = registry.lookup::<dyn Optic>().unwrap().unwrap();
    assert_eq!(optic.focus(), 3);
}

#[test]
fn test_discovered_clock_works() {
    let registry = CapabilityRegistry::build(discovered_providers()).expect("build");
    let clock = registry.lookup::<dyn Clock>().unwrap().unwrap();

    let before = clock.now();
    let after = clock.now();
    assert!(after >= before);
}

#[test]
fn test_discovered_id_generator_is_unique() {
    let registry = CapabilityRegistry::build(discovered_providers()).expect("build");
    let ids = registry.lookup::<dyn IdGenerator>().unwrap().unwrap();

    assert_ne!(ids.next_id(), ids.next_id());
}
