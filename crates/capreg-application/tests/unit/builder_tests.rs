//! Tests for the one-time registry build and descriptor validation

use std::sync::Arc;

use capreg_application::{CapabilityRegistry, ProviderDescriptor, RegistryBuilder};
use capreg_domain::{Error, SERVICE, Service, implementation, interface};

pub trait Storage: Service {}
pub trait Audit: Send + Sync {}

interface! { pub static STORAGE: dyn Storage => [SERVICE: dyn Service]; }
interface! { pub static AUDIT: dyn Audit; }

struct Disk;
impl Service for Disk {}
impl Storage for Disk {}
impl Audit for Disk {}
implementation! { static DISK: Disk => [STORAGE: dyn Storage, AUDIT: dyn Audit]; }

struct Tape;
impl Service for Tape {}
impl Storage for Tape {}
implementation! { static TAPE: Tape => [STORAGE: dyn Storage]; }

fn disk(name: &str) -> ProviderDescriptor {
    ProviderDescriptor::new(name, &DISK, || Ok(Disk))
}

#[test]
fn test_register_reports_claimed_types() {
    let mut builder = RegistryBuilder::new();

    // Disk and Storage; Audit never reaches the marker
    assert_eq!(builder.register(disk("disk")).unwrap(), 2);
}

#[test]
fn test_empty_name_is_malformed() {
    let mut builder = RegistryBuilder::new();
    let result = builder.register(disk("  "));

    assert!(matches!(result, Err(Error::MalformedDescriptor { .. })));
}

#[test]
fn test_interface_as_implementation_is_malformed() {
    let descriptor = ProviderDescriptor::new("abstract", &STORAGE, || Ok(Disk));

    match CapabilityRegistry::build([descriptor]) {
        Err(Error::MalformedDescriptor { provider, message }) => {
            assert_eq!(provider, "abstract");
            assert!(message.contains("Storage"));
        }
        Err(other) => panic!("Expected MalformedDescriptor, got {other}"),
        Ok(_) => panic!("Expected MalformedDescriptor"),
    }
}

#[test]
fn test_malformed_descriptor_fails_whole_build() {
    let descriptors = vec![
        disk("disk"),
        ProviderDescriptor::new("", &TAPE, || Ok(Tape)),
    ];

    let result = CapabilityRegistry::build(descriptors);
    assert!(result.as_ref().is_err_and(Error::is_build_error));
}

#[test]
fn test_partially_overridden_provider_keeps_its_slot() {
    let mut builder = CapabilityRegistry::builder();
    builder.register(ProviderDescriptor::new("tape", &TAPE, || Ok(Tape))).unwrap();
    builder.register(disk("disk")).unwrap();
    let registry = builder.build();

    // Tape still serves its concrete type
    assert_eq!(registry.slots().len(), 2);
    assert_eq!(registry.provider_of::<dyn Storage>(), Some("disk"));
    assert_eq!(registry.provider_of::<Tape>(), Some("tape"));
}

#[test]
fn test_same_provider_twice_keeps_latest_slot() {
    let mut builder = RegistryBuilder::new();
    builder.register(disk("first")).unwrap();
    builder.register(disk("second")).unwrap();
    let registry = builder.build();

    assert_eq!(registry.slots().len(), 1);
    assert_eq!(registry.slots()[0].provider(), "second");
    assert_eq!(registry.provider_of::<Disk>(), Some("second"));
}

#[test]
fn test_registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CapabilityRegistry>();

    let registry = Arc::new(CapabilityRegistry::build([disk("disk")]).unwrap());
    let worker = Arc::clone(&registry);
    let found = std::thread::spawn(move || worker.contains::<dyn Storage>())
        .join()
        .unwrap();
    assert!(found);
}
