//! Unit tests for the declared type graph and its upcasts

use std::any::TypeId;
use std::sync::Arc;

use capreg_domain::{
    Erased, SERVICE, Service, TypeKind, erase, implementation, interface, unerase,
};

pub trait Speaker: Service {
    fn speak(&self) -> String;
}

pub trait LoudSpeaker: Speaker {
    fn shout(&self) -> String {
        self.speak().to_uppercase()
    }
}

pub trait Describe: Send + Sync {
    fn describe(&self) -> &'static str;
}

interface! {
    pub static SPEAKER: dyn Speaker => [SERVICE: dyn Service];
}

interface! {
    pub static LOUD_SPEAKER: dyn LoudSpeaker => [SPEAKER: dyn Speaker];
}

interface! {
    pub static DESCRIBE: dyn Describe;
}

struct Parrot;

impl Service for Parrot {}

impl Speaker for Parrot {
    fn speak(&self) -> String {
        "polly".to_string()
    }
}

impl LoudSpeaker for Parrot {}

impl Describe for Parrot {
    fn describe(&self) -> &'static str {
        "a parrot"
    }
}

implementation! {
    static PARROT: Parrot => [LOUD_SPEAKER: dyn LoudSpeaker, DESCRIBE: dyn Describe];
}

fn parrot_handle() -> Erased {
    erase(Arc::new(Parrot))
}

#[test]
fn test_interface_node_metadata() {
    assert_eq!(SPEAKER.name, "Speaker");
    assert_eq!(SPEAKER.kind, TypeKind::Interface);
    assert_eq!(SPEAKER.id(), TypeId::of::<dyn Speaker>());
    assert_eq!(SPEAKER.supertypes.len(), 1);
    assert!(SPEAKER.supertypes[0].node.is_marker());
}

#[test]
fn test_interface_without_supertypes() {
    assert!(DESCRIBE.supertypes.is_empty());
    assert!(!DESCRIBE.is_marker());
}

#[test]
fn test_implementation_node_metadata() {
    assert_eq!(PARROT.name, "Parrot");
    assert_eq!(PARROT.kind, TypeKind::Concrete);
    assert_eq!(PARROT.id(), TypeId::of::<Parrot>());

    let names: Vec<_> = PARROT.supertypes.iter().map(|s| s.node.name).collect();
    assert_eq!(names, vec!["LoudSpeaker", "Describe"]);
}

#[test]
fn test_upcast_chain_reaches_marker() {
    let handle = parrot_handle();

    let loud = (PARROT.supertypes[0].upcast)(&handle).expect("Parrot -> LoudSpeaker");
    let speaker = (LOUD_SPEAKER.supertypes[0].upcast)(&loud).expect("LoudSpeaker -> Speaker");
    let service = (SPEAKER.supertypes[0].upcast)(&speaker).expect("Speaker -> Service");

    assert_eq!(unerase::<dyn LoudSpeaker>(&loud).unwrap().shout(), "POLLY");
    assert_eq!(unerase::<dyn Speaker>(&speaker).unwrap().speak(), "polly");
    assert!(unerase::<dyn Service>(&service).is_some());
}

#[test]
fn test_upcast_keeps_identity() {
    let parrot = Arc::new(Parrot);
    let handle = erase(Arc::clone(&parrot));

    let describe = (PARROT.supertypes[1].upcast)(&handle).expect("Parrot -> Describe");
    let describe = unerase::<dyn Describe>(&describe).unwrap();

    assert_eq!(describe.describe(), "a parrot");
    assert_eq!(
        Arc::as_ptr(&parrot) as *const (),
        Arc::as_ptr(&describe) as *const ()
    );
}

#[test]
fn test_upcast_rejects_foreign_handle() {
    let foreign = erase(Arc::new(42_u8));
    assert!((PARROT.supertypes[0].upcast)(&foreign).is_none());
    assert!((SPEAKER.supertypes[0].upcast)(&foreign).is_none());
}

#[test]
fn test_node_debug_lists_supertypes() {
    let rendered = format!("{:?}", PARROT);
    assert!(rendered.contains("Parrot"));
    assert!(rendered.contains("LoudSpeaker"));
    assert!(rendered.contains("Describe"));
}
