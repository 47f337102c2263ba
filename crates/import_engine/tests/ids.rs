use std::collections::HashSet;

use import_core::IdGenerator;
use import_engine::{EngineConfig, NanoIdGenerator};

#[test]
fn ids_are_32_alphanumeric_characters() {
    let id = NanoIdGenerator::default().generate();

    assert_eq!(id.chars().count(), 32);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn ids_do_not_repeat() {
    let ids = NanoIdGenerator::default();
    let generated: HashSet<_> = (0..1000).map(|_| ids.generate()).collect();
    assert_eq!(generated.len(), 1000);
}

#[test]
fn length_is_configurable() {
    assert_eq!(NanoIdGenerator::with_length(12).generate().len(), 12);
}

#[test]
fn configured_length_reaches_the_generator() {
    let config = EngineConfig {
        id_length: 48,
        ..EngineConfig::default()
    };
    let id = NanoIdGenerator::with_length(config.id_length).generate();
    assert_eq!(id.len(), 48);
}
