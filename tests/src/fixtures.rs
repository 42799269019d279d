//! Shared test fixtures.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use doctrine_registry::{
    ComponentRegistration, ComponentType, DoctrineRegistry, FixedClock, RegistryConfig,
};

/// Registry with a frozen clock so reports are reproducible.
pub fn frozen_registry() -> DoctrineRegistry {
    let instant = Utc
        .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    DoctrineRegistry::with_clock(RegistryConfig::default(), Arc::new(FixedClock(instant)))
}

/// Registration for a module-type component.
pub fn module(id: &str, m: u32, s: u32, f: u32) -> ComponentRegistration {
    ComponentRegistration::new(id, id, ComponentType::Module, m, s, f)
}
