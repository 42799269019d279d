//! Metrics hooks for registry operations
//!
//! Lock-free counters read by the runtime's `metrics` command.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Thread-safe counters for registry activity.
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    /// Successful registrations, including overwrites
    pub registrations: AtomicU64,
    /// Registrations that replaced an existing id
    pub overwrites: AtomicU64,
    /// Registrations refused by an invariant
    pub rejected_registrations: AtomicU64,
    /// Health updates applied to an existing component
    pub health_updates: AtomicU64,
    /// Lookups by id or by Barton number
    pub lookups: AtomicU64,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_registration(&self, overwrite: bool) {
        self.registrations.fetch_add(1, Ordering::Relaxed);
        if overwrite {
            self.overwrites.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_rejection(&self) {
        self.rejected_registrations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_health_update(&self) {
        self.health_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            registrations: self.registrations.load(Ordering::Relaxed),
            overwrites: self.overwrites.load(Ordering::Relaxed),
            rejected_registrations: self.rejected_registrations.load(Ordering::Relaxed),
            health_updates: self.health_updates.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
        }
    }
}

/// Serializable snapshot of [`RegistryMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub registrations: u64,
    pub overwrites: u64,
    pub rejected_registrations: u64,
    pub health_updates: u64,
    pub lookups: u64,
}
