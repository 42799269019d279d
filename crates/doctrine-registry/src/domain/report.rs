//! # Compliance Reports
//!
//! Aggregates consumed by the dashboard's report renderers. Field names
//! are part of the external contract:
//!
//! ```text
//! {
//!   totalComponents,
//!   validation:    { valid, invalid, errors: [..] },
//!   healthSummary: { green, yellow, red },
//!   components:    [{ id, name, type, canonicalString, healthStatus, lastUpdated, description }]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{ComponentType, HealthStatus};

use super::component::Component;

/// Result of validating every registered Barton number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub valid: usize,
    pub invalid: usize,
    /// One message per invalid component.
    pub errors: Vec<String>,
}

impl ValidationSummary {
    /// Record the outcome for one component.
    pub fn record(&mut self, component: &Component) {
        if component.hierarchical_id.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
            self.errors.push(format!(
                "Invalid Barton number for {}: {}",
                component.name,
                component.hierarchical_id.canonical()
            ));
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }

    /// Share of valid components, in percent. An empty registry is fully compliant.
    pub fn compliance_percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 100.0;
        }
        self.valid as f64 / total as f64 * 100.0
    }

    pub fn is_compliant(&self) -> bool {
        self.invalid == 0
    }
}

/// Histogram of health states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
}

impl HealthSummary {
    pub fn record(&mut self, status: HealthStatus) {
        match status {
            HealthStatus::Green => self.green += 1,
            HealthStatus::Yellow => self.yellow += 1,
            HealthStatus::Red => self.red += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.green + self.yellow + self.red
    }
}

/// Flattened component row of a compliance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub canonical_string: String,
    pub health_status: HealthStatus,
    pub last_updated: DateTime<Utc>,
    pub description: String,
}

impl From<&Component> for ComplianceEntry {
    fn from(component: &Component) -> Self {
        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            component_type: component.component_type,
            canonical_string: component.canonical_string(),
            health_status: component.health_status,
            last_updated: component.last_updated,
            description: component.description.clone(),
        }
    }
}

/// Full compliance export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub total_components: usize,
    pub validation: ValidationSummary,
    pub health_summary: HealthSummary,
    pub components: Vec<ComplianceEntry>,
}

impl ComplianceReport {
    /// Aggregate a report from a snapshot of components.
    pub fn from_components(components: &[Component]) -> Self {
        let mut validation = ValidationSummary::default();
        let mut health_summary = HealthSummary::default();

        for component in components {
            validation.record(component);
            health_summary.record(component.health_status);
        }

        Self {
            total_components: components.len(),
            validation,
            health_summary,
            components: components.iter().map(ComplianceEntry::from).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
