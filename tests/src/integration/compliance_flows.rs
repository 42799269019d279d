//! # Compliance Flows
//!
//! Validation and report aggregation over mixed registry states.

#[cfg(test)]
mod tests {
    use doctrine_registry::{
        auto_register_known_components, known_component_count, DoctrineRegistryApi, HealthStatus,
    };
    use proptest::prelude::*;

    use crate::fixtures::{frozen_registry, module};

    #[test]
    fn test_manual_health_changes_show_in_summary() {
        let registry = frozen_registry();
        auto_register_known_components(&registry).unwrap();

        assert!(registry.update_component_health("api-rate-limit", HealthStatus::Yellow));
        assert!(registry.update_component_health("mermaid-render-failure", HealthStatus::Red));

        let report = registry.export_compliance_report();
        assert_eq!(report.health_summary.yellow, 1);
        assert_eq!(report.health_summary.red, 1);
        assert_eq!(report.health_summary.green, known_component_count() - 2);
        // Health overrides do not change Barton validity.
        assert_eq!(report.validation.invalid, 0);
    }

    #[test]
    fn test_report_json_contract() {
        let registry = frozen_registry();
        registry.register_component(module("a", 1, 1, 1)).unwrap();
        registry.register_component(module("b", 0, 1, 1)).unwrap();

        let json = serde_json::to_value(registry.export_compliance_report()).unwrap();

        assert_eq!(json["totalComponents"], 2);
        assert_eq!(json["validation"]["valid"], 1);
        assert_eq!(json["validation"]["invalid"], 1);
        assert_eq!(
            json["validation"]["errors"][0],
            "Invalid Barton number for b: 39.00.01.01"
        );
        assert_eq!(json["healthSummary"]["red"], 1);
        assert_eq!(json["components"][0]["lastUpdated"], "2024-06-01T12:00:00Z");
    }

    #[test]
    fn test_empty_registry_report() {
        let report = frozen_registry().export_compliance_report();
        assert_eq!(report.total_components, 0);
        assert_eq!(report.health_summary.total(), 0);
        assert!(report.components.is_empty());
        assert_eq!(report.validation.compliance_percentage(), 100.0);
    }

    proptest! {
        #[test]
        fn prop_health_summary_sums_to_total(
            entries in proptest::collection::vec((0u32..=120, 0u32..=120, 0u32..=120, 0u8..4), 0..40)
        ) {
            let registry = frozen_registry();
            for (i, (m, s, f, health)) in entries.iter().enumerate() {
                let id = format!("c{}", i % 25);
                registry.register_component(module(&id, *m, *s, *f)).unwrap();
                match *health {
                    1 => { registry.update_component_health(&id, HealthStatus::Yellow); }
                    2 => { registry.update_component_health(&id, HealthStatus::Red); }
                    _ => {}
                }
            }

            let report = registry.export_compliance_report();
            let h = report.health_summary;
            prop_assert_eq!(h.green + h.yellow + h.red, report.total_components);
            prop_assert_eq!(
                report.validation.valid + report.validation.invalid,
                report.total_components
            );
            prop_assert_eq!(report.validation.errors.len(), report.validation.invalid);
        }
    }
}
