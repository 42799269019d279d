//! # Concurrency
//!
//! A single registry shared by many request handlers.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use doctrine_registry::{DoctrineRegistryApi, HealthStatus};

    use crate::fixtures::{frozen_registry, module};

    #[test]
    fn test_parallel_registration_under_shared_parent() {
        let registry = Arc::new(frozen_registry());
        registry.register_component(module("root", 1, 1, 1)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for i in 0..25 {
                        let id = format!("t{}-{}", t, i);
                        registry
                            .register_component(module(&id, 2, t + 1, i + 1).with_parent("root"))
                            .unwrap();
                        registry.update_component_health(&id, HealthStatus::Yellow);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 1 + 8 * 25);
        let root = registry.get_component("root").unwrap();
        assert_eq!(root.children.len(), 8 * 25);

        let report = registry.export_compliance_report();
        assert_eq!(report.health_summary.yellow, 8 * 25);
        assert_eq!(report.validation.invalid, 0);
    }
}
