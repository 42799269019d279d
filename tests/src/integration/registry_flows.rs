//! # Registry Flows
//!
//! End-to-end registration scenarios against a single registry instance.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use doctrine_registry::{
        auto_register_known_components, DoctrineRegistryApi, HealthStatus, HierarchyNode,
        RegistryError,
    };

    use crate::fixtures::{frozen_registry, module};

    fn collect_ids<'a>(nodes: &'a [HierarchyNode], out: &mut Vec<&'a str>) {
        for node in nodes {
            out.extend(node.ids());
        }
    }

    #[test]
    fn test_valid_and_invalid_registration_scenario() {
        let registry = frozen_registry();

        let a = registry.register_component(module("A", 1, 1, 1)).unwrap();
        assert_eq!(a.canonical_string(), "39.01.01.01");
        assert_eq!(a.health_status, HealthStatus::Green);

        let b = registry.register_component(module("B", 100, 1, 1)).unwrap();
        assert_eq!(b.health_status, HealthStatus::Red);

        let summary = registry.validate_all_components();
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.invalid, 1);
        assert_eq!(
            summary.errors,
            vec!["Invalid Barton number for B: 39.100.01.01".to_string()]
        );
    }

    #[test]
    fn test_parent_child_scenario() {
        let registry = frozen_registry();
        registry.register_component(module("Parent", 1, 1, 1)).unwrap();
        registry
            .register_component(module("Child", 1, 1, 2).with_parent("Parent"))
            .unwrap();

        let roots = registry.get_hierarchy();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, "Parent");
        assert_eq!(roots[0].children.len(), 1);
        assert_eq!(roots[0].children[0].id, "Child");
    }

    #[test]
    fn test_same_id_twice_single_entry_last_write_wins() {
        let registry = frozen_registry();
        registry
            .register_component(module("dup", 1, 1, 1).with_description("first"))
            .unwrap();
        registry
            .register_component(module("dup", 5, 5, 5).with_description("second"))
            .unwrap();

        let all = registry.get_all_components();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "second");
        assert_eq!(all[0].canonical_string(), "39.05.05.05");
    }

    #[test]
    fn test_child_listed_once_after_repeated_registration() {
        let registry = frozen_registry();
        registry.register_component(module("P", 1, 1, 1)).unwrap();
        for _ in 0..3 {
            registry
                .register_component(module("C", 1, 1, 2).with_parent("P"))
                .unwrap();
        }

        let parent = registry.get_component("P").unwrap();
        assert_eq!(parent.children.iter().filter(|c| *c == "C").count(), 1);
    }

    #[test]
    fn test_hierarchy_covers_every_component_once() {
        let registry = frozen_registry();
        auto_register_known_components(&registry).unwrap();
        registry.register_component(module("orphan-root", 9, 1, 1)).unwrap();
        registry
            .register_component(module("orphan-leaf", 9, 1, 2).with_parent("orphan-root"))
            .unwrap();

        let roots = registry.get_hierarchy();
        let root_ids: HashSet<&str> = roots.iter().map(|r| r.id.as_str()).collect();
        let expected_roots: HashSet<String> = registry
            .get_all_components()
            .into_iter()
            .filter(|c| c.parent_id.is_none())
            .map(|c| c.id)
            .collect();
        assert_eq!(
            root_ids,
            expected_roots.iter().map(String::as_str).collect::<HashSet<_>>()
        );

        let mut seen = Vec::new();
        collect_ids(&roots, &mut seen);
        let unique: HashSet<&str> = seen.iter().copied().collect();
        assert_eq!(seen.len(), unique.len());
        assert_eq!(seen.len(), registry.len());
    }

    #[test]
    fn test_dangling_parent_is_rejected() {
        let registry = frozen_registry();
        let err = registry
            .register_component(module("lost", 1, 1, 1).with_parent("nowhere"))
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::UnknownParent {
                id: "lost".to_string(),
                parent_id: "nowhere".to_string(),
            }
        );
        assert!(registry.get_component("lost").is_none());
    }

    #[test]
    fn test_reparent_into_own_subtree_is_rejected() {
        let registry = frozen_registry();
        auto_register_known_components(&registry).unwrap();

        let err = registry
            .register_component(module("repo-lens", 1, 1, 1).with_parent("health-badge"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::CycleDetected { .. }));
        assert_eq!(registry.get_hierarchy().len(), 1);
    }

    #[test]
    fn test_lookup_by_number_after_bootstrap() {
        let registry = frozen_registry();
        auto_register_known_components(&registry).unwrap();

        let page = registry.get_component_by_hierarchical_id("39.01.02.06").unwrap();
        assert_eq!(page.id, "orbt-guide-page");
    }

    #[test]
    fn test_path_ids_are_reproducible_across_registries() {
        let path = "03-diagnostics/submodules/02-errors/ErrorLog.tsx";
        let first = frozen_registry().generate_id_from_path(path);
        let second = frozen_registry().generate_id_from_path(path);

        assert_eq!(first, second);
        assert_eq!((first.module(), first.submodule()), (3, 2));
    }
}
