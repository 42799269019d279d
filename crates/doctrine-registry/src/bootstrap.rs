//! # Known Component Catalogue
//!
//! The components of the Repo Lens dashboard, registered at startup.
//!
//! ```text
//! repo-lens (39.01.01.01)
//! ├── pages        (39.01.02.01)  dashboard, repository, error log, diagram, ORBT guide
//! ├── api-routes   (39.01.03.01)  GitHub repos, error logs
//! ├── diagnostics  (39.01.04.01)  health badge, compliance panel, repair guide, rate limit signature
//! └── diagrams     (39.01.05.01)  Mermaid viewer, render failure signature
//! ```
//!
//! Entries are listed parents first.

use shared_types::ComponentType;
use tracing::info;

use crate::domain::ComponentRegistration;
use crate::error::RegistryError;
use crate::ports::DoctrineRegistryApi;

/// One catalogue row: id, name, type, (module, submodule, file), parent, description.
struct KnownComponent {
    id: &'static str,
    name: &'static str,
    component_type: ComponentType,
    segments: (u32, u32, u32),
    parent: Option<&'static str>,
    description: &'static str,
}

const KNOWN_COMPONENTS: &[KnownComponent] = &[
    KnownComponent {
        id: "repo-lens",
        name: "Repo Lens",
        component_type: ComponentType::Module,
        segments: (1, 1, 1),
        parent: None,
        description: "GitHub repository dashboard with diagnostics and diagrams",
    },
    KnownComponent {
        id: "pages",
        name: "Pages",
        component_type: ComponentType::Submodule,
        segments: (1, 2, 1),
        parent: Some("repo-lens"),
        description: "Routed dashboard pages",
    },
    KnownComponent {
        id: "api-routes",
        name: "API Routes",
        component_type: ComponentType::Submodule,
        segments: (1, 3, 1),
        parent: Some("repo-lens"),
        description: "Server route handlers",
    },
    KnownComponent {
        id: "diagnostics",
        name: "Diagnostics",
        component_type: ComponentType::Submodule,
        segments: (1, 4, 1),
        parent: Some("repo-lens"),
        description: "Health, compliance and error tracking",
    },
    KnownComponent {
        id: "diagrams",
        name: "Diagrams",
        component_type: ComponentType::Submodule,
        segments: (1, 5, 1),
        parent: Some("repo-lens"),
        description: "Mermaid diagram rendering",
    },
    KnownComponent {
        id: "dashboard-page",
        name: "Dashboard",
        component_type: ComponentType::Page,
        segments: (1, 2, 2),
        parent: Some("pages"),
        description: "Repository overview",
    },
    KnownComponent {
        id: "repository-page",
        name: "Repository Detail",
        component_type: ComponentType::Page,
        segments: (1, 2, 3),
        parent: Some("pages"),
        description: "Metadata for a single repository",
    },
    KnownComponent {
        id: "error-log-page",
        name: "Error Log",
        component_type: ComponentType::Page,
        segments: (1, 2, 4),
        parent: Some("pages"),
        description: "Diagnostic and error log viewer",
    },
    KnownComponent {
        id: "diagram-page",
        name: "Diagrams",
        component_type: ComponentType::Page,
        segments: (1, 2, 5),
        parent: Some("pages"),
        description: "Architecture diagrams",
    },
    KnownComponent {
        id: "orbt-guide-page",
        name: "ORBT Guide",
        component_type: ComponentType::Page,
        segments: (1, 2, 6),
        parent: Some("pages"),
        description: "Operate, Repair, Build, Train documentation",
    },
    KnownComponent {
        id: "github-repos-route",
        name: "GitHub Repositories Route",
        component_type: ComponentType::File,
        segments: (1, 3, 2),
        parent: Some("api-routes"),
        description: "Repository metadata endpoint",
    },
    KnownComponent {
        id: "error-logs-route",
        name: "Error Logs Route",
        component_type: ComponentType::File,
        segments: (1, 3, 3),
        parent: Some("api-routes"),
        description: "Diagnostic log endpoint",
    },
    KnownComponent {
        id: "health-badge",
        name: "Health Badge",
        component_type: ComponentType::UiVisual,
        segments: (1, 4, 2),
        parent: Some("diagnostics"),
        description: "Green/yellow/red status indicator",
    },
    KnownComponent {
        id: "compliance-panel",
        name: "Compliance Panel",
        component_type: ComponentType::UiVisual,
        segments: (1, 4, 3),
        parent: Some("diagnostics"),
        description: "Barton number compliance summary",
    },
    KnownComponent {
        id: "repair-guide",
        name: "Repair Guide",
        component_type: ComponentType::Troubleshooting,
        segments: (1, 4, 4),
        parent: Some("diagnostics"),
        description: "Steps for resolving red components",
    },
    KnownComponent {
        id: "api-rate-limit",
        name: "API Rate Limit",
        component_type: ComponentType::ErrorSignature,
        segments: (1, 4, 5),
        parent: Some("diagnostics"),
        description: "GitHub API rate limit exceeded",
    },
    KnownComponent {
        id: "mermaid-viewer",
        name: "Mermaid Viewer",
        component_type: ComponentType::UiVisual,
        segments: (1, 5, 2),
        parent: Some("diagrams"),
        description: "Renders Mermaid source to SVG",
    },
    KnownComponent {
        id: "mermaid-render-failure",
        name: "Mermaid Render Failure",
        component_type: ComponentType::ErrorSignature,
        segments: (1, 5, 3),
        parent: Some("diagrams"),
        description: "Diagram source failed to parse",
    },
];

/// Number of entries in the catalogue.
pub fn known_component_count() -> usize {
    KNOWN_COMPONENTS.len()
}

/// Register every known component. Returns how many were registered.
///
/// Safe to call repeatedly: re-registration overwrites with identical data.
pub fn auto_register_known_components(
    registry: &dyn DoctrineRegistryApi,
) -> Result<usize, RegistryError> {
    for known in KNOWN_COMPONENTS {
        let (module, submodule, file) = known.segments;
        let mut registration = ComponentRegistration::new(
            known.id,
            known.name,
            known.component_type,
            module,
            submodule,
            file,
        )
        .with_description(known.description);

        if let Some(parent) = known.parent {
            registration = registration.with_parent(parent);
        }

        registry.register_component(registration)?;
    }

    info!(
        "[Registry] Bootstrapped {} known components",
        KNOWN_COMPONENTS.len()
    );
    Ok(KNOWN_COMPONENTS.len())
}
