//! Command-line arguments.

use clap::{Parser, Subcommand};
use doctrine_registry::ComponentType;

/// Repo Lens Doctrine Registry
#[derive(Parser, Debug)]
#[command(name = "lens-runtime")]
#[command(about = "Barton numbering and ORBT compliance reports for Repo Lens")]
#[command(version)]
pub struct Args {
    /// Log level or filter directive (overrides RL_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON (overrides RL_JSON_LOGS)
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Start with an empty registry instead of the known component catalogue
    #[arg(long, global = true)]
    pub no_bootstrap: bool,

    /// Path segment that introduces a submodule directory (overrides RL_SUBMODULE_MARKER)
    #[arg(long, global = true)]
    pub submodule_marker: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the full compliance report
    Report,

    /// Print the component hierarchy as a nested tree
    Hierarchy,

    /// Print the validation summary; exits non-zero if any id is invalid
    Validate,

    /// List components, optionally filtered by type
    List {
        /// module, submodule, page, file, ui_visual, troubleshooting or error_signature
        #[arg(long = "type")]
        component_type: Option<ComponentType>,
    },

    /// Look up a component by Barton number (e.g. 39.01.02.04)
    Lookup {
        barton: String,
    },

    /// Derive Barton numbers from file paths
    IdFromPath {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print registry activity counters
    Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let args = Args::try_parse_from(["lens-runtime", "report"]).unwrap();
        assert_eq!(args.command, Command::Report);
        assert!(!args.no_bootstrap);
    }

    #[test]
    fn test_parse_list_with_type() {
        let args = Args::try_parse_from(["lens-runtime", "list", "--type", "ui_visual"]).unwrap();
        assert_eq!(
            args.command,
            Command::List {
                component_type: Some(ComponentType::UiVisual)
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert!(Args::try_parse_from(["lens-runtime", "list", "--type", "widget"]).is_err());
    }

    #[test]
    fn test_id_from_path_requires_paths() {
        assert!(Args::try_parse_from(["lens-runtime", "id-from-path"]).is_err());
    }

    #[test]
    fn test_submodule_marker_comes_only_from_flag() {
        std::env::set_var("RL_SUBMODULE_MARKER", "parts");
        let args = Args::try_parse_from(["lens-runtime", "report"]).unwrap();
        std::env::remove_var("RL_SUBMODULE_MARKER");
        assert_eq!(args.submodule_marker, None);

        let args =
            Args::try_parse_from(["lens-runtime", "report", "--submodule-marker", "features"]).unwrap();
        assert_eq!(args.submodule_marker.as_deref(), Some("features"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["lens-runtime", "validate", "--no-bootstrap", "--log-level", "debug"])
                .unwrap();
        assert!(args.no_bootstrap);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
