//! # Repo Lens Runtime
//!
//! Entry point for the `lens-runtime` binary.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use doctrine_registry::RegistryConfig;
use lens_runtime::cli::Args;
use lens_runtime::LensRuntime;
use lens_telemetry::{init_logging, TelemetryConfig};

/// Load configuration from the environment, then apply CLI overrides.
fn load_config(args: &Args) -> (TelemetryConfig, RegistryConfig) {
    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = &args.log_level {
        telemetry = telemetry.with_log_level(level.clone());
    }
    if args.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }

    let mut registry = RegistryConfig::from_env();
    if args.no_bootstrap {
        registry.bootstrap_on_start = false;
    }
    if let Some(marker) = &args.submodule_marker {
        registry.submodule_marker = marker.clone();
    }

    (telemetry, registry)
}

fn run(args: Args) -> Result<bool> {
    let (telemetry, registry_config) = load_config(&args);
    init_logging(&telemetry).context("Failed to initialize logging")?;

    let runtime = LensRuntime::new(registry_config)?;
    runtime.start()?;

    let output = runtime.execute(&args.command)?;
    println!("{}", serde_json::to_string_pretty(&output.body)?);

    Ok(output.success)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
