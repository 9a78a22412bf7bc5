//! Inspection commands of the `capreg` binary
//!
//! Each command writes its report to the given writer and returns whether
//! the inspected build is healthy.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use capreg_application::{CapabilityRegistry, list_providers};
use capreg_infrastructure::config::AppConfig;
use clap::{Parser, Subcommand};

/// Command line interface for the capability registry
#[derive(Parser, Debug)]
#[command(name = "capreg")]
#[command(about = "Inspect the providers and capabilities linked into this build")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Inspection commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the discovered providers
    Providers,
    /// Show which provider serves each capability
    Capabilities {
        /// Print the bindings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create every provider and report the ones that fail
    Check,
}

/// List every linked provider, marking the disabled ones
pub fn providers(config: &AppConfig, out: &mut impl Write) -> Result<bool> {
    let mut entries = list_providers();
    entries.sort_unstable_by_key(|(name, _)| *name);

    for (name, description) in entries {
        let status = if config.registry.is_disabled(name) {
            "disabled"
        } else {
            "enabled"
        };
        writeln!(out, "{name:<24} {status:<9} {description}")?;
    }
    Ok(true)
}

/// Print the capability to provider map
pub fn capabilities(registry: &CapabilityRegistry, json: bool, out: &mut impl Write) -> Result<bool> {
    let bindings = registry.bindings();

    if json {
        serde_json::to_writer_pretty(&mut *out, &bindings)
            .context("Failed to serialize bindings")?;
        writeln!(out)?;
        return Ok(true);
    }

    if bindings.is_empty() {
        writeln!(out, "No capabilities registered")?;
        return Ok(true);
    }
    for binding in bindings {
        writeln!(
            out,
            "{:<48} {:<9} {}",
            binding.capability, binding.kind, binding.provider
        )?;
    }
    Ok(true)
}

/// Materialize every provider slot
///
/// Returns `false` when at least one provider failed.
pub fn check(registry: &CapabilityRegistry, out: &mut impl Write) -> Result<bool> {
    let mut healthy = true;

    for slot in registry.slots() {
        match slot.materialize() {
            Ok(_) => writeln!(out, "ok      {}", slot.provider())?,
            Err(err) => {
                healthy = false;
                writeln!(out, "FAILED  {}: {}", slot.provider(), err)?;
            }
        }
    }
    writeln!(
        out,
        "{} provider(s) checked, {}",
        registry.slots().len(),
        if healthy { "all healthy" } else { "failures found" }
    )?;
    Ok(healthy)
}
