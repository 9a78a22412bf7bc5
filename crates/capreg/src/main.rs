//! Capability Registry - Entry Point
//!
//! Binary entry point of the `capreg` inspection tool. Lives in the facade
//! crate so every provider crate is linked into the build it inspects.

// Force-link capreg-providers so their linkme registrations are included
extern crate capreg_providers;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use capreg::cli::{self, Cli, Command};
use capreg_infrastructure::config::ConfigLoader;
use capreg_infrastructure::{init_services, logging};
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    logging::init_logging(&config.logging)?;

    let mut out = io::stdout().lock();
    let healthy = match cli.command {
        Command::Providers => cli::providers(&config, &mut out)?,
        Command::Capabilities { json } => {
            cli::capabilities(init_services(&config)?, json, &mut out)?
        }
        Command::Check => cli::check(init_services(&config)?, &mut out)?,
    };

    Ok(if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
