// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! pw - a thin binary wrapping the pipeworks entry point (§6).
//!
//! Argument parsing, config-document loading, and log wiring only. No
//! business logic lives here — everything past [`run`] is a call into
//! `pw-engine`.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use pw_config::{validate_initial_config, RawInitialConfig};
use std::io::Read;
use std::path::PathBuf;

/// Run a configuration-driven pipeline to completion.
#[derive(Parser)]
#[command(name = "pw", version, about = "Run a pipeworks configuration document to completion")]
struct Cli {
    /// Path to the InitialConfig JSON document, or `-` for stdin
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let raw_text = read_config(&cli.config)?;
    let raw: RawInitialConfig =
        serde_json::from_str(&raw_text).context("config document is not valid JSON")?;

    let registry = pw_registry::Registry::new();
    pw_handlers::register_demo_handlers(&registry);

    let initial = validate_initial_config(raw, &registry).context("config validation failed")?;

    let _guard = logging::init(&initial.logging_config)?;

    pw_engine::run(registry, initial);
    Ok(())
}

fn read_config(path: &std::path::Path) -> Result<String> {
    if path == std::path::Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read config from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
