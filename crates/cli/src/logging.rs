// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires a `tracing-subscriber` logger per the loaded `logging_config`
//! (§6), following the daemon's `setup_logging` pattern: an `EnvFilter`
//! seeded from `RUST_LOG` (falling back to the configured level, then
//! `info`) feeding a `fmt` layer over whichever writer the configured
//! kind names.

use anyhow::{Context, Result};
use pw_config::{LoggingConfig, LoggingKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Held by the caller for the process lifetime; dropping it flushes the
/// non-blocking file writer. `None` when logging is off or console-only,
/// where nothing needs flushing on exit.
pub type Guard = Option<tracing_appender::non_blocking::WorkerGuard>;

fn filter(level: Option<i32>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = match level {
        Some(l) if l <= 10 => "debug",
        Some(l) if l <= 20 => "info",
        Some(l) if l <= 30 => "warn",
        Some(_) => "error",
        None => "info",
    };
    EnvFilter::new(directive)
}

pub fn init(config: &LoggingConfig) -> Result<Guard> {
    match config.kind {
        LoggingKind::Off => Ok(None),
        LoggingKind::Console => {
            let _ = tracing_subscriber::registry()
                .with(filter(config.level))
                .with(fmt::layer())
                .try_init();
            Ok(None)
        }
        LoggingKind::File => {
            let dir = config
                .directory
                .as_deref()
                .unwrap_or(".")
                .to_string();
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {dir}"))?;
            let file_appender = tracing_appender::rolling::never(&dir, "pw.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = tracing_subscriber::registry()
                .with(filter(config.level))
                .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                .try_init();
            Ok(Some(guard))
        }
        // Remote logging (shipping spans to an external collector) has no
        // concrete destination in this spec — fall back to console rather
        // than silently dropping output.
        LoggingKind::Remote => {
            let _ = tracing_subscriber::registry()
                .with(filter(config.level))
                .with(fmt::layer())
                .try_init();
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
