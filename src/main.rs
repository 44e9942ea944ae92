// In src/main.rs

//! Main entry point and module declarations for `color-list`.

// Declare modules
/// Color entries and the fixed 24-bit range.
pub mod color;
/// Build-time configuration.
pub mod config;
/// Output file writing.
pub mod writer;

use crate::config::CONFIG;
use anyhow::Context;
use log::{debug, error, info, log_enabled, Level};

/// Writes every 24-bit color from `#000000` to `#FFFFFF` to `./testing.txt`.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting color-list...");
    if log_enabled!(Level::Debug) {
        debug!(
            "Configuration: {}",
            serde_json::to_string(&*CONFIG).context("Failed to serialize configuration")?
        );
    }

    let summary = writer::write_color_list(&CONFIG.output).map_err(|e| {
        error!("Failed to write color list: {:#}", e);
        e
    })?;

    info!(
        "color-list finished: {} lines ({} bytes) in {}",
        summary.lines,
        summary.bytes,
        summary.path.display()
    );
    Ok(())
}
