mod config;
mod errors;
mod layout;
mod models;
mod pipeline;
mod render;
mod roster;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

fn main() -> Result<()> {
    // Load configuration first (fails fast on missing input/output paths)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting badge generator v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Input: {} ({}), output: {}",
        config.input_path.display(),
        config.input_encoding,
        config.output_path.display()
    );

    let summary = pipeline::run(&config)?;

    if summary.pages > 0 {
        info!(
            "All {} pages of name badges ({} attendees, {} per page) have been saved to {}",
            summary.pages,
            summary.records,
            summary.grid.badges_per_page,
            config.output_path.display()
        );
    }

    Ok(())
}
