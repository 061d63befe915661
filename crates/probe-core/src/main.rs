//! Single-shot antivirus status probe.
//!
//! Resolves configuration, runs one probe pass, writes the status record
//! next to the management agent's data, and echoes the same JSON to
//! stdout for the calling component. Any fatal error surfaces on stderr
//! and exits non-zero without touching the status file.

mod config;
mod platform;
mod probe;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ProbeConfig;

fn main() -> Result<()> {
    // stdout carries the status record; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = ProbeConfig::load()?;
    info!(
        uninstall_key = %config.product.uninstall_key,
        service = %config.product.service_name,
        output = %config.output_path.display(),
        max_update_age_secs = config.max_update_age_secs,
        "starting antivirus status probe"
    );

    let record = probe::run(&config)?;
    print!("{}", record.to_json()?);

    Ok(())
}
