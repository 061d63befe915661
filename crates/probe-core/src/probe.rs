//! Wires the host collaborators into a single probe pass.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use tracing::info;

use av_status::probe::run_probe;
use av_status::status::StatusRecord;

use crate::config::ProbeConfig;
use crate::platform::{RegistryProductLookup, WindowsServiceQuery};

/// Staleness window as a chrono duration.
///
/// Configured windows beyond what chrono can represent collapse to the
/// maximum duration, which no realistic update age ever exceeds.
fn max_age_duration(max_update_age_secs: u64) -> Duration {
    i64::try_from(max_update_age_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}

pub fn run(config: &ProbeConfig) -> Result<StatusRecord> {
    let now = Utc::now();
    let max_age = max_age_duration(config.max_update_age_secs);

    let record = run_probe(
        &config.product_profile(),
        &RegistryProductLookup,
        &WindowsServiceQuery,
        now,
        max_age,
    )?;

    record
        .write_to(&config.output_path)
        .with_context(|| format!("failed writing status file {}", config.output_path.display()))?;
    info!(path = %config.output_path.display(), "wrote status record");

    Ok(record)
}
