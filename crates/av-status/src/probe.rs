//! Probe orchestration.
//!
//! One sequential pass per process: look the product up, pull the
//! last-update token out of its settings file, evaluate freshness, ask
//! the service manager for the protection service's state, and assemble
//! the record. Lookup, extraction, and freshness failures abort the run;
//! service-state failures fold into `running = false`.

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::encoding::EncodingProfile;
use crate::freshness::evaluate_freshness;
use crate::settings::extract_last_update;
use crate::status::StatusRecord;
use crate::Result;

/// Substring of the service state text that counts as protection active.
pub const RUNNING_STATE: &str = "Running";

/// Which product to monitor: its registry identity plus the names used
/// inside its settings file and by the service manager.
#[derive(Debug, Clone)]
pub struct ProductProfile {
    pub uninstall_key: String,
    pub settings_file: String,
    pub update_section: String,
    pub update_key: String,
    pub service_name: String,
    pub encoding: EncodingProfile,
}

/// A product as reported by the uninstall registry.
///
/// Lookup implementations only return records with both fields
/// populated; a blank name or path is a lookup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub display_name: String,
    pub install_path: PathBuf,
}

/// Installed-product lookup capability.
pub trait ProductLookup {
    fn lookup(&self, uninstall_key: &str) -> Result<ProductRecord>;
}

/// Service-manager query capability: service name in, state text out.
pub trait ServiceStateQuery {
    fn query_state(&self, service_name: &str) -> io::Result<String>;
}

/// Interpret a service query outcome as a running flag.
///
/// Every failure mode collapses to `false`; a service that cannot be
/// queried is reported as not running, and the probe carries on.
pub fn service_running<S: ServiceStateQuery>(services: &S, service_name: &str) -> bool {
    match services.query_state(service_name) {
        Ok(state) => {
            debug!(service = %service_name, state = %state, "service state query succeeded");
            state.contains(RUNNING_STATE)
        }
        Err(err) => {
            warn!(service = %service_name, error = %err, "service state query failed");
            false
        }
    }
}

/// Run the whole probe once against a pinned `now`.
pub fn run_probe<L, S>(
    profile: &ProductProfile,
    lookup: &L,
    services: &S,
    now: DateTime<Utc>,
    max_age: Duration,
) -> Result<StatusRecord>
where
    L: ProductLookup,
    S: ServiceStateQuery,
{
    let product = lookup.lookup(&profile.uninstall_key)?;
    info!(
        product = %product.display_name,
        path = %product.install_path.display(),
        "found installed product"
    );

    let settings_path = product.install_path.join(&profile.settings_file);
    let raw = extract_last_update(
        &settings_path,
        profile.encoding,
        &profile.update_section,
        &profile.update_key,
    )?;
    let up_to_date = evaluate_freshness(&raw, now, max_age)?;
    info!(last_update = %raw, up_to_date, "evaluated signature freshness");

    let running = service_running(services, &profile.service_name);

    Ok(StatusRecord {
        product: product.display_name,
        running,
        up_to_date,
    })
}
