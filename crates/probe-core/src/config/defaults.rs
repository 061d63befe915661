use std::path::PathBuf;

use super::constants::{
    DEFAULT_MAX_UPDATE_AGE_SECS, DEFAULT_SERVICE_NAME, DEFAULT_SETTINGS_FILE,
    DEFAULT_UNINSTALL_KEY, DEFAULT_UPDATE_KEY, DEFAULT_UPDATE_SECTION,
};
use super::types::{ProbeConfig, ProductConfig};

/// The management agent's data directory lives under `%ProgramData%`;
/// the environment variable is authoritative, with the stock install
/// path as fallback.
#[cfg(target_os = "windows")]
fn default_output_path() -> PathBuf {
    use super::constants::OUTPUT_RELATIVE_PATH;

    let program_data =
        std::env::var("ProgramData").unwrap_or_else(|_| r"C:\ProgramData".to_string());
    PathBuf::from(program_data).join(OUTPUT_RELATIVE_PATH)
}

#[cfg(not(target_os = "windows"))]
fn default_output_path() -> PathBuf {
    PathBuf::from(super::constants::DEFAULT_OUTPUT_PATH)
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            product: ProductConfig {
                uninstall_key: DEFAULT_UNINSTALL_KEY.to_string(),
                settings_file: DEFAULT_SETTINGS_FILE.to_string(),
                update_section: DEFAULT_UPDATE_SECTION.to_string(),
                update_key: DEFAULT_UPDATE_KEY.to_string(),
                service_name: DEFAULT_SERVICE_NAME.to_string(),
            },
            output_path: default_output_path(),
            max_update_age_secs: DEFAULT_MAX_UPDATE_AGE_SECS,
        }
    }
}
