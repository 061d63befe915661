use std::path::PathBuf;

use av_status::encoding::EncodingProfile;
use av_status::probe::ProductProfile;

/// Runtime settings for one probe invocation, resolved at startup from
/// compiled defaults, then the optional TOML file, then environment
/// overrides. Later sources win.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub product: ProductConfig,
    pub output_path: PathBuf,
    pub max_update_age_secs: u64,
}

/// Identity of the product under watch: its uninstall key plus the names
/// it uses for its settings file and protection service.
#[derive(Debug, Clone)]
pub struct ProductConfig {
    pub uninstall_key: String,
    pub settings_file: String,
    pub update_section: String,
    pub update_key: String,
    pub service_name: String,
}

impl ProbeConfig {
    /// The product profile handed to the probe core.
    pub fn product_profile(&self) -> ProductProfile {
        ProductProfile {
            uninstall_key: self.product.uninstall_key.clone(),
            settings_file: self.product.settings_file.clone(),
            update_section: self.product.update_section.clone(),
            update_key: self.product.update_key.clone(),
            service_name: self.product.service_name.clone(),
            encoding: EncodingProfile::Windows,
        }
    }
}
