use super::types::ProbeConfig;
use super::util::{env_non_empty, env_u64};

impl ProbeConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        self.apply_env_product();
        self.apply_env_output();
    }

    fn apply_env_product(&mut self) {
        if let Some(v) = env_non_empty("AVPROBE_UNINSTALL_KEY") {
            self.product.uninstall_key = v;
        }
        if let Some(v) = env_non_empty("AVPROBE_SETTINGS_FILE") {
            self.product.settings_file = v;
        }
        if let Some(v) = env_non_empty("AVPROBE_UPDATE_SECTION") {
            self.product.update_section = v;
        }
        if let Some(v) = env_non_empty("AVPROBE_UPDATE_KEY") {
            self.product.update_key = v;
        }
        if let Some(v) = env_non_empty("AVPROBE_SERVICE_NAME") {
            self.product.service_name = v;
        }
    }

    fn apply_env_output(&mut self) {
        if let Some(v) = env_non_empty("AVPROBE_OUTPUT_PATH") {
            self.output_path = v.into();
        }
        if let Some(v) = env_u64("AVPROBE_MAX_UPDATE_AGE_SECS") {
            self.max_update_age_secs = v;
        }
    }
}
