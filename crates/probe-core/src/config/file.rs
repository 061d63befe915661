use anyhow::{Context, Result};
use serde::Deserialize;

use super::paths::resolve_config_path;
use super::types::ProbeConfig;
use super::util::non_empty;

impl ProbeConfig {
    pub(super) fn apply_file_config(&mut self) -> Result<bool> {
        let path = resolve_config_path()?;
        let Some(path) = path else {
            return Ok(false);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;

        self.apply_file_product(file_cfg.product);
        self.apply_file_freshness(file_cfg.freshness);
        self.apply_file_output(file_cfg.output);

        Ok(true)
    }

    fn apply_file_product(&mut self, product: Option<FileProductConfig>) {
        let Some(product) = product else {
            return;
        };

        if let Some(v) = non_empty(product.uninstall_key) {
            self.product.uninstall_key = v;
        }
        if let Some(v) = non_empty(product.settings_file) {
            self.product.settings_file = v;
        }
        if let Some(v) = non_empty(product.update_section) {
            self.product.update_section = v;
        }
        if let Some(v) = non_empty(product.update_key) {
            self.product.update_key = v;
        }
        if let Some(v) = non_empty(product.service_name) {
            self.product.service_name = v;
        }
    }

    fn apply_file_freshness(&mut self, freshness: Option<FileFreshnessConfig>) {
        let Some(freshness) = freshness else {
            return;
        };

        if let Some(v) = freshness.max_update_age_secs {
            self.max_update_age_secs = v;
        }
    }

    fn apply_file_output(&mut self, output: Option<FileOutputConfig>) {
        let Some(output) = output else {
            return;
        };

        if let Some(v) = non_empty(output.path) {
            self.output_path = v.into();
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    product: Option<FileProductConfig>,
    freshness: Option<FileFreshnessConfig>,
    output: Option<FileOutputConfig>,
}

#[derive(Debug, Deserialize)]
struct FileProductConfig {
    uninstall_key: Option<String>,
    settings_file: Option<String>,
    update_section: Option<String>,
    update_key: Option<String>,
    service_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileFreshnessConfig {
    max_update_age_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FileOutputConfig {
    path: Option<String>,
}
