//! Adapters from the Windows platform crate onto the probe's
//! collaborator traits.

use std::io;

use av_status::probe::{ProductLookup, ProductRecord, ServiceStateQuery};
use av_status::{ProbeError, Result};
use platform_windows::registry::{self, RegistryError};
use platform_windows::service_state;

/// Uninstall-registry lookup backed by `reg.exe`.
pub struct RegistryProductLookup;

impl ProductLookup for RegistryProductLookup {
    fn lookup(&self, uninstall_key: &str) -> Result<ProductRecord> {
        let product = registry::lookup_installed_product(uninstall_key).map_err(|err| match err {
            RegistryError::KeyNotFound(_) | RegistryError::ValueNotFound { .. } => {
                ProbeError::NotInstalled(err.to_string())
            }
            RegistryError::Access(detail) => ProbeError::RegistryAccess(detail),
        })?;

        Ok(ProductRecord {
            display_name: product.display_name,
            install_path: product.install_location.into(),
        })
    }
}

/// Service state text from the Windows service control manager.
pub struct WindowsServiceQuery;

impl ServiceStateQuery for WindowsServiceQuery {
    fn query_state(&self, service_name: &str) -> io::Result<String> {
        service_state::query_service_state(service_name)
    }
}
