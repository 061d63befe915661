//! Windows host collaborators for the antivirus probe.
//!
//! Wraps the uninstall registry and the service control manager behind
//! small query functions. Non-Windows builds compile the same API but
//! every query reports the platform as unsupported; the pure parsing
//! helpers stay available to tests on any host.

pub mod registry;
pub mod service_state;

mod windows_cmd;

pub use registry::{lookup_installed_product, InstalledProduct, RegistryError};
pub use service_state::query_service_state;
