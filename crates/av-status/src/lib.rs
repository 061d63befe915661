//! Core logic for the antivirus status probe.
//!
//! Everything in this crate is host-independent: settings-file decoding
//! and scanning, the signature freshness policy, service-state
//! interpretation, and the status record itself. Host facilities (the
//! uninstall registry, the service manager) enter through the traits in
//! [`probe`], so the whole decision path runs under test with fakes.

pub mod encoding;
pub mod freshness;
pub mod probe;
pub mod settings;
pub mod status;

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort a probe run.
///
/// Service-state failures are deliberately absent: those degrade the
/// running flag to `false` instead of aborting.
#[derive(Debug)]
pub enum ProbeError {
    /// The product's uninstall entry is absent from the registry.
    NotInstalled(String),
    /// The registry could not be read at all.
    RegistryAccess(String),
    /// The settings file does not exist under the install location.
    SettingsNotFound(PathBuf),
    /// The settings file's bytes do not decode as text.
    Decode(String),
    /// End of the settings file before the update section marker.
    SectionNotFound(String),
    /// Update section present, but no key line follows it.
    KeyNotFound(String),
    /// The extracted token is not a usable epoch timestamp.
    InvalidTimestamp(String),
    /// Filesystem errors outside the cases above.
    Io(io::Error),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::NotInstalled(detail) => {
                write!(f, "product is not installed ({detail})")
            }
            ProbeError::RegistryAccess(detail) => {
                write!(f, "failed reading the uninstall registry: {detail}")
            }
            ProbeError::SettingsNotFound(path) => {
                write!(f, "settings file {} does not exist", path.display())
            }
            ProbeError::Decode(detail) => {
                write!(f, "failed decoding settings file: {detail}")
            }
            ProbeError::SectionNotFound(marker) => {
                write!(f, "settings file has no '{marker}' section")
            }
            ProbeError::KeyNotFound(key) => {
                write!(f, "no '{key}' entry after the update section")
            }
            ProbeError::InvalidTimestamp(raw) => {
                write!(f, "last-update value '{raw}' is not an epoch second count")
            }
            ProbeError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProbeError {
    fn from(err: io::Error) -> Self {
        ProbeError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
