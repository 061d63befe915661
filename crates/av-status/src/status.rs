//! The probe's output record and persistence.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// The record the management agent collects. The serialized field names
/// are a wire contract; renaming them breaks the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub product: String,
    pub running: bool,
    pub up_to_date: bool,
}

impl StatusRecord {
    /// Compact JSON, exactly as written to the status file and stdout.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self).map_err(io::Error::from)?;
        Ok(json)
    }

    /// Write the record to `path`, replacing any previous run's output.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
