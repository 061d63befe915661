//! Last-update extraction from the product's settings file.
//!
//! The file is INI-like, `[Section]` headers over `Key=Value` lines. The
//! scan is forward-only and substring-based: the first line containing
//! the section marker opens the section, and the first later line with
//! the key prefix supplies the value. Earlier key lines never count.

use std::fs;
use std::io;
use std::path::Path;

use crate::encoding::{decode_text, EncodingProfile};
use crate::{ProbeError, Result};

/// Read the settings file at `path` and pull out the raw update token.
pub fn extract_last_update(
    path: &Path,
    profile: EncodingProfile,
    section_marker: &str,
    key: &str,
) -> Result<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ProbeError::SettingsNotFound(path.to_path_buf()));
        }
        Err(err) => return Err(ProbeError::Io(err)),
    };

    let text = decode_text(&bytes, profile).map_err(ProbeError::Decode)?;
    scan_last_update(&text, section_marker, key)
}

/// Scan decoded settings text for the update token.
///
/// Returns everything after the first `=` of the matching key line,
/// verbatim.
pub fn scan_last_update(text: &str, section_marker: &str, key: &str) -> Result<String> {
    let key_prefix = format!("{key}=");
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        if !line.contains(section_marker) {
            continue;
        }
        for line in lines.by_ref() {
            if let Some(value) = line.strip_prefix(&key_prefix) {
                return Ok(value.to_string());
            }
        }
        return Err(ProbeError::KeyNotFound(key.to_string()));
    }

    Err(ProbeError::SectionNotFound(section_marker.to_string()))
}
