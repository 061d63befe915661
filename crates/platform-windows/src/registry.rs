//! Installed-product lookup via the uninstall registry.
//!
//! Reads a product's per-machine uninstall entry with `reg.exe query`,
//! checking the native 64-bit view first and the WOW6432Node view as a
//! fallback for 32-bit installers.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(target_os = "windows")]
use crate::windows_cmd::REG_EXE;
#[cfg(target_os = "windows")]
use std::process::Command;

#[cfg(target_os = "windows")]
const UNINSTALL_SUBKEY: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall";
#[cfg(target_os = "windows")]
const UNINSTALL_SUBKEY_WOW64: &str =
    r"SOFTWARE\WOW6432Node\Microsoft\Windows\CurrentVersion\Uninstall";

/// Uninstall-entry fields the probe consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledProduct {
    pub display_name: String,
    pub install_location: String,
}

/// Errors from uninstall-entry lookups.
#[derive(Debug)]
pub enum RegistryError {
    /// The uninstall key does not exist in either registry view.
    KeyNotFound(String),
    /// The key exists but a required value is missing or empty.
    ValueNotFound { key: String, value: String },
    /// `reg.exe` could not be spawned or failed for another reason.
    Access(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::KeyNotFound(key) => write!(f, "registry key {key} not found"),
            RegistryError::ValueNotFound { key, value } => {
                write!(f, "registry key {key} has no usable {value} value")
            }
            RegistryError::Access(detail) => write!(f, "registry access failed: {detail}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Look up a product's uninstall entry by its uninstall key name.
pub fn lookup_installed_product(uninstall_key: &str) -> Result<InstalledProduct, RegistryError> {
    #[cfg(target_os = "windows")]
    {
        match read_product_from_view(UNINSTALL_SUBKEY, uninstall_key) {
            Err(RegistryError::KeyNotFound(_)) => {
                read_product_from_view(UNINSTALL_SUBKEY_WOW64, uninstall_key)
            }
            other => other,
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        tracing::warn!(
            uninstall_key = %uninstall_key,
            "uninstall registry lookup is a stub on non-Windows"
        );
        Err(RegistryError::Access(
            "uninstall registry is only available on Windows".to_string(),
        ))
    }
}

#[cfg(target_os = "windows")]
fn read_product_from_view(
    subkey: &str,
    uninstall_key: &str,
) -> Result<InstalledProduct, RegistryError> {
    let full_key = format!(r"HKLM\{subkey}\{uninstall_key}");
    let display_name = read_reg_string(&full_key, "DisplayName")?;
    let install_location = read_reg_string(&full_key, "InstallLocation")?;
    Ok(InstalledProduct {
        display_name,
        install_location,
    })
}

#[cfg(target_os = "windows")]
fn read_reg_string(full_key: &str, value_name: &str) -> Result<String, RegistryError> {
    let output = Command::new(REG_EXE)
        .args(["query", full_key, "/v", value_name])
        .output()
        .map_err(|err| RegistryError::Access(format!("failed to spawn reg.exe: {err}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let detail = if stderr.trim().is_empty() { stdout } else { stderr };
        if is_key_not_found_output(&detail) {
            return Err(RegistryError::KeyNotFound(full_key.to_string()));
        }
        return Err(RegistryError::Access(format!(
            "reg.exe query {} /v {} failed: {}",
            full_key,
            value_name,
            detail.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    match parse_reg_string(&stdout, value_name) {
        Some(value) => Ok(value),
        None => Err(RegistryError::ValueNotFound {
            key: full_key.to_string(),
            value: value_name.to_string(),
        }),
    }
}

/// Check `reg.exe` failure text for the missing-key diagnostic.
#[cfg(any(test, target_os = "windows"))]
fn is_key_not_found_output(output: &str) -> bool {
    output
        .to_ascii_lowercase()
        .contains("unable to find the specified registry key")
}

#[cfg(any(test, target_os = "windows"))]
fn parse_reg_string(output: &str, value_name: &str) -> Option<String> {
    let (_, reg_type, value) = parse_reg_line(output, value_name)?;
    match reg_type.as_str() {
        "REG_SZ" | "REG_EXPAND_SZ" => Some(value.trim().to_string()),
        _ => None,
    }
}

#[cfg(any(test, target_os = "windows"))]
fn parse_reg_line(output: &str, value_name: &str) -> Option<(String, String, String)> {
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let name = parts.next()?;
        if !name.eq_ignore_ascii_case(value_name) {
            continue;
        }

        let reg_type = parts.next()?.to_string();
        let value = parts.collect::<Vec<_>>().join(" ");
        if value.is_empty() {
            continue;
        }
        return Some((name.to_string(), reg_type, value));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{is_key_not_found_output, parse_reg_string};

    #[test]
    fn parses_display_name_value() {
        let output = r#"
HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall\{5502032C-88C1-4303-99FE-B5CBD7684CEA}_is1
    DisplayName    REG_SZ    Emsisoft Anti-Malware
"#;
        assert_eq!(
            parse_reg_string(output, "DisplayName").as_deref(),
            Some("Emsisoft Anti-Malware")
        );
    }

    #[test]
    fn parses_install_location_with_spaces() {
        let output = r#"
HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall\{5502032C-88C1-4303-99FE-B5CBD7684CEA}_is1
    InstallLocation    REG_EXPAND_SZ    C:\Program Files\Emsisoft Anti-Malware\
"#;
        assert_eq!(
            parse_reg_string(output, "InstallLocation").as_deref(),
            Some(r"C:\Program Files\Emsisoft Anti-Malware\")
        );
    }

    #[test]
    fn does_not_match_prefix_only_value_names() {
        let output = r#"
HKEY_LOCAL_MACHINE\SOFTWARE\Test
    DisplayNameShort    REG_SZ    EAM
"#;
        assert_eq!(parse_reg_string(output, "DisplayName"), None);
    }

    #[test]
    fn empty_value_is_treated_as_missing() {
        let output = r#"
HKEY_LOCAL_MACHINE\SOFTWARE\Test
    InstallLocation    REG_SZ
"#;
        assert_eq!(parse_reg_string(output, "InstallLocation"), None);
    }

    #[test]
    fn rejects_non_string_value_types() {
        let output = r#"
HKEY_LOCAL_MACHINE\SOFTWARE\Test
    DisplayName    REG_DWORD    0x1
"#;
        assert_eq!(parse_reg_string(output, "DisplayName"), None);
    }

    #[test]
    fn missing_key_detection_matches_reg_output() {
        assert!(is_key_not_found_output(
            "ERROR: The system was unable to find the specified registry key or value.\r\n"
        ));
        assert!(!is_key_not_found_output("ERROR: Access is denied.\r\n"));
    }
}
