//! Windows service state queries.
//!
//! Asks the CIM `Win32_Service` class for the named service's `State`
//! text through PowerShell. Callers decide what to make of the returned
//! state string (`Running`, `Stopped`, `Start Pending`, ...).

use std::io;

#[cfg(target_os = "windows")]
use crate::windows_cmd::POWERSHELL_EXE;
#[cfg(target_os = "windows")]
use std::process::Command;

/// Query the named service's current state text.
///
/// Returns `NotFound` when the service manager has no service under that
/// name, and `Unsupported` on non-Windows hosts.
pub fn query_service_state(service_name: &str) -> io::Result<String> {
    validate_service_name(service_name)?;

    #[cfg(target_os = "windows")]
    {
        let command = format!(
            "Get-CimInstance Win32_Service -Filter \"Name='{service_name}'\" | Select-Object -ExpandProperty State"
        );
        let output = Command::new(POWERSHELL_EXE)
            .args(["-NoProfile", "-NonInteractive", "-Command", &command])
            .output()?;

        if !output.status.success() {
            return Err(io::Error::other(format!(
                "service state query for '{}' exited with {}",
                service_name, output.status
            )));
        }

        let state = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if state.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("service '{service_name}' not found"),
            ));
        }
        Ok(state)
    }
    #[cfg(not(target_os = "windows"))]
    {
        tracing::warn!(
            service = %service_name,
            "service state query is a stub on non-Windows"
        );
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "service state queries are only available on Windows",
        ))
    }
}

/// The name is interpolated into a CIM filter, so quoting and control
/// characters are rejected outright rather than escaped.
fn validate_service_name(service_name: &str) -> io::Result<()> {
    if service_name.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "service name cannot be empty",
        ));
    }

    // The query interpolates the name as-is, so the check must cover the
    // untrimmed string, whitespace at the ends included.
    if service_name
        .chars()
        .any(|ch| matches!(ch, '\r' | '\n' | '\0' | '"' | '\'' | '\\'))
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "service name contains invalid characters",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_service_name;

    #[test]
    fn validate_service_name_rejects_empty_or_quoted_values() {
        assert!(validate_service_name("").is_err());
        assert!(validate_service_name("   ").is_err());
        assert!(validate_service_name("\"quoted\"").is_err());
        assert!(validate_service_name("it's").is_err());
        assert!(validate_service_name("a2AntiMalware").is_ok());
    }

    #[test]
    fn validate_service_name_rejects_control_characters() {
        assert!(validate_service_name("svc\r\n").is_err());
        assert!(validate_service_name("svc\0").is_err());
        assert!(validate_service_name("domain\\svc").is_err());
    }
}
