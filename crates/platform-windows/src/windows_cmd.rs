//! Canonical Windows system command paths.
//!
//! Using absolute system paths avoids PATH-search hijacking when the
//! probe runs under the management agent's service account.

#[cfg(target_os = "windows")]
pub(crate) const POWERSHELL_EXE: &str =
    r"C:\Windows\System32\WindowsPowerShell\v1.0\powershell.exe";
#[cfg(target_os = "windows")]
pub(crate) const REG_EXE: &str = r"C:\Windows\System32\reg.exe";
