pub(super) const DEFAULT_UNINSTALL_KEY: &str = "{5502032C-88C1-4303-99FE-B5CBD7684CEA}_is1";
pub(super) const DEFAULT_SETTINGS_FILE: &str = "a2settings.ini";
pub(super) const DEFAULT_UPDATE_SECTION: &str = "LastUpdated";
pub(super) const DEFAULT_UPDATE_KEY: &str = "Date";
pub(super) const DEFAULT_SERVICE_NAME: &str = "a2AntiMalware";
pub(super) const DEFAULT_MAX_UPDATE_AGE_SECS: u64 = 2 * 60 * 60;

#[cfg(target_os = "windows")]
pub(super) const CONFIG_CANDIDATES: [&str; 2] =
    [r"C:\ProgramData\avprobe\avprobe.conf", r".\avprobe.conf"];

#[cfg(not(target_os = "windows"))]
pub(super) const CONFIG_CANDIDATES: [&str; 2] = ["/etc/avprobe/avprobe.conf", "./avprobe.conf"];

#[cfg(target_os = "windows")]
pub(super) const OUTPUT_RELATIVE_PATH: &str = r"CentraStage\AEMAgent\antivirus.json";

#[cfg(not(target_os = "windows"))]
pub(super) const DEFAULT_OUTPUT_PATH: &str = "/var/lib/CentraStage/AEMAgent/antivirus.json";
