use super::paths::resolve_config_path;
use super::*;
use std::io::Write;
use std::sync::{Mutex, OnceLock};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_env() {
    let vars = [
        "AVPROBE_CONFIG",
        "AVPROBE_UNINSTALL_KEY",
        "AVPROBE_SETTINGS_FILE",
        "AVPROBE_UPDATE_SECTION",
        "AVPROBE_UPDATE_KEY",
        "AVPROBE_SERVICE_NAME",
        "AVPROBE_OUTPUT_PATH",
        "AVPROBE_MAX_UPDATE_AGE_SECS",
    ];
    for v in vars {
        std::env::remove_var(v);
    }
}

fn temp_config_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "avprobe-config-{}.toml",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    ))
}

#[test]
fn defaults_match_the_monitored_product() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let cfg = ProbeConfig::default();

    assert_eq!(
        cfg.product.uninstall_key,
        "{5502032C-88C1-4303-99FE-B5CBD7684CEA}_is1"
    );
    assert_eq!(cfg.product.settings_file, "a2settings.ini");
    assert_eq!(cfg.product.update_section, "LastUpdated");
    assert_eq!(cfg.product.update_key, "Date");
    assert_eq!(cfg.product.service_name, "a2AntiMalware");
    assert_eq!(cfg.max_update_age_secs, 7200);

    let output = cfg.output_path.display().to_string();
    assert!(output.contains("CentraStage"));
    assert!(output.ends_with("antivirus.json"));
}

#[test]
fn file_config_is_loaded() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config_path();
    let mut f = std::fs::File::create(&path).expect("create file");
    writeln!(
        f,
        "[product]\nuninstall_key=\"{{AAAA-BBBB}}_is1\"\nservice_name=\"OtherGuard\"\n[freshness]\nmax_update_age_secs=600\n[output]\npath=\"/tmp/av-status.json\""
    )
    .expect("write file");

    std::env::set_var("AVPROBE_CONFIG", &path);
    let cfg = ProbeConfig::load().expect("load config");

    assert_eq!(cfg.product.uninstall_key, "{AAAA-BBBB}_is1");
    assert_eq!(cfg.product.service_name, "OtherGuard");
    assert_eq!(cfg.max_update_age_secs, 600);
    assert_eq!(cfg.output_path.display().to_string(), "/tmp/av-status.json");

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn env_overrides_file_config() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config_path();
    let mut f = std::fs::File::create(&path).expect("create file");
    writeln!(f, "[product]\nservice_name=\"FromFile\"").expect("write file");

    std::env::set_var("AVPROBE_CONFIG", &path);
    std::env::set_var("AVPROBE_SERVICE_NAME", "FromEnv");
    std::env::set_var("AVPROBE_MAX_UPDATE_AGE_SECS", "90");
    let cfg = ProbeConfig::load().expect("load config");

    assert_eq!(cfg.product.service_name, "FromEnv");
    assert_eq!(cfg.max_update_age_secs, 90);

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn blank_or_invalid_env_values_are_ignored() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    std::env::set_var("AVPROBE_SERVICE_NAME", "   ");
    std::env::set_var("AVPROBE_MAX_UPDATE_AGE_SECS", "soon");
    let cfg = ProbeConfig::load().expect("load config");

    assert_eq!(cfg.product.service_name, "a2AntiMalware");
    assert_eq!(cfg.max_update_age_secs, 7200);

    clear_env();
}

#[test]
fn partial_file_config_keeps_other_defaults() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config_path();
    let mut f = std::fs::File::create(&path).expect("create file");
    writeln!(f, "[product]\nupdate_section=\"SignatureInfo\"").expect("write file");

    std::env::set_var("AVPROBE_CONFIG", &path);
    let cfg = ProbeConfig::load().expect("load config");

    assert_eq!(cfg.product.update_section, "SignatureInfo");
    assert_eq!(cfg.product.update_key, "Date");
    assert_eq!(cfg.product.service_name, "a2AntiMalware");

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn configured_config_path_must_exist() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    std::env::set_var("AVPROBE_CONFIG", "/nonexistent/avprobe.conf");
    assert!(resolve_config_path().is_err());
    assert!(ProbeConfig::load().is_err());

    clear_env();
}

#[test]
fn env_config_path_wins_when_it_exists() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config_path();
    std::fs::File::create(&path).expect("create file");

    std::env::set_var("AVPROBE_CONFIG", &path);
    let resolved = resolve_config_path().expect("resolve").expect("some path");
    assert_eq!(resolved, path);

    clear_env();
    let _ = std::fs::remove_file(path);
}
