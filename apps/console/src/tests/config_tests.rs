use super::{load_settings_from, normalize_base_url, Settings};

use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

fn temp_settings_file(tag: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("business_console_{tag}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("console.toml");
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(Path::new("/nonexistent/console.toml"), env_from(&[]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        "file",
        "base_url = \"http://directory.local:8080\"\nper_page = 25\n",
    );

    let settings = load_settings_from(&path, env_from(&[]));

    assert_eq!(settings.base_url, "http://directory.local:8080");
    assert_eq!(settings.per_page, 25);
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let path = temp_settings_file("env", "base_url = \"http://from-file\"\n");

    let settings = load_settings_from(
        &path,
        env_from(&[
            ("BUSINESS_API_URL", "http://from-env"),
            ("APP__BASE_URL", "http://from-app-env"),
            ("APP__PER_PAGE", "5"),
        ]),
    );

    assert_eq!(settings.base_url, "http://from-app-env");
    assert_eq!(settings.per_page, 5);
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn malformed_file_and_env_values_are_ignored() {
    let path = temp_settings_file("malformed", "per_page = \"many\"\n");

    let settings = load_settings_from(&path, env_from(&[("APP__PER_PAGE", "lots")]));

    assert_eq!(settings, Settings::default());
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn base_url_is_trimmed_and_validated() {
    assert_eq!(
        normalize_base_url("  http://127.0.0.1:5000/ ").expect("url"),
        "http://127.0.0.1:5000"
    );
    assert_eq!(
        normalize_base_url("").expect("default"),
        Settings::default().base_url
    );
    assert!(normalize_base_url("not a url").is_err());
    assert!(normalize_base_url("ftp://example.com").is_err());
}
