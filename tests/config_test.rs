// tests/config_test.rs
use git_changelog::config::{load_config, Config};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_yaml_from_explicit_path() {
    let mut temp_file = NamedTempFile::with_suffix(".yml").unwrap();
    let yaml_content = r#"
git_path: /srv/repo
ignore: "[skip changelog]"
commit_groups:
  title_maps:
    feat: Features
    fix: Bug Fixes
    breaking: BREAKING
"#;
    temp_file.write_all(yaml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.git_path, "/srv/repo");
    assert_eq!(config.ignore, "[skip changelog]");
    assert_eq!(config.commit_groups.group_title("fix"), "Bug Fixes");
    assert_eq!(config.commit_groups.breaking_title(), "BREAKING");
}

#[test]
fn test_load_toml_from_explicit_path() {
    let mut temp_file = NamedTempFile::with_suffix(".toml").unwrap();
    temp_file
        .write_all(b"ignore = \"WIP\"\n\n[commit_groups.title_maps]\nfeat = \"Features\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.ignore, "WIP");
    assert_eq!(config.git_path, ".");
}

#[test]
fn test_malformed_file_is_rejected() {
    let mut temp_file = NamedTempFile::with_suffix(".yml").unwrap();
    temp_file.write_all(b"commit_groups:\n  title_maps: [").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_discovers_changelog_yml_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".changelog.yml"),
        "commit_groups:\n  title_maps:\n    perf: Performance\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let config = result.unwrap();
    assert_eq!(config.commit_groups.group_title("perf"), "Performance");
}

#[test]
#[serial]
fn test_missing_config_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let original = std::env::current_dir().unwrap();
    let saved: Vec<(&str, Option<std::ffi::OsString>)> = ["HOME", "XDG_CONFIG_HOME"]
        .iter()
        .map(|key| (*key, std::env::var_os(key)))
        .collect();

    std::env::set_var("HOME", home.path());
    std::env::set_var("XDG_CONFIG_HOME", home.path().join(".config"));
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();
    for (key, value) in saved {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }

    let err = result.unwrap_err();
    assert!(err.to_string().contains("no configuration file found"));
}

#[test]
fn test_default_values() {
    let config = Config::default();
    assert_eq!(config.git_path, ".");
    assert!(config.show_author);
    assert!(!config.commit_groups.fold_unconfigured);
}
