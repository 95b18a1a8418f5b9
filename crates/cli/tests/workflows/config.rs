//! Config command workflows

use crate::common::TestEnv;
use crate::reflect;
use anyhow::Result;

#[test]
fn test_set_get_debounce() -> Result<()> {
    let env = TestEnv::new();

    let default = reflect!(&env, "config", "--get", "filter.debounce_ms").assert_success()?;
    assert_eq!(default.stdout.trim(), "1000");

    reflect!(&env, "config", "--set", "filter.debounce_ms", "250").assert_success()?;
    let updated = reflect!(&env, "config", "--get", "filter.debounce_ms").assert_success()?;
    assert_eq!(updated.stdout.trim(), "250");
    assert!(env.config_path().exists());

    let status = reflect!(&env, "status").assert_success()?;
    assert!(status.contains_stdout("Debounce:      250 ms"));
    Ok(())
}

#[test]
fn test_set_rejects_out_of_range() -> Result<()> {
    let env = TestEnv::new();
    let result = reflect!(&env, "config", "--set", "filter.debounce_ms", "999999").assert_failure()?;
    assert!(result.contains_stderr("Invalid configuration value"));
    assert!(!env.config_path().exists());
    Ok(())
}

#[test]
fn test_unknown_key() -> Result<()> {
    let env = TestEnv::new();
    let result = reflect!(&env, "config", "--get", "daemon.interval").assert_failure()?;
    assert!(result.contains_stderr("Unknown config key"));
    Ok(())
}

#[test]
fn test_data_dir_from_config() -> Result<()> {
    let env = TestEnv::new();
    let configured = env.root().join("elsewhere");
    let configured_str = configured.display().to_string();

    reflect!(&env, "config", "--set", "store.data_dir", &configured_str).assert_success()?;

    let mut add = reflect!(&env, "add", "note", "moved");
    add.env_remove("REFLECT_DATA_DIR");
    add.assert_success()?;
    assert!(configured.exists());
    Ok(())
}

#[test]
fn test_path_create() -> Result<()> {
    let env = TestEnv::new();
    let path = reflect!(&env, "config", "--path").assert_success()?;
    assert!(path.contains_stdout("does not exist"));

    reflect!(&env, "config", "--path", "--create").assert_success()?;
    assert!(env.config_path().exists());
    Ok(())
}
