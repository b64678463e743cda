use super::*;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_allow_overwrite_warns() {
    let mut config = Config::default();
    config.registry.allow_overwrite = true;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.path == "registry.allow_overwrite"));
}

#[test]
fn test_validate_level_directives() {
    let mut config = Config::default();
    for level in [
        "debug",
        "WARN",
        "dsreg_core",
        "dsreg_core=trace,info",
        "dsreg_core[register]=debug",
        "dsreg=off,",
    ] {
        config.logging.level = level.to_string();
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid(), "{}: {:?}", level, result.errors);
    }
}

#[test]
fn test_validate_invalid_level() {
    let mut config = Config::default();
    config.logging.level = "info,dsreg_core=verbose".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "logging.level");
    assert!(result.errors[0].message.contains("dsreg_core=verbose"));
}

#[test]
fn test_validate_empty_level() {
    let mut config = Config::default();
    config.logging.level = "  ".to_string();
    assert!(!ConfigValidator::validate(&config).is_valid());
}

#[test]
fn test_validate_empty_log_dir() {
    let mut config = Config::default();
    config.logging.log_dir = Some(String::new());

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "logging.log_dir"));
}

#[test]
fn test_validate_zero_max_log_files() {
    let mut config = Config::default();
    config.logging.log_dir = Some("/tmp/dsreg".to_string());
    config.logging.max_log_files = 0;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "logging.max_log_files"));
}

#[test]
fn test_into_result() {
    let mut config = Config::default();
    config.registry.allow_overwrite = true;
    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert_eq!(warnings.len(), 1);

    config.logging.level = "dsreg=loud".to_string();
    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    assert!(err.to_string().contains("logging.level"));
}
