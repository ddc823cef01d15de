use voxnote::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_default_config_when_created_then_filter_targets_crate() {
    let config = TracingConfig::default();
    assert!(config.default_filter.contains("voxnote=debug"));
}

#[test]
fn given_app_environment_when_building_config_then_environment_matches_settings_variable() {
    let config = TracingConfig::from_lookup(|key| match key {
        "APP_ENVIRONMENT" => Some("prod".to_string()),
        "LOG_FORMAT" => Some("JSON".to_string()),
        _ => None,
    });

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
}

#[test]
fn given_only_legacy_app_env_when_building_config_then_it_is_ignored() {
    let config = TracingConfig::from_lookup(|key| match key {
        "APP_ENV" => Some("prod".to_string()),
        _ => None,
    });

    assert_eq!(config.environment, "local");
    assert!(!config.json_format);
}
