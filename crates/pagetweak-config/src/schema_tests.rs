use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.classifier.font_step_px, 2);
    assert_eq!(config.executor.min_font_size_px, 8.0);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file);
}

#[test]
fn test_classifier_config_default() {
    let classifier = ClassifierConfig::default();
    assert_eq!(classifier.font_step_px, 2);
    assert_eq!(classifier.line_height_increase, 1.5);
    assert_eq!(classifier.line_height_decrease, 1.2);
}

#[test]
fn test_executor_block_ids() {
    let executor = ExecutorConfig::default();
    assert_eq!(executor.high_contrast_block_id(), "pagetweak-high-contrast");
    assert_eq!(executor.dark_mode_block_id(), "pagetweak-dark-mode");
}

#[test]
fn test_executor_block_ids_follow_prefix() {
    let executor = ExecutorConfig {
        style_id_prefix: "a11y-".to_string(),
        ..Default::default()
    };
    assert_eq!(executor.high_contrast_block_id(), "a11y-high-contrast");
    assert_eq!(executor.dark_mode_block_id(), "a11y-dark-mode");
}

#[test]
fn test_logging_config_default() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.directory, "~/.pagetweak/logs");
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("pagetweak-"));
    assert!(json.contains("font_step_px"));
}

#[test]
fn test_partial_section_keeps_defaults() {
    let config: Config = toml::from_str(
        r#"
        [executor]
        min_font_size_px = 10.0
        "#,
    )
    .unwrap();
    assert_eq!(config.executor.min_font_size_px, 10.0);
    assert_eq!(config.executor.style_id_prefix, "pagetweak-");
    assert_eq!(config.classifier, ClassifierConfig::default());
}
