use std::io::Write;

use tempfile::NamedTempFile;

use zenspace_core::config::EditorConfig;
use zenspace_core::encoding::ExportFormat;
use zenspace_core::error::ZenspaceError;

#[test]
fn test_defaults_match_constants() {
    let config = EditorConfig::default();
    assert_eq!(config.brush.min_width, 30.0);
    assert_eq!(config.brush.width_divisor, 25.0);
    assert_eq!(config.brush.color, [255, 0, 0]);
    assert_eq!(config.brush.opacity, 0.6);
    assert_eq!(config.export.format, ExportFormat::Jpeg);
    assert_eq!(config.export.quality, 90);
    assert_eq!(config.comparator.default_boundary, 50.0);
    assert_eq!(config.comparator.before_label, "ORIGINAL");
    assert_eq!(config.comparator.after_label, "AI GENERATED");
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(EditorConfig::from_toml_str("").unwrap(), EditorConfig::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = EditorConfig::from_toml_str(
        r#"
        [brush]
        opacity = 0.4

        [export]
        format = "Png"
        "#,
    )
    .unwrap();
    assert_eq!(config.brush.opacity, 0.4);
    assert_eq!(config.brush.min_width, 30.0);
    assert_eq!(config.export.format, ExportFormat::Png);
    assert_eq!(config.export.quality, 90);
    assert_eq!(config.comparator.grab_width, 32.0);
}

#[test]
fn test_toml_round_trip() {
    let mut config = EditorConfig::default();
    config.comparator.after_label = "STAGED".into();
    config.brush.color = [0, 128, 255];
    let text = config.to_toml_string().unwrap();
    assert_eq!(EditorConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_invalid_values_rejected() {
    for text in [
        "[brush]\nopacity = 1.5",
        "[brush]\nmin_width = 0.0",
        "[brush]\nwidth_divisor = -1.0",
        "[export]\nquality = 0",
        "[comparator]\ndefault_boundary = 120.0",
    ] {
        assert!(
            matches!(EditorConfig::from_toml_str(text), Err(ZenspaceError::Config(_))),
            "accepted invalid config: {text}"
        );
    }
}

#[test]
fn test_malformed_toml_is_config_error() {
    assert!(matches!(
        EditorConfig::from_toml_str("[brush\nopacity ="),
        Err(ZenspaceError::Config(_))
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[comparator]\nbefore_label = \"BEFORE\"").unwrap();
    let config = EditorConfig::load(file.path()).unwrap();
    assert_eq!(config.comparator.before_label, "BEFORE");
}
