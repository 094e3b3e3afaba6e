use loupe_core::config::WidgetConfig;
use loupe_core::error::LoupeError;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let c = WidgetConfig::default();
    assert_eq!(c.zoom_transition_ms, 300);
    assert!(c.display_map);
    assert_eq!(c.map_border_color, "grey");
    assert_eq!(c.map_scale_factor, 0.2);
    assert!(c.validate().is_ok());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let c = WidgetConfig::from_toml_str("map_border_color = \"darkgoldenrod\"\n").unwrap();
    assert_eq!(c.map_border_color, "darkgoldenrod");
    assert_eq!(c.zoom_transition_ms, 300);
    assert!(c.display_map);
}

#[test]
fn test_save_and_load() {
    let config = WidgetConfig {
        zoom_transition_ms: 150,
        display_map: false,
        map_border_color: "#336699".into(),
        map_scale_factor: 0.25,
    };
    let file = NamedTempFile::new().unwrap();
    config.save(file.path()).unwrap();
    let loaded = WidgetConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_scale_factor_out_of_range_rejected() {
    for bad in [0.0, -0.2, 1.5, f64::NAN] {
        let c = WidgetConfig {
            map_scale_factor: bad,
            ..WidgetConfig::default()
        };
        assert!(
            matches!(c.validate(), Err(LoupeError::InvalidConfig(_))),
            "{bad} accepted"
        );
    }
}

#[test]
fn test_empty_border_color_rejected() {
    let err = WidgetConfig::from_toml_str("map_border_color = \"  \"\n").unwrap_err();
    assert!(matches!(err, LoupeError::InvalidConfig(_)));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = WidgetConfig::from_toml_str("zoom_transition_ms = \"slow\"").unwrap_err();
    assert!(matches!(err, LoupeError::ConfigParse(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = WidgetConfig::load(std::path::Path::new("/nonexistent/loupe.toml")).unwrap_err();
    assert!(matches!(err, LoupeError::Io(_)));
}
