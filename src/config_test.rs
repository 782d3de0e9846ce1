use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_is_forest() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.variant, ThemeVariant::Forest);
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.picker_id, DEFAULT_PICKER_ID);
    assert_eq!(cfg.default_theme, ThemeName::from("green"));
    assert_eq!(cfg.palette, ThemeVariant::Forest.palette());
}

#[test]
fn stock_configs_validate() {
    ThemeConfig::for_variant(ThemeVariant::Classic).validate().unwrap();
    ThemeConfig::for_variant(ThemeVariant::Forest).validate().unwrap();
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_matches_default() {
    let cfg = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ThemeConfig::default());
}

#[test]
fn from_json_selects_classic_variant() {
    let cfg = ThemeConfig::from_json(r#"{"variant":"classic"}"#).unwrap();
    assert_eq!(cfg.default_theme, ThemeName::from("blue"));
    assert_eq!(cfg.palette.lookup("green"), Some(&ThemeStyle::new("#66cc33", "#4d9926")));
}

#[test]
fn from_json_applies_overrides() {
    let cfg = ThemeConfig::from_json(
        r##"{
            "storage_key": "siteTheme",
            "picker_id": "colorSelect",
            "default_theme": "purple",
            "themes": { "purple": { "primary": "#800080", "accent": "#4b0082" } }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.storage_key, "siteTheme");
    assert_eq!(cfg.picker_id, "colorSelect");
    assert_eq!(cfg.default_theme, ThemeName::from("purple"));
    assert_eq!(cfg.palette.lookup("purple"), Some(&ThemeStyle::new("#800080", "#4b0082")));
    assert_eq!(cfg.palette.len(), 4);
}

#[test]
fn from_json_allows_default_without_palette_entry() {
    let cfg = ThemeConfig::from_json(r#"{"default_theme":"teal"}"#).unwrap();
    assert!(!cfg.palette.contains("teal"));
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = ThemeConfig::from_json(r#"{"storageKey":"x"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_unknown_variant() {
    let err = ThemeConfig::from_json(r#"{"variant":"sunset"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_empty_storage_key() {
    let err = ThemeConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField { field: "storage_key" }));
}

#[test]
fn from_json_rejects_empty_default_theme() {
    let err = ThemeConfig::from_json(r#"{"default_theme":""}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField { field: "default_theme" }));
}

#[test]
fn from_json_rejects_blank_default_theme() {
    let err = ThemeConfig::from_json(r#"{"default_theme":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField { field: "default_theme" }));
}

#[test]
fn from_json_rejects_unknown_fields_inside_theme_entries() {
    let err = ThemeConfig::from_json(
        r##"{"themes":{"purple":{"primary":"#800080","accent":"#4b0082","acent":"#000000"}}}"##,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_non_hex_colors() {
    let err = ThemeConfig::from_json(r##"{"themes":{"red":{"primary":"red","accent":"#aa0000"}}}"##).unwrap_err();
    match err {
        ConfigError::InvalidColor { theme, field, value } => {
            assert_eq!(theme, "red");
            assert_eq!(field, "primary");
            assert_eq!(value, "red");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_error_messages_name_the_problem() {
    let err = ConfigError::InvalidColor { theme: "red".into(), field: "accent", value: "nope".into() };
    assert_eq!(err.to_string(), "theme \"red\" has invalid accent color \"nope\"");
    let err = ConfigError::EmptyField { field: "picker_id" };
    assert_eq!(err.to_string(), "theme config field picker_id must not be empty");
}

// =============================================================
// from_page_json
// =============================================================

#[test]
fn from_page_json_without_element_is_default() {
    assert_eq!(ThemeConfig::from_page_json(None), ThemeConfig::default());
}

#[test]
fn from_page_json_malformed_document_falls_back_to_default() {
    assert_eq!(ThemeConfig::from_page_json(Some("{bad")), ThemeConfig::default());
    assert_eq!(ThemeConfig::from_page_json(Some("")), ThemeConfig::default());
    assert_eq!(ThemeConfig::from_page_json(Some(r#"{"storage_key":""}"#)), ThemeConfig::default());
}

#[test]
fn from_page_json_uses_valid_document() {
    let cfg = ThemeConfig::from_page_json(Some(r#"{"variant":"classic","picker_id":"colorSelect"}"#));
    assert_eq!(cfg.variant, ThemeVariant::Classic);
    assert_eq!(cfg.picker_id, "colorSelect");
    assert_eq!(cfg.default_theme, ThemeName::from("blue"));
}
