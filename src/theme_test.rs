use super::*;

// =============================================================
// Palette lookup
// =============================================================

#[test]
fn classic_palette_has_exact_pairs() {
    let palette = ThemeVariant::Classic.palette();
    assert_eq!(palette.lookup("blue"), Some(&ThemeStyle::new("#00aaff", "#0077cc")));
    assert_eq!(palette.lookup("orange"), Some(&ThemeStyle::new("#ff6600", "#cc5200")));
    assert_eq!(palette.lookup("green"), Some(&ThemeStyle::new("#66cc33", "#4d9926")));
}

#[test]
fn forest_palette_only_differs_on_green() {
    let classic = ThemeVariant::Classic.palette();
    let forest = ThemeVariant::Forest.palette();
    assert_eq!(forest.lookup("blue"), classic.lookup("blue"));
    assert_eq!(forest.lookup("orange"), classic.lookup("orange"));
    assert_eq!(forest.lookup("green"), Some(&ThemeStyle::new("#123524", "#17442eff")));
}

#[test]
fn lookup_is_case_sensitive_and_misses_unknown_names() {
    let palette = ThemeVariant::Forest.palette();
    assert!(palette.lookup("purple").is_none());
    assert!(palette.lookup("Blue").is_none());
    assert!(palette.lookup("").is_none());
}

#[test]
fn names_preserve_table_order() {
    let palette = ThemeVariant::Classic.palette();
    let names: Vec<&str> = palette.names().map(ThemeName::as_str).collect();
    assert_eq!(names, ["blue", "orange", "green"]);
    assert_eq!(palette.len(), 3);
}

#[test]
fn insert_replaces_existing_entry_in_place() {
    let mut palette = ThemeVariant::Classic.palette();
    palette.insert(ThemeName::from("blue"), ThemeStyle::new("#000000", "#111111"));
    palette.insert(ThemeName::from("purple"), ThemeStyle::new("#800080", "#4b0082"));

    let names: Vec<&str> = palette.names().map(ThemeName::as_str).collect();
    assert_eq!(names, ["blue", "orange", "green", "purple"]);
    assert_eq!(palette.lookup("blue"), Some(&ThemeStyle::new("#000000", "#111111")));
}

#[test]
fn empty_palette_recognizes_nothing() {
    let palette = Palette::new();
    assert!(palette.is_empty());
    assert!(!palette.contains("blue"));
}

// =============================================================
// ThemeVariant
// =============================================================

#[test]
fn variant_defaults() {
    assert_eq!(ThemeVariant::default(), ThemeVariant::Forest);
    assert_eq!(ThemeVariant::Classic.default_theme(), ThemeName::from("blue"));
    assert_eq!(ThemeVariant::Forest.default_theme(), ThemeName::from("green"));
}

#[test]
fn variant_default_theme_is_always_recognized() {
    for variant in [ThemeVariant::Classic, ThemeVariant::Forest] {
        let default = variant.default_theme();
        assert!(variant.palette().contains(default.as_str()));
    }
}

#[test]
fn variant_deserializes_from_lowercase() {
    let variant: ThemeVariant = serde_json::from_str("\"classic\"").unwrap();
    assert_eq!(variant, ThemeVariant::Classic);
    assert!(serde_json::from_str::<ThemeVariant>("\"Classic\"").is_err());
}

// =============================================================
// ThemeName
// =============================================================

#[test]
fn theme_name_serializes_as_plain_string() {
    let name = ThemeName::from("orange");
    assert_eq!(serde_json::to_string(&name).unwrap(), "\"orange\"");
    assert_eq!(name.to_string(), "orange");
}

#[test]
fn theme_style_rejects_unknown_fields() {
    let err = serde_json::from_str::<ThemeStyle>(r##"{"primary":"#111111","accent":"#222222","shade":"#333333"}"##);
    assert!(err.is_err());
}
