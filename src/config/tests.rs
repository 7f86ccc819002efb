//! Configuration unit tests.

use std::path::PathBuf;

use hexfont_core::DecodeMode;
use tempfile::TempDir;

use super::*;

/// Config path inside a fresh temp dir; the dir is removed when dropped.
fn temp_config() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("hexfont").join("config.toml");
    (dir, path)
}

#[test]
fn default_config_roundtrip() {
    let cfg = Config::default();
    let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
    let parsed: Config = toml::from_str(&toml_str).expect("deserialize");
    assert_eq!(parsed, cfg);
    assert!(parsed.font.token.is_none());
    assert!(!parsed.font.strict_decode);
    assert_eq!(parsed.editor.first_char, 'P');
    assert!(parsed.editor.uppercase);
    assert_eq!(parsed.preview.text, "HELLO WORLD!");
    assert!((parsed.preview.scale - 0.5).abs() < f32::EPSILON);
    assert!((parsed.preview.hex_size - 20.0).abs() < f32::EPSILON);
}

#[test]
fn partial_toml_uses_defaults() {
    let toml_str = r#"
[font]
token = "A4zsox"
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(parsed.font.token.as_deref(), Some("A4zsox"));
    // Other fields should be defaults
    assert_eq!(parsed.editor, EditorConfig::default());
    assert_eq!(parsed.preview, PreviewConfig::default());
}

#[test]
fn empty_toml_gives_defaults() {
    let parsed: Config = toml::from_str("").expect("deserialize");
    assert_eq!(parsed, Config::default());
}

#[test]
fn first_char_from_toml() {
    let toml_str = r#"
[editor]
first_char = "Q"
uppercase = false
"#;
    let parsed: Config = toml::from_str(toml_str).expect("deserialize");
    assert_eq!(parsed.editor.first_char, 'Q');
    assert!(!parsed.editor.uppercase);
}

#[test]
fn decode_mode_follows_strict_flag() {
    let mut font = FontConfig::default();
    assert_eq!(font.decode_mode(), DecodeMode::Lenient);
    font.strict_decode = true;
    assert_eq!(font.decode_mode(), DecodeMode::Strict);
}

#[test]
fn preview_scale_is_clamped() {
    let mut preview = PreviewConfig::default();
    preview.scale = 5.0;
    assert!((preview.effective_scale() - MAX_PREVIEW_SCALE).abs() < f32::EPSILON);
    preview.scale = 0.0;
    assert!((preview.effective_scale() - MIN_PREVIEW_SCALE).abs() < f32::EPSILON);
    preview.scale = 1.3;
    assert!((preview.effective_scale() - 1.3).abs() < f32::EPSILON);
}

#[test]
fn non_finite_preview_values_fall_back() {
    let parsed: Config = toml::from_str("[preview]\nscale = nan\nhex_size = inf\n")
        .expect("deserialize");
    assert!(parsed.preview.scale.is_nan());
    assert!((parsed.preview.effective_scale() - 0.5).abs() < f32::EPSILON);
    assert!((parsed.preview.effective_hex_size() - 20.0).abs() < f32::EPSILON);

    let mut preview = PreviewConfig::default();
    preview.scale = f32::INFINITY;
    assert!((preview.effective_scale() - 0.5).abs() < f32::EPSILON);
    preview.hex_size = f32::NAN;
    assert!((preview.effective_hex_size() - 20.0).abs() < f32::EPSILON);
}

#[test]
fn non_positive_hex_size_falls_back() {
    let mut preview = PreviewConfig::default();
    preview.hex_size = -3.0;
    assert!((preview.effective_hex_size() - 20.0).abs() < f32::EPSILON);
    preview.hex_size = 8.0;
    assert!((preview.effective_hex_size() - 8.0).abs() < f32::EPSILON);
}

#[test]
fn config_dir_is_named_for_app() {
    let dir = config_dir();
    assert!(dir.ends_with("hexfont"));
    assert!(dir.parent().is_some_and(|base| !base.as_os_str().is_empty()));
}

#[test]
fn config_path_ends_with_file_name() {
    let path = config_path();
    assert!(path.ends_with("hexfont/config.toml"));
}

#[test]
fn save_then_load_roundtrip() {
    let (_dir, path) = temp_config();
    let mut cfg = Config::default();
    cfg.font.token = Some("A4zsox,B0".to_owned());
    cfg.preview.text = "HI".to_owned();

    cfg.save_to(&path).expect("save");
    let loaded = Config::try_load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_gives_defaults() {
    let (_dir, path) = temp_config();
    assert_eq!(Config::load_from(&path), Config::default());
    assert!(matches!(
        Config::try_load_from(&path),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn unparseable_file_gives_defaults() {
    let (_dir, path) = temp_config();
    std::fs::create_dir_all(path.parent().expect("has parent")).expect("mkdir");
    std::fs::write(&path, "[font\ntoken = ").expect("write");

    assert_eq!(Config::load_from(&path), Config::default());
    assert!(matches!(
        Config::try_load_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}
