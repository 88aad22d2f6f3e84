use astrocarto::rendering::{Color, LineCap, LineJoin};
use astrocarto_config::{load_config, load_config_from, parse_config, AstroConfig};
use std::io::Write;

#[test]
fn test_empty_config_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config, AstroConfig::default());
    assert_eq!(config.layer_style.line_width, 3.0);
    assert_eq!(config.layer_style.line_blur, Some(1.0));
}

#[test]
fn test_map_overrides() {
    let config = parse_config(
        r##"
[map]
line_width = 4.5
line_opacity = 0.6
line_blur = 0.0
fallback_color = "#112233"
line_join = "bevel"
line_cap = "square"
"##,
    )
    .unwrap();
    assert_eq!(config.layer_style.line_width, 4.5);
    assert_eq!(config.layer_style.line_opacity, 0.6);
    assert_eq!(config.layer_style.line_blur, None);
    assert_eq!(config.layer_style.fallback_color, Color::rgb(0x11, 0x22, 0x33));
    assert_eq!(config.layer_style.line_join, LineJoin::Bevel);
    assert_eq!(config.layer_style.line_cap, LineCap::Square);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(parse_config("[map]\nline_width = -1.0").is_err());
    assert!(parse_config("[map]\nline_opacity = 1.5").is_err());
    assert!(parse_config("[map]\nfallback_color = \"white\"").is_err());
    assert!(parse_config("[map]\nline_cap = \"pointy\"").is_err());
    assert!(parse_config("[map\n").is_err());
}

#[test]
fn test_load_from_file_records_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[map]\nline_width = 2.0").unwrap();

    let config = load_config_from(file.path()).unwrap();
    assert_eq!(config.layer_style.line_width, 2.0);
    assert_eq!(config.source.as_deref(), Some(file.path()));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config_from(&dir.path().join("nope.toml")).is_err());
}

// The only test that changes the working directory, so both search-path
// cases run in sequence here.
#[test]
fn test_search_path_falls_back_to_defaults() {
    let root = tempfile::tempdir().unwrap();
    let workdir = root.path().join("apps").join("astrocarto");
    std::fs::create_dir_all(&workdir).unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(&workdir).unwrap();

    let defaults = load_config();

    std::fs::create_dir_all(root.path().join("configs")).unwrap();
    std::fs::write(
        root.path().join("configs").join("astrocarto.toml"),
        "[map]\nline_width = 7.0\n",
    )
    .unwrap();
    let found = load_config();

    std::env::set_current_dir(previous).unwrap();

    let defaults = defaults.unwrap();
    assert_eq!(defaults, AstroConfig::default());
    assert!(defaults.source.is_none());

    let found = found.unwrap();
    assert_eq!(found.layer_style.line_width, 7.0);
    assert_eq!(
        found.source.as_deref(),
        Some(std::path::Path::new("../../configs/astrocarto.toml"))
    );
}
