use astrocarto::rendering::style::LayerStyleSettings;
use astrocarto::rendering::{Color, LineCap, LineJoin};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Locations tried, in order, when no explicit path is given
pub const CONFIG_PATHS: [&str; 2] = ["configs/astrocarto.toml", "../../configs/astrocarto.toml"];

#[derive(Debug, Clone, Deserialize)]
struct MapToml {
    #[serde(default = "default_line_width")]
    line_width: f32,
    #[serde(default = "default_line_opacity")]
    line_opacity: f32,
    /// 0 disables the glow
    #[serde(default = "default_line_blur")]
    line_blur: f32,
    #[serde(default = "default_fallback_color")]
    fallback_color: String,
    #[serde(default)]
    line_join: LineJoin,
    #[serde(default)]
    line_cap: LineCap,
}

impl Default for MapToml {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            line_opacity: default_line_opacity(),
            line_blur: default_line_blur(),
            fallback_color: default_fallback_color(),
            line_join: LineJoin::default(),
            line_cap: LineCap::default(),
        }
    }
}

fn default_line_width() -> f32 {
    3.0
}

fn default_line_opacity() -> f32 {
    0.9
}

fn default_line_blur() -> f32 {
    1.0
}

fn default_fallback_color() -> String {
    "#FFFFFF".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    map: MapToml,
}

/// Resolved settings for the whole app
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AstroConfig {
    pub layer_style: LayerStyleSettings,
    /// File the settings came from; `None` when running on defaults
    pub source: Option<PathBuf>,
}

/// Parse config text; missing keys and sections take their defaults
pub fn parse_config(text: &str) -> anyhow::Result<AstroConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse astrocarto config: {e}"))?;
    let map = root.map;

    if !(map.line_width > 0.0 && map.line_width.is_finite()) {
        anyhow::bail!("map.line_width must be a positive number, got {}", map.line_width);
    }
    if !(0.0..=1.0).contains(&map.line_opacity) {
        anyhow::bail!("map.line_opacity must be within 0..=1, got {}", map.line_opacity);
    }
    if !(map.line_blur >= 0.0 && map.line_blur.is_finite()) {
        anyhow::bail!("map.line_blur must be zero or positive, got {}", map.line_blur);
    }
    let fallback_color = Color::from_hex(&map.fallback_color).ok_or_else(|| {
        anyhow::anyhow!(
            "map.fallback_color must be #RRGGBB or #RRGGBBAA, got {:?}",
            map.fallback_color
        )
    })?;

    Ok(AstroConfig {
        layer_style: LayerStyleSettings {
            line_width: map.line_width,
            line_opacity: map.line_opacity,
            line_blur: (map.line_blur > 0.0).then_some(map.line_blur),
            fallback_color,
            line_join: map.line_join,
            line_cap: map.line_cap,
        },
        source: None,
    })
}

/// Load from an explicit file; the file must exist
pub fn load_config_from(path: &Path) -> anyhow::Result<AstroConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    let mut config = parse_config(&text)?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Load from the first of [`CONFIG_PATHS`] that exists, or use defaults
pub fn load_config() -> anyhow::Result<AstroConfig> {
    for p in &CONFIG_PATHS {
        let path = Path::new(p);
        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            return load_config_from(path);
        }
    }
    log::debug!("No config found in {:?}; using defaults", CONFIG_PATHS);
    Ok(AstroConfig::default())
}
