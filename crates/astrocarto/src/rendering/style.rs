use crate::lines::types::{AngleType, Planet};
use crate::rendering::encoding::{dash_pattern, planet_color};
use crate::rendering::primitives::{Color, DashPattern, LineCap, LineJoin};
use serde::Serialize;

/// Fixed visual constants shared by every line layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyleSettings {
    pub line_width: f32,
    pub line_opacity: f32,
    /// Glow radius; `None` draws a crisp line
    pub line_blur: Option<f32>,
    /// Color for planets outside the encoding table
    pub fallback_color: Color,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
}

impl Default for LayerStyleSettings {
    fn default() -> Self {
        Self {
            line_width: 3.0,
            line_opacity: 0.9,
            line_blur: Some(1.0),
            fallback_color: Color::WHITE,
            line_join: LineJoin::Round,
            line_cap: LineCap::Round,
        }
    }
}

/// Paint settings handed to the surface with each line layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub opacity: f32,
    pub blur: Option<f32>,
    pub dash: DashPattern,
    pub join: LineJoin,
    pub cap: LineCap,
}

impl LineStyle {
    /// Color by planet, dash by angle type
    pub fn for_line(planet: &Planet, angle_type: &AngleType, settings: &LayerStyleSettings) -> Self {
        let color = match planet {
            Planet::Other(_) => settings.fallback_color,
            known => planet_color(known),
        };
        Self {
            color,
            width: settings.line_width,
            opacity: settings.line_opacity,
            blur: settings.line_blur,
            dash: dash_pattern(angle_type),
            join: settings.line_join,
            cap: settings.line_cap,
        }
    }
}
