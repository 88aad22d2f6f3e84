use crate::lines::types::{AngleType, Planet};
use crate::rendering::encoding::{
    angle_description, dash_pattern, narrative, planet_color, planet_description,
};
use crate::rendering::primitives::{Color, DashPattern};
use serde::Serialize;
use std::fmt::Write;

/// Swatch width in legend units
pub const SWATCH_WIDTH: f32 = 24.0;

/// Width of the text swatch in characters
const SWATCH_CELLS: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub struct PlanetLegendEntry {
    pub planet: Planet,
    pub color: Color,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AngleLegendEntry {
    pub angle_type: AngleType,
    pub dash: DashPattern,
    /// Stroke segments of the swatch across [`SWATCH_WIDTH`]
    pub swatch: Vec<(f32, f32)>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinationLegendEntry {
    pub planet: Planet,
    pub angle_type: AngleType,
    pub narrative: String,
}

/// Static reference for reading the map
///
/// Built only from the encoding tables; never looks at live map state.
#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub title: &'static str,
    pub intro: &'static str,
    pub planets: Vec<PlanetLegendEntry>,
    pub angles: Vec<AngleLegendEntry>,
    pub combinations: Vec<CombinationLegendEntry>,
}

impl Legend {
    pub fn new() -> Self {
        let planets = Planet::CORE
            .iter()
            .map(|planet| PlanetLegendEntry {
                planet: planet.clone(),
                color: planet_color(planet),
                description: planet_description(planet),
            })
            .collect();

        let angles = AngleType::ALL
            .iter()
            .map(|angle_type| {
                let dash = dash_pattern(angle_type);
                AngleLegendEntry {
                    angle_type: angle_type.clone(),
                    dash,
                    swatch: dash.segments(SWATCH_WIDTH, 2.0),
                    description: angle_description(angle_type),
                }
            })
            .collect();

        let mut combinations = Vec::with_capacity(Planet::CORE.len() * AngleType::ALL.len());
        for planet in Planet::CORE.iter() {
            for angle_type in AngleType::ALL.iter() {
                combinations.push(CombinationLegendEntry {
                    planet: planet.clone(),
                    angle_type: angle_type.clone(),
                    narrative: narrative(planet, angle_type),
                });
            }
        }

        Self {
            title: "Understanding Your Astrocartography Map",
            intro: "Your map shows planetary lines that represent different energies and \
                    influences based on your birth chart. These lines indicate where \
                    particular planetary energies are strongest on Earth.",
            planets,
            angles,
            combinations,
        }
    }

    /// The legend only accompanies a map that has lines on it
    pub fn for_lines(has_lines: bool) -> Option<Self> {
        has_lines.then(Self::new)
    }

    /// Plain-text rendering for terminals
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", self.title);
        let _ = writeln!(out, "{}\n", self.intro);

        let _ = writeln!(out, "Planetary Energies");
        for entry in &self.planets {
            let _ = writeln!(
                out,
                "  {}  {:<8} {}",
                entry.color.to_hex(),
                entry.planet,
                entry.description
            );
        }

        let _ = writeln!(out, "\nLine Types");
        for entry in &self.angles {
            let _ = writeln!(
                out,
                "  [{}]  {:<12} {}",
                entry.dash.swatch_text(SWATCH_CELLS),
                entry.angle_type,
                entry.description
            );
        }

        let _ = writeln!(out, "\nCombinations");
        for entry in &self.combinations {
            let _ = writeln!(
                out,
                "  {} / {}: {}",
                entry.planet, entry.angle_type, entry.narrative
            );
        }
        out
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new()
    }
}
