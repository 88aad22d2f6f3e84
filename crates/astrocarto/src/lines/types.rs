use serde::{Deserialize, Serialize};
use std::fmt;

/// Longitude/latitude pair in degrees, serialized as `[lng, lat]`
pub type Coordinate = (f64, f64);

/// Birth data used as generator input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Local time, `HH:MM`
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Planets that get their own line on the map
///
/// Names read back from storage that do not match a known planet are kept
/// verbatim in `Other` so they can still be keyed and drawn with a fallback
/// color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Planet {
    Sun,
    Moon,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Other(String),
}

impl Planet {
    /// Fixed planet ordering; position doubles as the generator phase index
    pub const CORE: [Planet; 6] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    /// Position in [`Planet::CORE`], `None` for unknown planets
    pub fn index(&self) -> Option<usize> {
        match self {
            Planet::Sun => Some(0),
            Planet::Moon => Some(1),
            Planet::Venus => Some(2),
            Planet::Mars => Some(3),
            Planet::Jupiter => Some(4),
            Planet::Saturn => Some(5),
            Planet::Other(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Other(name) => name,
        }
    }
}

impl From<&str> for Planet {
    fn from(name: &str) -> Self {
        match name {
            "Sun" => Planet::Sun,
            "Moon" => Planet::Moon,
            "Venus" => Planet::Venus,
            "Mars" => Planet::Mars,
            "Jupiter" => Planet::Jupiter,
            "Saturn" => Planet::Saturn,
            other => Planet::Other(other.to_string()),
        }
    }
}

impl From<String> for Planet {
    fn from(name: String) -> Self {
        Planet::from(name.as_str())
    }
}

impl From<Planet> for String {
    fn from(planet: Planet) -> Self {
        planet.name().to_string()
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Astrological angle a line represents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AngleType {
    Conjunction,
    Opposition,
    Rising,
    Setting,
    Mc,
    Ic,
    Other(String),
}

impl AngleType {
    /// Every angle type the legend describes
    pub const ALL: [AngleType; 6] = [
        AngleType::Conjunction,
        AngleType::Opposition,
        AngleType::Rising,
        AngleType::Setting,
        AngleType::Mc,
        AngleType::Ic,
    ];

    pub fn name(&self) -> &str {
        match self {
            AngleType::Conjunction => "Conjunction",
            AngleType::Opposition => "Opposition",
            AngleType::Rising => "Rising",
            AngleType::Setting => "Setting",
            AngleType::Mc => "MC",
            AngleType::Ic => "IC",
            AngleType::Other(name) => name,
        }
    }
}

impl From<&str> for AngleType {
    fn from(name: &str) -> Self {
        match name {
            "Conjunction" => AngleType::Conjunction,
            "Opposition" => AngleType::Opposition,
            "Rising" => AngleType::Rising,
            "Setting" => AngleType::Setting,
            "MC" => AngleType::Mc,
            "IC" => AngleType::Ic,
            other => AngleType::Other(other.to_string()),
        }
    }
}

impl From<String> for AngleType {
    fn from(name: String) -> Self {
        AngleType::from(name.as_str())
    }
}

impl From<AngleType> for String {
    fn from(angle: AngleType) -> Self {
        angle.name().to_string()
    }
}

impl fmt::Display for AngleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A path on the globe for one planet and one angle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryLine {
    pub planet: Planet,
    pub angle_type: AngleType,
    pub coordinates: Vec<Coordinate>,
}

impl PlanetaryLine {
    /// Stable id used for both the map resource and the registry entry
    pub fn key(&self) -> String {
        line_key(&self.planet, &self.angle_type)
    }

    /// A line needs at least two points to be drawn
    pub fn is_renderable(&self) -> bool {
        self.coordinates.len() > 1
    }
}

/// `line-{planet}-{angleType}`
pub fn line_key(planet: &Planet, angle_type: &AngleType) -> String {
    format!("line-{}-{}", planet, angle_type)
}
