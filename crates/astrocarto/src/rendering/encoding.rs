//! Fixed visual and descriptive tables for planets and angle types.
//!
//! Every lookup is total: unknown planets and angle types land in an
//! explicit `Other` arm with a documented fallback.

use crate::lines::types::{AngleType, Planet};
use crate::rendering::primitives::{Color, DashPattern};

/// Line color for a planet, white for planets outside the core set
pub fn planet_color(planet: &Planet) -> Color {
    match planet {
        Planet::Sun => Color::rgb(0xFF, 0xD7, 0x00),     // gold
        Planet::Moon => Color::rgb(0xC0, 0xC0, 0xC0),    // silver
        Planet::Venus => Color::rgb(0x00, 0xFF, 0x00),   // green
        Planet::Mars => Color::rgb(0xFF, 0x00, 0x00),    // red
        Planet::Jupiter => Color::rgb(0x4B, 0x00, 0x82), // indigo
        Planet::Saturn => Color::rgb(0x80, 0x00, 0x00),  // maroon
        Planet::Other(_) => Color::WHITE,
    }
}

pub fn planet_description(planet: &Planet) -> &'static str {
    match planet {
        Planet::Sun => "Career, success, vitality, recognition",
        Planet::Moon => "Emotions, comfort, home, intuition",
        Planet::Venus => "Love, beauty, pleasure, relationships",
        Planet::Mars => "Energy, passion, drive, initiative",
        Planet::Jupiter => "Expansion, abundance, wisdom, growth",
        Planet::Saturn => "Structure, discipline, responsibility, lessons",
        Planet::Other(_) => "An additional body plotted on your map",
    }
}

/// Dash pattern for an angle type
///
/// Angle types without a wired pattern draw solid.
pub fn dash_pattern(angle_type: &AngleType) -> DashPattern {
    match angle_type {
        AngleType::Conjunction => DashPattern::SOLID,
        AngleType::Opposition => DashPattern(&[4.0, 2.0]),
        AngleType::Rising => DashPattern(&[2.0, 2.0]),
        AngleType::Setting => DashPattern(&[0.5, 2.0]),
        AngleType::Mc => DashPattern(&[6.0, 2.0, 1.0, 2.0]),
        AngleType::Ic => DashPattern(&[1.0, 1.0]),
        AngleType::Other(_) => DashPattern::SOLID,
    }
}

pub fn angle_description(angle_type: &AngleType) -> &'static str {
    match angle_type {
        AngleType::Conjunction => "Areas where the planet's energy is strongly expressed",
        AngleType::Opposition => "Areas of tension requiring balance and integration",
        AngleType::Rising => "Where the planet was rising at your birth",
        AngleType::Setting => "Where the planet was setting at your birth",
        AngleType::Mc => "Highest point - career and public expression",
        AngleType::Ic => "Lowest point - home and private life",
        AngleType::Other(_) => "A further relationship between the planet and the land",
    }
}

/// Combined reading for a planet on a given angle
///
/// Falls back to `"{planet} {angle} influences"` with the angle lowercased.
pub fn narrative(planet: &Planet, angle_type: &AngleType) -> String {
    specific_narrative(planet, angle_type)
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!("{} {} influences", planet, angle_type.name().to_lowercase())
        })
}

fn specific_narrative(planet: &Planet, angle_type: &AngleType) -> Option<&'static str> {
    let text = match (planet, angle_type) {
        (Planet::Sun, AngleType::Conjunction) => {
            "Recognition comes easily here; a place to step into the spotlight"
        }
        (Planet::Sun, AngleType::Opposition) => {
            "Others set the pace here; ambition is tested against partnership"
        }
        (Planet::Moon, AngleType::Conjunction) => {
            "A place that feels like home, where feelings run close to the surface"
        }
        (Planet::Moon, AngleType::Opposition) => {
            "Emotional tides pull both ways; nurture others without losing yourself"
        }
        (Planet::Venus, AngleType::Conjunction) => {
            "Romance, art and ease; relationships tend to bloom here"
        }
        (Planet::Venus, AngleType::Opposition) => {
            "Attraction arrives through others; balance giving and receiving"
        }
        (Planet::Mars, AngleType::Conjunction) => {
            "Drive and courage surge; good for bold starts, watch for conflict"
        }
        (Planet::Mars, AngleType::Opposition) => {
            "Competition sharpens you; channel friction into momentum"
        }
        (Planet::Jupiter, AngleType::Conjunction) => {
            "Luck and growth; opportunities widen and optimism rises"
        }
        (Planet::Jupiter, AngleType::Opposition) => {
            "Generous allies appear, though excess needs a counterweight"
        }
        (Planet::Saturn, AngleType::Conjunction) => {
            "Hard work builds lasting results; expect slow but durable gains"
        }
        (Planet::Saturn, AngleType::Opposition) => {
            "Commitments weigh heavily; lessons arrive through obligations to others"
        }
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_colors() {
        assert_eq!(planet_color(&Planet::Sun).to_hex(), "#FFD700");
        assert_eq!(planet_color(&Planet::Jupiter).to_hex(), "#4B0082");
        assert_eq!(planet_color(&Planet::from("Pluto")), Color::WHITE);
    }

    #[test]
    fn test_unknown_angle_dash_is_solid() {
        let pattern = dash_pattern(&AngleType::from("Trine"));
        assert_eq!(pattern, DashPattern::SOLID);
        assert_eq!(pattern.lengths().to_vec(), vec![1.0f32, 0.0]);
    }

    #[test]
    fn test_every_pattern_starts_with_a_stroke() {
        for angle in AngleType::ALL {
            let lengths = dash_pattern(&angle).lengths();
            assert!(lengths.len() >= 2 && lengths.len() % 2 == 0);
            assert!(lengths[0] > 0.0, "{} starts with a gap", angle);
        }
    }

    #[test]
    fn test_narrative_fallback() {
        assert_eq!(
            narrative(&Planet::Moon, &AngleType::Mc),
            "Moon mc influences"
        );
        assert_eq!(
            narrative(&Planet::from("Pluto"), &AngleType::Rising),
            "Pluto rising influences"
        );
        assert!(narrative(&Planet::Venus, &AngleType::Conjunction).contains("Romance"));
    }
}
