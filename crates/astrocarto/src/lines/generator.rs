use crate::lines::normalize::normalize;
use crate::lines::types::{AngleType, BirthData, Coordinate, Planet, PlanetaryLine};

/// Angle types the generator emits, in output order
///
/// Rising, Setting, MC and IC exist in the encoding tables only.
pub const GENERATED_ANGLES: [AngleType; 2] = [AngleType::Conjunction, AngleType::Opposition];

/// Points per line: -180..=180 in 10 degree steps
pub const POINTS_PER_LINE: usize = 37;

const STEP_DEGREES: i32 = 10;
const AMPLITUDE: f64 = 60.0;
const OFFSET_SCALE: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
enum Wave {
    Sine,
    Cosine,
}

/// Wave shape and per-planet phase step for a generated angle type
struct Curve {
    wave: Wave,
    phase: f64,
    /// Added to every latitude, scaled from the birth place
    offset: f64,
}

fn curve(angle_type: &AngleType, lat_offset: f64, lng_offset: f64) -> Option<Curve> {
    match angle_type {
        AngleType::Conjunction => Some(Curve {
            wave: Wave::Sine,
            phase: 30.0,
            offset: lat_offset,
        }),
        AngleType::Opposition => Some(Curve {
            wave: Wave::Cosine,
            phase: 45.0,
            offset: lng_offset,
        }),
        AngleType::Rising
        | AngleType::Setting
        | AngleType::Mc
        | AngleType::Ic
        | AngleType::Other(_) => None,
    }
}

/// Generate every planetary line for a birth
///
/// This is a deterministic placeholder curve, not an ephemeris calculation.
/// Output is planets in [`Planet::CORE`] order, then angles in
/// [`GENERATED_ANGLES`] order.
pub fn generate_lines(birth: &BirthData) -> Vec<PlanetaryLine> {
    let lat_offset = birth.latitude * OFFSET_SCALE;
    let lng_offset = birth.longitude * OFFSET_SCALE;

    let mut lines = Vec::with_capacity(Planet::CORE.len() * GENERATED_ANGLES.len());
    for (planet_index, planet) in Planet::CORE.iter().enumerate() {
        for angle_type in &GENERATED_ANGLES {
            let Some(shape) = curve(angle_type, lat_offset, lng_offset) else {
                log::error!("No curve defined for {}; skipping", angle_type);
                continue;
            };
            let shift = planet_index as f64 * shape.phase;
            let coordinates = trace(|i| {
                let angle = (i + shift).to_radians();
                let wave = match shape.wave {
                    Wave::Sine => angle.sin(),
                    Wave::Cosine => angle.cos(),
                };
                wave * AMPLITUDE + shape.offset
            });
            lines.push(PlanetaryLine {
                planet: planet.clone(),
                angle_type: angle_type.clone(),
                coordinates,
            });
        }
    }

    log::debug!(
        "Generated {} planetary lines for {} {} ({}, {})",
        lines.len(),
        birth.date,
        birth.time,
        birth.latitude,
        birth.longitude
    );
    lines
}

/// Sample `latitude_at` across the full longitude range
fn trace(latitude_at: impl Fn(f64) -> f64) -> Vec<Coordinate> {
    (-180..=180)
        .step_by(STEP_DEGREES as usize)
        .map(|i| {
            let lng = f64::from(i);
            normalize(lng, latitude_at(lng))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_generated_angle_has_a_curve() {
        for angle in &GENERATED_ANGLES {
            assert!(curve(angle, 0.0, 0.0).is_some(), "{} has no curve", angle);
        }
        assert!(curve(&AngleType::Rising, 0.0, 0.0).is_none());
    }
}
