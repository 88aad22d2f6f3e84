pub mod generator;
pub mod normalize;
pub mod types;

pub use generator::{generate_lines, GENERATED_ANGLES, POINTS_PER_LINE};
pub use normalize::{normalize, MAX_LATITUDE};
pub use types::{AngleType, BirthData, Coordinate, Planet, PlanetaryLine};
