pub mod encoding;
pub mod legend;
pub mod primitives;
pub mod style;

pub use encoding::{
    angle_description, dash_pattern, narrative, planet_color, planet_description,
};
pub use legend::{AngleLegendEntry, CombinationLegendEntry, Legend, PlanetLegendEntry};
pub use primitives::{Color, DashPattern, LineCap, LineJoin};
pub use style::LineStyle;
