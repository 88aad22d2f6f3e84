use crate::lines::types::Coordinate;
use crate::rendering::style::LineStyle;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors a rendering surface can raise for a single operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Surface has not finished loading its base style")]
    NotReady,
    #[error("Surface has been torn down")]
    Disposed,
    #[error("Source already exists: {0}")]
    DuplicateSource(String),
    #[error("Layer already exists: {0}")]
    DuplicateLayer(String),
    #[error("Source not found: {0}")]
    MissingSource(String),
    #[error("Layer not found: {0}")]
    MissingLayer(String),
    #[error("Source {source_id} is still used by layer {layer_id}")]
    SourceInUse { source_id: String, layer_id: String },
    #[error("Surface rejected {id}: {message}")]
    Rejected { id: String, message: String },
}

/// Line geometry carried by a map source
#[derive(Debug, Clone, PartialEq)]
pub struct LineSource {
    pub coordinates: Vec<Coordinate>,
}

impl LineSource {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// GeoJSON `Feature` wrapping a `LineString`
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self
            .coordinates
            .iter()
            .map(|&(lng, lat)| [lng, lat])
            .collect();
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
        })
    }

    /// Describe why the geometry cannot be drawn, if it cannot
    pub fn defect(&self) -> Option<String> {
        if self.coordinates.len() < 2 {
            return Some(format!(
                "line string needs at least 2 points, got {}",
                self.coordinates.len()
            ));
        }
        self.coordinates
            .iter()
            .position(|(lng, lat)| !lng.is_finite() || !lat.is_finite())
            .map(|i| format!("coordinate {} is not finite", i))
    }
}

/// The globe engine's source/layer capability
///
/// Implementations own the actual resources; the reconciler only issues
/// these calls after the surface's base style has loaded.
pub trait RenderSurface {
    fn add_source(&mut self, id: &str, source: &LineSource) -> Result<(), SurfaceError>;

    fn remove_source(&mut self, id: &str) -> Result<(), SurfaceError>;

    fn add_layer(&mut self, id: &str, source_id: &str, style: &LineStyle)
        -> Result<(), SurfaceError>;

    fn remove_layer(&mut self, id: &str) -> Result<(), SurfaceError>;

    fn has_layer(&self, id: &str) -> bool;

    fn has_source(&self, id: &str) -> bool;
}
