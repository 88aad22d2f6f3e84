pub mod lines;
pub mod map;
pub mod rendering;
pub mod service;

pub use lines::{generate_lines, normalize, AngleType, BirthData, Planet, PlanetaryLine};
pub use map::{MapLayerReconciler, MemorySurface, ReconcileReport, RenderSurface, SurfaceError};
pub use rendering::{Legend, LineStyle};
pub use service::{AstroService, MemoryStore, ServiceError};
