pub mod gate;
pub mod memory;
pub mod reconciler;
pub mod registry;
pub mod surface;

pub use gate::{ReadyGate, ReadyState};
pub use memory::{MemorySurface, SurfaceOp};
pub use reconciler::{MapLayerReconciler, ReconcileReport};
pub use registry::{LayerHandles, LayerRegistry};
pub use surface::{LineSource, RenderSurface, SurfaceError};
