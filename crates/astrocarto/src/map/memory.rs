use crate::map::surface::{LineSource, RenderSurface, SurfaceError};
use crate::rendering::style::LineStyle;
use std::collections::{BTreeMap, HashSet};

/// Mutating call recorded by [`MemorySurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    AddSource(String),
    RemoveSource(String),
    AddLayer(String),
    RemoveLayer(String),
}

#[derive(Debug, Clone)]
pub struct MemoryLayer {
    pub source_id: String,
    pub style: LineStyle,
}

/// In-memory surface with the same rules a globe engine enforces
///
/// Rejects sources before the style has loaded, duplicate ids, layers over
/// missing sources, and removing a source a layer still draws from. Faults
/// can be injected per id, and the surface can be set to dispose itself
/// after a number of mutating calls.
#[derive(Debug, Default)]
pub struct MemorySurface {
    style_loaded: bool,
    disposed: bool,
    sources: BTreeMap<String, LineSource>,
    layers: BTreeMap<String, MemoryLayer>,
    ops: Vec<SurfaceOp>,
    failing_layer_adds: HashSet<String>,
    failing_layer_removals: HashSet<String>,
    failing_source_removals: HashSet<String>,
    dispose_after: Option<usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose base style has already loaded
    pub fn loaded() -> Self {
        Self {
            style_loaded: true,
            ..Self::default()
        }
    }

    pub fn load_style(&mut self) {
        self.style_loaded = true;
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.sources.clear();
        self.layers.clear();
    }

    pub fn fail_layer_add(&mut self, id: &str) {
        self.failing_layer_adds.insert(id.to_string());
    }

    pub fn fail_layer_removal(&mut self, id: &str) {
        self.failing_layer_removals.insert(id.to_string());
    }

    pub fn fail_source_removal(&mut self, id: &str) {
        self.failing_source_removals.insert(id.to_string());
    }

    pub fn clear_faults(&mut self) {
        self.failing_layer_adds.clear();
        self.failing_layer_removals.clear();
        self.failing_source_removals.clear();
    }

    /// Dispose once `ops` more mutating calls have succeeded
    pub fn dispose_after(&mut self, ops: usize) {
        self.dispose_after = Some(self.ops.len() + ops);
    }

    /// Add a source directly, bypassing any reconciler
    pub fn insert_source(&mut self, id: &str, source: LineSource) {
        self.sources.insert(id.to_string(), source);
    }

    pub fn source(&self, id: &str) -> Option<&LineSource> {
        self.sources.get(id)
    }

    pub fn layer(&self, id: &str) -> Option<&MemoryLayer> {
        self.layers.get(id)
    }

    pub fn source_ids(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.keys().map(String::as_str).collect()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn check_live(&mut self) -> Result<(), SurfaceError> {
        if self.disposed {
            return Err(SurfaceError::Disposed);
        }
        if self.dispose_after.is_some_and(|limit| self.ops.len() >= limit) {
            self.dispose();
            return Err(SurfaceError::Disposed);
        }
        Ok(())
    }
}

impl RenderSurface for MemorySurface {
    fn add_source(&mut self, id: &str, source: &LineSource) -> Result<(), SurfaceError> {
        self.check_live()?;
        if !self.style_loaded {
            return Err(SurfaceError::NotReady);
        }
        if self.sources.contains_key(id) {
            return Err(SurfaceError::DuplicateSource(id.to_string()));
        }
        if let Some(message) = source.defect() {
            return Err(SurfaceError::Rejected {
                id: id.to_string(),
                message,
            });
        }
        self.sources.insert(id.to_string(), source.clone());
        self.ops.push(SurfaceOp::AddSource(id.to_string()));
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> Result<(), SurfaceError> {
        self.check_live()?;
        if let Some((layer_id, _)) = self.layers.iter().find(|(_, l)| l.source_id == id) {
            return Err(SurfaceError::SourceInUse {
                source_id: id.to_string(),
                layer_id: layer_id.clone(),
            });
        }
        if self.failing_source_removals.contains(id) {
            return Err(SurfaceError::Rejected {
                id: id.to_string(),
                message: "injected source removal failure".to_string(),
            });
        }
        if self.sources.remove(id).is_none() {
            return Err(SurfaceError::MissingSource(id.to_string()));
        }
        self.ops.push(SurfaceOp::RemoveSource(id.to_string()));
        Ok(())
    }

    fn add_layer(
        &mut self,
        id: &str,
        source_id: &str,
        style: &LineStyle,
    ) -> Result<(), SurfaceError> {
        self.check_live()?;
        if !self.style_loaded {
            return Err(SurfaceError::NotReady);
        }
        if self.layers.contains_key(id) {
            return Err(SurfaceError::DuplicateLayer(id.to_string()));
        }
        if !self.sources.contains_key(source_id) {
            return Err(SurfaceError::MissingSource(source_id.to_string()));
        }
        if self.failing_layer_adds.contains(id) {
            return Err(SurfaceError::Rejected {
                id: id.to_string(),
                message: "injected layer failure".to_string(),
            });
        }
        self.layers.insert(
            id.to_string(),
            MemoryLayer {
                source_id: source_id.to_string(),
                style: style.clone(),
            },
        );
        self.ops.push(SurfaceOp::AddLayer(id.to_string()));
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), SurfaceError> {
        self.check_live()?;
        if self.failing_layer_removals.contains(id) {
            return Err(SurfaceError::Rejected {
                id: id.to_string(),
                message: "injected removal failure".to_string(),
            });
        }
        if self.layers.remove(id).is_none() {
            return Err(SurfaceError::MissingLayer(id.to_string()));
        }
        self.ops.push(SurfaceOp::RemoveLayer(id.to_string()));
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }
}
