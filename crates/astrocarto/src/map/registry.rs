use std::collections::{BTreeMap, HashSet};

/// Surface resource ids backing one drawn line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerHandles {
    pub source_id: String,
    pub layer_id: String,
    /// The layer is gone but removing the source failed
    pub source_only: bool,
}

impl LayerHandles {
    /// Lines use their key as both the source and the layer id
    pub fn for_key(key: &str) -> Self {
        Self {
            source_id: key.to_string(),
            layer_id: key.to_string(),
            source_only: false,
        }
    }
}

/// Lines currently on the surface, keyed by `line-{planet}-{angleType}`
///
/// An entry exists while its source exists. Unless marked `source_only`,
/// its layer exists too.
#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    entries: BTreeMap<String, LayerHandles>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&LayerHandles> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, handles: LayerHandles) {
        self.entries.insert(key, handles);
    }

    pub fn remove(&mut self, key: &str) -> Option<LayerHandles> {
        self.entries.remove(key)
    }

    /// Keep the entry for a line whose layer was removed but not its source
    pub fn mark_source_only(&mut self, key: &str) {
        if let Some(handles) = self.entries.get_mut(key) {
            handles.source_only = true;
        }
    }

    /// Whether `key` is fully drawn, with both its source and its layer
    pub fn is_drawn(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|h| !h.source_only)
    }

    /// Registered keys missing from `wanted`, in key order
    pub fn stale_keys(&self, wanted: &HashSet<String>) -> Vec<String> {
        self.entries
            .keys()
            .filter(|key| !wanted.contains(*key))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
