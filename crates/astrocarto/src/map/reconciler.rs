use crate::lines::types::PlanetaryLine;
use crate::map::gate::ReadyGate;
use crate::map::registry::{LayerHandles, LayerRegistry};
use crate::map::surface::{LineSource, RenderSurface, SurfaceError};
use crate::rendering::style::{LayerStyleSettings, LineStyle};
use std::collections::HashSet;

/// Outcome of one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: usize,
    pub removed: usize,
    /// Lines with fewer than two points
    pub skipped: usize,
    /// Per-line add/remove calls the surface rejected
    pub failed: usize,
    /// The pass was dropped or cut short because the surface was not ready
    pub deferred: bool,
    /// The surface was torn down mid-pass and the registry discarded
    pub aborted: bool,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && !self.deferred && !self.aborted
    }
}

enum Removal {
    Done,
    Kept,
}

/// Keeps a surface's line sources and layers in step with a line list
///
/// Owns the registry of what it has put on the surface and the one-shot
/// ready gate. A call made before [`mark_ready`](Self::mark_ready) is dropped
/// and logged; the caller reconciles again once the surface is ready.
#[derive(Debug, Default)]
pub struct MapLayerReconciler {
    gate: ReadyGate,
    registry: LayerRegistry,
    settings: LayerStyleSettings,
}

impl MapLayerReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: LayerStyleSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Deliver the surface's base-style-ready signal
    pub fn mark_ready(&mut self) {
        if self.gate.open() {
            log::info!("Map surface ready for lines");
        }
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_open()
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &LayerStyleSettings {
        &self.settings
    }

    /// Forget the current surface; the next one must signal ready again
    pub fn teardown(&mut self) {
        if !self.registry.is_empty() {
            log::debug!("Discarding {} registered lines", self.registry.len());
        }
        self.registry.clear();
        self.gate = ReadyGate::new();
    }

    /// Bring `surface` in line with `lines`
    ///
    /// Best effort per line: a rejected add or remove is logged and counted,
    /// and the rest of the pass continues.
    pub fn reconcile<S>(&mut self, lines: &[PlanetaryLine], surface: &mut S) -> ReconcileReport
    where
        S: RenderSurface + ?Sized,
    {
        let mut report = ReconcileReport::default();
        if !self.gate.is_open() {
            log::warn!(
                "Map not ready yet for lines; dropping reconcile of {} lines",
                lines.len()
            );
            report.deferred = true;
            return report;
        }

        let wanted: HashSet<String> = lines.iter().map(PlanetaryLine::key).collect();

        for key in self.registry.stale_keys(&wanted) {
            let Some(handles) = self.registry.get(&key).cloned() else {
                continue;
            };
            match remove_line(surface, &key, &handles) {
                Ok(Removal::Done) => {
                    self.registry.remove(&key);
                    report.removed += 1;
                }
                Ok(Removal::Kept) => report.failed += 1,
                Err(SurfaceError::Disposed) => return self.abort(report),
                Err(e) => {
                    // Source removal is retried on later passes while the key stays stale.
                    log::error!("Removed layer {} but not its source: {}", key, e);
                    self.registry.mark_source_only(&key);
                    report.failed += 1;
                }
            }
        }

        log::debug!("Adding lines to globe: {}", lines.len());
        for line in lines {
            let key = line.key();
            if !line.is_renderable() {
                log::warn!("Skipping line {} - insufficient coordinates", key);
                report.skipped += 1;
                continue;
            }
            if self.registry.is_drawn(&key) {
                continue;
            }

            match self.add_line(surface, &key, line) {
                Ok(handles) => {
                    log::debug!("Added line {} ({} points)", key, line.coordinates.len());
                    self.registry.insert(key, handles);
                    report.added += 1;
                }
                Err(SurfaceError::NotReady) => {
                    log::warn!("Surface not ready while adding {}; retry after ready", key);
                    report.deferred = true;
                    break;
                }
                Err(SurfaceError::Disposed) => return self.abort(report),
                Err(e) => {
                    log::error!("Error adding line {} to globe: {}", key, e);
                    // Track any source left behind so a later pass can remove it.
                    if surface.has_source(&key) {
                        let mut handles = LayerHandles::for_key(&key);
                        handles.source_only = true;
                        self.registry.insert(key, handles);
                    } else {
                        self.registry.remove(&key);
                    }
                    report.failed += 1;
                }
            }
        }

        report
    }

    fn add_line<S>(
        &self,
        surface: &mut S,
        key: &str,
        line: &PlanetaryLine,
    ) -> Result<LayerHandles, SurfaceError>
    where
        S: RenderSurface + ?Sized,
    {
        let handles = LayerHandles::for_key(key);

        // Resources left behind by an earlier failed removal or another owner.
        if surface.has_layer(&handles.layer_id) {
            surface.remove_layer(&handles.layer_id)?;
        }
        if surface.has_source(&handles.source_id) {
            surface.remove_source(&handles.source_id)?;
        }

        surface.add_source(&handles.source_id, &LineSource::new(line.coordinates.clone()))?;

        let style = LineStyle::for_line(&line.planet, &line.angle_type, &self.settings);
        if let Err(e) = surface.add_layer(&handles.layer_id, &handles.source_id, &style) {
            if let Err(cleanup) = surface.remove_source(&handles.source_id) {
                log::warn!("Could not roll back source {}: {}", handles.source_id, cleanup);
            }
            return Err(e);
        }

        Ok(handles)
    }

    fn abort(&mut self, mut report: ReconcileReport) -> ReconcileReport {
        log::info!("Map surface torn down during reconcile; abandoning pending lines");
        self.teardown();
        report.aborted = true;
        report
    }
}

/// Remove the layer, then its source
///
/// `Kept` means the layer could not be removed, so the entry and the source
/// stay for the next pass. An `Err` comes from the source step only, except
/// for `Disposed`. A `source_only` entry skips straight to the source.
fn remove_line<S>(surface: &mut S, key: &str, handles: &LayerHandles) -> Result<Removal, SurfaceError>
where
    S: RenderSurface + ?Sized,
{
    if !handles.source_only && surface.has_layer(&handles.layer_id) {
        match surface.remove_layer(&handles.layer_id) {
            Ok(()) => {}
            Err(SurfaceError::Disposed) => return Err(SurfaceError::Disposed),
            Err(e) => {
                log::error!("Error removing layer {}: {}", key, e);
                return Ok(Removal::Kept);
            }
        }
    }
    if surface.has_source(&handles.source_id) {
        surface.remove_source(&handles.source_id)?;
    }
    log::debug!("Removed line {}", key);
    Ok(Removal::Done)
}
