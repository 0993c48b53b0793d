//! Runtime state produced by one load of the configured layers.
//!
//! A session owns every record and render batch from the load that created
//! it. Reloading discards all of it and runs the pipeline again from the
//! files; nothing is cached between loads.
use crate::batch::{LayerKind, Primitive, RenderBatch};
use crate::bounds::PointCloudBounds;
use crate::config::VisualizationConfig;
use crate::converter::load_layer;
use crate::coordinates::{Point3, Scale};
use crate::error::{ConfigError, LoadError};
use crate::layers::{
    ChestRecord, DoorRecord, SpawnRecord, chest_batch, chest_layout, door_batch, door_layout,
    geometry_batch, geometry_layout, spawn_batch, spawn_layout, zone_batch,
};
use crate::record::{FieldLayout, LayerRecord, SkippedRecord};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LayerStatus {
    Loaded,
    /// Source missing or unreadable; the layer is empty
    Missing { reason: String },
    Disabled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerState {
    pub kind: LayerKind,
    pub source: PathBuf,
    pub status: LayerStatus,
    pub visible: bool,
    pub batch: RenderBatch,
    pub skipped: Vec<SkippedRecord>,
    pub bounds: PointCloudBounds,
}

impl LayerState {
    fn loaded(
        kind: LayerKind,
        source: &Path,
        batch: RenderBatch,
        skipped: Vec<SkippedRecord>,
        bounds: PointCloudBounds,
    ) -> Self {
        Self {
            kind,
            source: source.to_path_buf(),
            status: LayerStatus::Loaded,
            visible: true,
            batch,
            skipped,
            bounds,
        }
    }

    fn unavailable(
        kind: LayerKind,
        source: &Path,
        primitive: Primitive,
        status: LayerStatus,
    ) -> Self {
        Self {
            kind,
            source: source.to_path_buf(),
            status,
            visible: true,
            batch: RenderBatch::empty(kind, primitive),
            skipped: Vec::new(),
            bounds: PointCloudBounds::new(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.batch.len()
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LayerStatus::Loaded
    }
}

/// Which loader produced the session, so a reload repeats it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Geometry, chests, spawns and doors
    Complete,
    /// One geometry cloud per configured zone
    Zones,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelSession {
    mode: SessionMode,
    scale: Scale,
    layers: Vec<LayerState>,
}

struct LayerSpec<'a> {
    kind: LayerKind,
    enabled: bool,
    source: PathBuf,
    layout: FieldLayout,
    primitive: Primitive,
    scale: Scale,
    name: &'a str,
}

/// Read, parse and build one layer. Load failures become a `Missing` layer
/// with a warning; the caller carries on with the remaining layers.
fn load_into_state<T, F>(spec: LayerSpec<'_>, build: F) -> LayerState
where
    T: LayerRecord,
    F: FnOnce(&[T]) -> RenderBatch,
{
    if !spec.enabled {
        return LayerState::unavailable(
            spec.kind,
            &spec.source,
            spec.primitive,
            LayerStatus::Disabled,
        );
    }

    match load_layer::<T>(&spec.source, &spec.layout, spec.scale, spec.name) {
        Ok(report) => {
            let positions: Vec<Point3> = report.records.iter().map(LayerRecord::position).collect();
            let bounds = PointCloudBounds::from_points(&positions);
            let batch = build(&report.records);
            LayerState::loaded(spec.kind, &spec.source, batch, report.skipped, bounds)
        }
        Err(err) => {
            warn!("{} layer unavailable: {}", spec.name, err);
            let reason = match &err {
                LoadError::FileNotFound { .. } => "file not found".to_string(),
                LoadError::Io { source, .. } => source.to_string(),
            };
            LayerState::unavailable(
                spec.kind,
                &spec.source,
                spec.primitive,
                LayerStatus::Missing { reason },
            )
        }
    }
}

impl LevelSession {
    /// Load geometry, chests, spawns and doors.
    /// Only an invalid configuration fails; per-layer problems are recorded in the layer.
    pub fn load(config: &VisualizationConfig) -> Result<Self, ConfigError> {
        let scale = config.validate()?;
        let geometry = &config.geometry;

        let layers = vec![
            load_into_state::<Point3, _>(
                LayerSpec {
                    kind: LayerKind::Geometry,
                    enabled: geometry.enabled,
                    source: config.resolve(&geometry.file),
                    layout: geometry_layout(geometry.max_records),
                    primitive: Primitive::Point,
                    scale,
                    name: "Geometry",
                },
                |points| geometry_batch(points, geometry, scale),
            ),
            load_into_state::<ChestRecord, _>(
                LayerSpec {
                    kind: LayerKind::Chests,
                    enabled: config.chests.enabled,
                    source: config.resolve(&config.chests.file),
                    layout: chest_layout(config.chests.max_records),
                    primitive: Primitive::Cube,
                    scale,
                    name: "Chests",
                },
                |records| chest_batch(records, &config.chests, config.label_size),
            ),
            load_into_state::<SpawnRecord, _>(
                LayerSpec {
                    kind: LayerKind::Spawns,
                    enabled: config.spawns.enabled,
                    source: config.resolve(&config.spawns.file),
                    layout: spawn_layout(config.spawns.max_records),
                    primitive: Primitive::Sphere,
                    scale,
                    name: "Spawns",
                },
                |records| spawn_batch(records, &config.spawns, config.label_size),
            ),
            load_into_state::<DoorRecord, _>(
                LayerSpec {
                    kind: LayerKind::Doors,
                    enabled: config.doors.enabled,
                    source: config.resolve(&config.doors.file),
                    layout: door_layout(config.doors.max_records),
                    primitive: Primitive::Cylinder,
                    scale,
                    name: "Doors",
                },
                |records| door_batch(records, &config.doors, config.label_size),
            ),
        ];

        let session = Self {
            mode: SessionMode::Complete,
            scale,
            layers,
        };
        info!(
            "Complete visualisation loaded: {} of {} layers",
            session.loaded_layer_count(),
            session.layers.len()
        );
        Ok(session)
    }

    /// Load every configured zone as its own solid-coloured geometry layer.
    pub fn load_zones(config: &VisualizationConfig) -> Result<Self, ConfigError> {
        let scale = config.validate()?;
        let point_size = config.geometry.point_size;

        let layers = config
            .zones
            .iter()
            .enumerate()
            .map(|(index, zone)| {
                let name = format!("Zone {}", zone.file.display());
                load_into_state::<Point3, _>(
                    LayerSpec {
                        kind: LayerKind::Zone(index),
                        enabled: zone.enabled,
                        source: config.resolve(&zone.file),
                        layout: geometry_layout(config.max_points_per_zone),
                        primitive: Primitive::Point,
                        scale,
                        name: &name,
                    },
                    |points| zone_batch(index, points, zone, point_size),
                )
            })
            .collect();

        let session = Self {
            mode: SessionMode::Zones,
            scale,
            layers,
        };
        info!(
            "Multi-zone visualisation loaded: {} of {} zones",
            session.loaded_layer_count(),
            session.layers.len()
        );
        Ok(session)
    }

    /// Discard everything and repeat the load that produced this session.
    pub fn reload(&mut self, config: &VisualizationConfig) -> Result<(), ConfigError> {
        self.clear();
        *self = match self.mode {
            SessionMode::Complete => Self::load(config)?,
            SessionMode::Zones => Self::load_zones(config)?,
        };
        Ok(())
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Flip a layer's visibility, returning the new state.
    pub fn toggle(&mut self, kind: LayerKind) -> Option<bool> {
        let layer = self.layers.iter_mut().find(|l| l.kind == kind)?;
        layer.visible = !layer.visible;
        Some(layer.visible)
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&LayerState> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn layers(&self) -> &[LayerState] {
        &self.layers
    }

    pub fn loaded_layer_count(&self) -> usize {
        self.layers.iter().filter(|l| l.is_loaded()).count()
    }

    /// Batches the renderer should draw: loaded and visible layers only
    pub fn visible_batches(&self) -> impl Iterator<Item = &RenderBatch> {
        self.layers
            .iter()
            .filter(|l| l.is_loaded() && l.visible)
            .map(|l| &l.batch)
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }
}
