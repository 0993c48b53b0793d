//! Immutable visualisation configuration.
//!
//! Everything here is a read-only descriptor. Runtime state produced by a load
//! lives in [`crate::session::LevelSession`] and is never stored back here.
use crate::coordinates::Scale;
use crate::error::ConfigError;
use crate::gradient::{Gradient, Rgba};
use constants::colour::{BLUE, CYAN, GEOMETRY_GREY, MAGENTA, RED, WHITE, YELLOW, ZONE_COLOURS};
use constants::coordinate_system::{
    CONNECTION_DISTANCE_UNITS, DEFAULT_COORDINATE_SCALE, GEOMETRY_RECORD_CAP, MAX_POINTS_PER_ZONE,
};
use constants::layer::{CHESTS, DOORS, GEOMETRY, SPAWNS, ZONE_FILES};
use constants::render_settings::{
    CHEST_SIZE, DOOR_SIZE, GEOMETRY_SIZE, LABEL_CHARACTER_SIZE, SPAWN_SIZE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How geometry points are coloured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColourMode {
    /// Colour by height through the gradient
    Gradient { stops: Gradient },
    Solid { colour: Rgba },
}

impl Default for ColourMode {
    fn default() -> Self {
        ColourMode::Gradient {
            stops: Gradient::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryLayerConfig {
    pub file: PathBuf,
    pub enabled: bool,
    /// Data lines consumed, `None` reads the whole file
    pub max_records: Option<usize>,
    pub colour_mode: ColourMode,
    pub point_size: f32,
    /// Link consecutive points closer than `connection_distance_units`
    pub connect_neighbours: bool,
    pub connection_distance_units: f64,
}

impl Default for GeometryLayerConfig {
    fn default() -> Self {
        Self {
            file: GEOMETRY.default_file.into(),
            enabled: true,
            max_records: Some(GEOMETRY_RECORD_CAP),
            colour_mode: ColourMode::default(),
            point_size: GEOMETRY_SIZE,
            connect_neighbours: false,
            connection_distance_units: CONNECTION_DISTANCE_UNITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChestLayerConfig {
    pub file: PathBuf,
    pub enabled: bool,
    pub max_records: Option<usize>,
    pub colour: Rgba,
    pub size: f32,
    pub show_labels: bool,
}

impl Default for ChestLayerConfig {
    fn default() -> Self {
        Self {
            file: CHESTS.default_file.into(),
            enabled: true,
            max_records: None,
            colour: YELLOW.into(),
            size: CHEST_SIZE,
            show_labels: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnLayerConfig {
    pub file: PathBuf,
    pub enabled: bool,
    pub max_records: Option<usize>,
    pub colour: Rgba,
    pub boss_colour: Rgba,
    pub size: f32,
    pub show_labels: bool,
}

impl Default for SpawnLayerConfig {
    fn default() -> Self {
        Self {
            file: SPAWNS.default_file.into(),
            enabled: true,
            max_records: None,
            colour: RED.into(),
            boss_colour: MAGENTA.into(),
            size: SPAWN_SIZE,
            show_labels: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorLayerConfig {
    pub file: PathBuf,
    pub enabled: bool,
    pub max_records: Option<usize>,
    pub locked_colour: Rgba,
    pub portal_colour: Rgba,
    pub size: f32,
    pub show_labels: bool,
}

impl Default for DoorLayerConfig {
    fn default() -> Self {
        Self {
            file: DOORS.default_file.into(),
            enabled: true,
            max_records: None,
            locked_colour: BLUE.into(),
            portal_colour: CYAN.into(),
            size: DOOR_SIZE,
            show_labels: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub file: PathBuf,
    #[serde(default = "default_zone_colour")]
    pub colour: Rgba,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_zone_colour() -> Rgba {
    WHITE.into()
}

fn default_true() -> bool {
    true
}

fn default_zones() -> Vec<ZoneConfig> {
    ZONE_FILES
        .iter()
        .zip(ZONE_COLOURS.iter())
        .map(|(file, &colour)| ZoneConfig {
            file: PathBuf::from(file),
            colour: colour.into(),
            enabled: true,
        })
        .collect()
}

/// Complete visualisation setup. Every field has a default, so `{}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// Directory data file names are resolved against
    pub data_dir: PathBuf,
    pub coordinate_scale: f64,
    pub label_size: f32,
    pub geometry: GeometryLayerConfig,
    pub chests: ChestLayerConfig,
    pub spawns: SpawnLayerConfig,
    pub doors: DoorLayerConfig,
    pub zones: Vec<ZoneConfig>,
    pub max_points_per_zone: Option<usize>,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            coordinate_scale: DEFAULT_COORDINATE_SCALE,
            label_size: LABEL_CHARACTER_SIZE,
            geometry: GeometryLayerConfig::default(),
            chests: ChestLayerConfig::default(),
            spawns: SpawnLayerConfig::default(),
            doors: DoorLayerConfig::default(),
            zones: default_zones(),
            max_points_per_zone: Some(MAX_POINTS_PER_ZONE),
        }
    }
}

impl VisualizationConfig {
    /// Load and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express; returns the validated scale.
    pub fn validate(&self) -> Result<Scale, ConfigError> {
        Scale::new(self.coordinate_scale)
    }

    /// Resolve a layer file against `data_dir`. Absolute paths pass through.
    pub fn resolve(&self, file: &Path) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Solid geometry colour used when colour-by-height is switched off
    pub fn solid_geometry_colour() -> Rgba {
        GEOMETRY_GREY.into()
    }
}
