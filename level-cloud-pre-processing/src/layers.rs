//! Per-layer record types and render batch construction.
//!
//! Each layer is a configuration value over the shared record parser: a
//! [`FieldLayout`] plus a [`LayerRecord`] type. The batch builders attach the
//! layer's colours, size hints and labels.
use crate::batch::{Label, LayerKind, Primitive, RenderBatch, RenderItem};
use crate::colour_mapper::HeightColourMapper;
use crate::config::{
    ChestLayerConfig, ColourMode, DoorLayerConfig, GeometryLayerConfig, SpawnLayerConfig,
    ZoneConfig,
};
use crate::connections::connect_neighbours;
use crate::coordinates::{Point3, Scale};
use crate::gradient::Rgba;
use crate::record::{FieldLayout, LayerRecord, RawRecord, SentinelPolicy};
use constants::colour::{CYAN, RED, YELLOW};
use constants::layer::{BOSS_MONSTER_TYPE, CHESTS, DOORS, GEOMETRY, LOCKED_DOOR_KEYWORD, SPAWNS};
use constants::render_settings::{
    CHEST_LABEL_FONT_SIZE, CHEST_LABEL_OFFSET, DOOR_LABEL_FONT_SIZE, DOOR_LABEL_OFFSET,
    SPAWN_LABEL_FONT_SIZE, SPAWN_LABEL_OFFSET,
};
use serde::{Deserialize, Serialize};

pub fn geometry_layout(max_records: Option<usize>) -> FieldLayout {
    FieldLayout::from_layer_info(&GEOMETRY, SentinelPolicy::Keep, max_records)
}

pub fn chest_layout(max_records: Option<usize>) -> FieldLayout {
    FieldLayout::from_layer_info(&CHESTS, SentinelPolicy::DropOrigin, max_records)
}

pub fn spawn_layout(max_records: Option<usize>) -> FieldLayout {
    FieldLayout::from_layer_info(&SPAWNS, SentinelPolicy::DropOrigin, max_records)
}

pub fn door_layout(max_records: Option<usize>) -> FieldLayout {
    FieldLayout::from_layer_info(&DOORS, SentinelPolicy::DropOrigin, max_records)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChestRecord {
    pub position: Point3,
    pub item_id: String,
    pub item_name: String,
    pub quantity: String,
}

impl ChestRecord {
    pub fn label_text(&self) -> String {
        format!("{}\nQty: {}", self.item_name, self.quantity)
    }
}

impl LayerRecord for ChestRecord {
    fn from_fields(position: Point3, fields: &RawRecord<'_>) -> Self {
        Self {
            position,
            item_id: fields.text(4),
            item_name: fields.text(5),
            quantity: fields.text(6),
        }
    }

    fn position(&self) -> Point3 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRecord {
    pub position: Point3,
    pub monster_name: String,
    pub monster_type: String,
    pub spawn_chance: String,
    pub spawn_count: String,
}

impl SpawnRecord {
    pub fn is_boss(&self) -> bool {
        self.monster_type == BOSS_MONSTER_TYPE
    }

    pub fn label_text(&self) -> String {
        format!(
            "{}\n{}% ({})",
            self.monster_name, self.spawn_chance, self.spawn_count
        )
    }
}

impl LayerRecord for SpawnRecord {
    fn from_fields(position: Point3, fields: &RawRecord<'_>) -> Self {
        Self {
            position,
            monster_name: fields.text(6),
            monster_type: fields.text(7),
            spawn_chance: fields.text(8),
            spawn_count: fields.text(9),
        }
    }

    fn position(&self) -> Point3 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorRecord {
    pub position: Point3,
    pub door_type: String,
    pub type_descriptor: String,
    pub key_id: String,
    pub destination_id: String,
}

impl DoorRecord {
    pub fn is_locked(&self) -> bool {
        self.type_descriptor.contains(LOCKED_DOOR_KEYWORD)
    }

    pub fn label_text(&self) -> String {
        format!(
            "{}\nKey:{} -> {}",
            self.type_descriptor, self.key_id, self.destination_id
        )
    }
}

impl LayerRecord for DoorRecord {
    fn from_fields(position: Point3, fields: &RawRecord<'_>) -> Self {
        Self {
            position,
            door_type: fields.text(4),
            type_descriptor: fields.text(5),
            key_id: fields.text(6),
            destination_id: fields.text(7),
        }
    }

    fn position(&self) -> Point3 {
        self.position
    }
}

/// Geometry cloud coloured by height or a solid colour, with optional
/// neighbour segments.
pub fn geometry_batch(
    points: &[Point3],
    config: &GeometryLayerConfig,
    scale: Scale,
) -> RenderBatch {
    let colours = match &config.colour_mode {
        ColourMode::Gradient { stops } => HeightColourMapper::new(stops.clone()).map(points),
        ColourMode::Solid { colour } => vec![*colour; points.len()],
    };

    let size = [config.point_size; 3];
    let items = points
        .iter()
        .zip(colours)
        .map(|(&position, colour)| RenderItem {
            position,
            colour,
            size,
            label: None,
        })
        .collect();

    let segments = if config.connect_neighbours {
        connect_neighbours(points, config.connection_distance_units * scale.factor())
    } else {
        Vec::new()
    };

    RenderBatch {
        kind: LayerKind::Geometry,
        primitive: Primitive::Point,
        items,
        segments,
    }
}

/// One zone of a multi-zone load, painted in the zone's colour.
pub fn zone_batch(
    index: usize,
    points: &[Point3],
    zone: &ZoneConfig,
    point_size: f32,
) -> RenderBatch {
    RenderBatch {
        kind: LayerKind::Zone(index),
        primitive: Primitive::Point,
        items: points
            .iter()
            .map(|&position| RenderItem {
                position,
                colour: zone.colour,
                size: [point_size; 3],
                label: None,
            })
            .collect(),
        segments: Vec::new(),
    }
}

fn label(
    text: String,
    colour: [f32; 4],
    font_size: u32,
    character_size: f32,
    offset: f32,
) -> Label {
    Label {
        text,
        colour: Rgba::from(colour),
        font_size,
        character_size,
        offset,
    }
}

pub fn chest_batch(
    records: &[ChestRecord],
    config: &ChestLayerConfig,
    label_size: f32,
) -> RenderBatch {
    let items = records
        .iter()
        .map(|chest| RenderItem {
            position: chest.position,
            colour: config.colour,
            size: [config.size; 3],
            label: config.show_labels.then(|| {
                label(
                    chest.label_text(),
                    YELLOW,
                    CHEST_LABEL_FONT_SIZE,
                    label_size,
                    CHEST_LABEL_OFFSET,
                )
            }),
        })
        .collect();

    RenderBatch {
        kind: LayerKind::Chests,
        primitive: Primitive::Cube,
        items,
        segments: Vec::new(),
    }
}

pub fn spawn_batch(
    records: &[SpawnRecord],
    config: &SpawnLayerConfig,
    label_size: f32,
) -> RenderBatch {
    let items = records
        .iter()
        .map(|spawn| RenderItem {
            position: spawn.position,
            colour: if spawn.is_boss() {
                config.boss_colour
            } else {
                config.colour
            },
            size: [config.size; 3],
            label: config.show_labels.then(|| {
                label(
                    spawn.label_text(),
                    RED,
                    SPAWN_LABEL_FONT_SIZE,
                    label_size,
                    SPAWN_LABEL_OFFSET,
                )
            }),
        })
        .collect();

    RenderBatch {
        kind: LayerKind::Spawns,
        primitive: Primitive::Sphere,
        items,
        segments: Vec::new(),
    }
}

pub fn door_batch(
    records: &[DoorRecord],
    config: &DoorLayerConfig,
    label_size: f32,
) -> RenderBatch {
    let items = records
        .iter()
        .map(|door| RenderItem {
            position: door.position,
            colour: if door.is_locked() {
                config.locked_colour
            } else {
                config.portal_colour
            },
            size: [config.size, config.size * 2.0, config.size],
            label: config.show_labels.then(|| {
                label(
                    door.label_text(),
                    CYAN,
                    DOOR_LABEL_FONT_SIZE,
                    label_size,
                    DOOR_LABEL_OFFSET,
                )
            }),
        })
        .collect();

    RenderBatch {
        kind: LayerKind::Doors,
        primitive: Primitive::Cylinder,
        items,
        segments: Vec::new(),
    }
}
