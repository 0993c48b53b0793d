/// Renderer-facing description of one loaded layer
use crate::coordinates::Point3;
use crate::gradient::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Geometry,
    Chests,
    Spawns,
    Doors,
    /// Index into the configured zone list
    Zone(usize),
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Geometry => write!(f, "geometry"),
            LayerKind::Chests => write!(f, "chests"),
            LayerKind::Spawns => write!(f, "spawns"),
            LayerKind::Doors => write!(f, "doors"),
            LayerKind::Zone(i) => write!(f, "zone {}", i),
        }
    }
}

/// Shape hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Point,
    Cube,
    Sphere,
    Cylinder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub colour: Rgba,
    pub font_size: u32,
    pub character_size: f32,
    /// Height above the primitive's centre
    pub offset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderItem {
    pub position: Point3,
    pub colour: Rgba,
    /// Per-axis scale of the primitive
    pub size: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point3,
    pub to: Point3,
    pub colour: Rgba,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBatch {
    pub kind: LayerKind,
    pub primitive: Primitive,
    pub items: Vec<RenderItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
}

impl RenderBatch {
    pub fn empty(kind: LayerKind, primitive: Primitive) -> Self {
        Self {
            kind,
            primitive,
            items: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
