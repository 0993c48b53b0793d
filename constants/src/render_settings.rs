/// Point size hint for geometry clouds
pub const GEOMETRY_SIZE: f32 = 0.05;
pub const CHEST_SIZE: f32 = 0.3;
pub const SPAWN_SIZE: f32 = 0.2;
/// Door cylinders are twice as tall as they are wide
pub const DOOR_SIZE: f32 = 0.25;

pub const LABEL_CHARACTER_SIZE: f32 = 0.1;

pub const CHEST_LABEL_FONT_SIZE: u32 = 14;
pub const SPAWN_LABEL_FONT_SIZE: u32 = 12;
pub const DOOR_LABEL_FONT_SIZE: u32 = 10;

/// Vertical label offsets above the entity primitive
pub const CHEST_LABEL_OFFSET: f32 = 0.6;
pub const SPAWN_LABEL_OFFSET: f32 = 0.5;
pub const DOOR_LABEL_OFFSET: f32 = 0.6;

pub const SEGMENT_WIDTH: f32 = 0.01;
