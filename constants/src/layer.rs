/// Per-layer file defaults and field thresholds for the level layout exports.
pub struct LayerInfo {
    pub default_file: &'static str,
    pub min_fields: usize,
    /// Field indices holding x, y, z
    pub position_fields: [usize; 3],
}

pub const GEOMETRY: LayerInfo = LayerInfo {
    default_file: "coordinates_zone_5mb.csv",
    min_fields: 4,
    position_fields: [1, 2, 3],
};

pub const CHESTS: LayerInfo = LayerInfo {
    default_file: "chest_positions.csv",
    min_fields: 8,
    position_fields: [1, 2, 3],
};

pub const SPAWNS: LayerInfo = LayerInfo {
    default_file: "spawn_positions.csv",
    min_fields: 10,
    position_fields: [2, 3, 4],
};

pub const DOORS: LayerInfo = LayerInfo {
    default_file: "door_positions.csv",
    min_fields: 9,
    position_fields: [1, 2, 3],
};

/// Default multi-zone geometry set
pub const ZONE_FILES: &[&str] = &[
    "coordinates_zone_1mb.csv",
    "coordinates_zone_2mb.csv",
    "coordinates_zone_3mb.csv",
    "coordinates_zone_5mb.csv",
    "coordinates_zone_9mb.csv",
];

/// Spawn monster type rendered with the boss colour
pub const BOSS_MONSTER_TYPE: &str = "Boss";

/// Door descriptor keyword rendered with the locked door colour
pub const LOCKED_DOOR_KEYWORD: &str = "Locked";
