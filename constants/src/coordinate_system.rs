/// Source (PSX) units to render units
pub const DEFAULT_COORDINATE_SCALE: f64 = 0.01;

/// Geometry data lines consumed per file unless configured otherwise
pub const GEOMETRY_RECORD_CAP: usize = 500;

/// Geometry data lines consumed per zone in a multi-zone load
pub const MAX_POINTS_PER_ZONE: usize = 500;

/// Consecutive geometry points closer than this (in source units) get a connecting segment
pub const CONNECTION_DISTANCE_UNITS: f64 = 5.0;

/// Field delimiter used by every level layout export
pub const FIELD_DELIMITER: char = ',';
