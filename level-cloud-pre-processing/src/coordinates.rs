use crate::error::ConfigError;
use constants::coordinate_system::DEFAULT_COORDINATE_SCALE;
use serde::{Deserialize, Serialize};

/// Multiplier from source units to render units. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f64);

impl Scale {
    pub fn new(factor: f64) -> Result<Self, ConfigError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(ConfigError::InvalidScale(factor))
        }
    }

    pub fn factor(&self) -> f64 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_COORDINATE_SCALE)
    }
}

/// Scaled level-space position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Apply a uniform scale factor to source coordinates.
    pub fn scaled(x: f64, y: f64, z: f64, scale: Scale) -> Self {
        let s = scale.factor();
        Self::new(x * s, y * s, z * s)
    }

    /// Exact origin check; (0,0,0) marks an unset entity position in the exports.
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn distance(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    /// Elevation
    Y,
    Z,
}
