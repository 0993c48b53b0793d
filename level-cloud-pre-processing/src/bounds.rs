/// Level coordinate bounds tracking and normalisation
use crate::coordinates::{Axis, Point3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloudBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Default for PointCloudBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl PointCloudBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }

    /// Bounds of a point collection in a single pass
    pub fn from_points(points: &[Point3]) -> Self {
        let mut bounds = Self::new();
        for p in points {
            bounds.update(p);
        }
        bounds
    }

    /// Update bounds with a new point
    pub fn update(&mut self, p: &Point3) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
        self.min_z = self.min_z.min(p.z);
        self.max_z = self.max_z.max(p.z);
    }

    /// True until the first point is added
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Get world space dimensions
    pub fn dimensions(&self) -> (f64, f64, f64) {
        if self.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        (
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }

    pub fn axis_range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
            Axis::Z => (self.min_z, self.max_z),
        }
    }

    /// Normalise a coordinate on `axis` to the 0-1 range.
    /// A flat axis (max == min) normalises everything to 0.
    pub fn normalize(&self, axis: Axis, value: f64) -> f64 {
        let (min, max) = self.axis_range(axis);
        let span = max - min;
        if span.is_nan() || span <= 0.0 {
            return 0.0;
        }
        (value - min) / span
    }
}
