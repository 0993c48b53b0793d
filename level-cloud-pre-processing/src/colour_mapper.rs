/// Height-range colour mapping for geometry clouds
use crate::bounds::PointCloudBounds;
use crate::coordinates::{Axis, Point3};
use crate::gradient::{Gradient, Rgba};

/// Maps each point to a gradient colour by its position within the
/// collection's range on one axis.
#[derive(Debug, Clone)]
pub struct HeightColourMapper {
    axis: Axis,
    gradient: Gradient,
}

impl HeightColourMapper {
    /// Mapper over the elevation axis
    pub fn new(gradient: Gradient) -> Self {
        Self::with_axis(Axis::Y, gradient)
    }

    pub fn with_axis(axis: Axis, gradient: Gradient) -> Self {
        Self { axis, gradient }
    }

    /// `t = (v - min) / (max - min)` per point. A flat collection yields 0 for
    /// every point, i.e. the first gradient stop.
    pub fn interpolation_parameters(&self, points: &[Point3]) -> Vec<f32> {
        let bounds = PointCloudBounds::from_points(points);
        points
            .iter()
            .map(|p| bounds.normalize(self.axis, p.axis(self.axis)) as f32)
            .collect()
    }

    pub fn map(&self, points: &[Point3]) -> Vec<Rgba> {
        self.interpolation_parameters(points)
            .into_iter()
            .map(|t| self.gradient.evaluate(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_colour;
    use constants::colour::{BLUE, GREEN, RED};

    fn heights(ys: &[f64]) -> Vec<Point3> {
        ys.iter().map(|&y| Point3::new(1.0, y, -1.0)).collect()
    }

    #[test]
    fn test_three_stop_scenario() {
        let mapper = HeightColourMapper::new(Gradient::default());
        let points = heights(&[0.0, 5.0, 10.0]);

        assert_eq!(mapper.interpolation_parameters(&points), vec![0.0, 0.5, 1.0]);
        let colours = mapper.map(&points);
        assert_eq!(colours.len(), 3);
        assert_colour(colours[0], BLUE);
        assert_colour(colours[1], GREEN);
        assert_colour(colours[2], RED);
    }

    #[test]
    fn test_parameters_monotonic_in_height() {
        let mapper = HeightColourMapper::new(Gradient::default());
        let points = heights(&[3.0, -2.0, 7.5, 0.0, 7.4, 12.0, -2.0]);
        let ts = mapper.interpolation_parameters(&points);

        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate() {
                if a.y < b.y {
                    assert!(ts[i] <= ts[j], "t({}) > t({})", a.y, b.y);
                }
            }
        }
        assert!(ts.iter().all(|t| (0.0..=1.0).contains(t)));
    }

    #[test]
    fn test_flat_collection_maps_to_first_stop() {
        let mapper = HeightColourMapper::new(Gradient::default());
        let colours = mapper.map(&heights(&[4.0, 4.0, 4.0]));
        assert_eq!(colours.len(), 3);
        colours.iter().for_each(|&c| assert_colour(c, BLUE));

        let single = mapper.map(&heights(&[9.0]));
        assert_eq!(single.len(), 1);
        assert_colour(single[0], BLUE);
    }

    #[test]
    fn test_empty_collection() {
        let mapper = HeightColourMapper::new(Gradient::default());
        assert!(mapper.map(&[]).is_empty());
    }

    #[test]
    fn test_alternate_axis() {
        let mapper = HeightColourMapper::with_axis(Axis::X, Gradient::default());
        let points = vec![Point3::new(0.0, 100.0, 0.0), Point3::new(2.0, -100.0, 0.0)];
        assert_eq!(mapper.interpolation_parameters(&points), vec![0.0, 1.0]);
    }
}
