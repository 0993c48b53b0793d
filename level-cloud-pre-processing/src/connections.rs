use crate::batch::Segment;
use crate::coordinates::Point3;
use crate::gradient::Rgba;
use constants::colour::CYAN;
use constants::render_settings::SEGMENT_WIDTH;

/// Segments between consecutive points (in source order) strictly closer than
/// `max_distance` render units.
pub fn connect_neighbours(points: &[Point3], max_distance: f64) -> Vec<Segment> {
    let colour = Rgba::from(CYAN);
    points
        .windows(2)
        .filter(|w| w[0].distance(&w[1]) < max_distance)
        .map(|w| Segment {
            from: w[0],
            to: w[1],
            colour,
            width: SEGMENT_WIDTH,
        })
        .collect()
}
