/// Colours and piecewise-linear colour gradients
use crate::error::ConfigError;
use colorgrad::{Color, CustomGradient};
use constants::colour::{HEIGHT_GRADIENT, RgbaArray};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<RgbaArray> for Rgba {
    fn from(c: RgbaArray) -> Self {
        Rgba::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::new(c.r as f64, c.g as f64, c.b as f64, c.a as f64)
    }
}

impl From<Color> for Rgba {
    fn from(c: Color) -> Self {
        Rgba::new(c.r as f32, c.g as f32, c.b as f32, c.a as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub position: f32,
    pub colour: Rgba,
}

/// Ordered colour stops over the unit interval.
/// Holds at least two stops, positions in [0,1], ascending. Repeating a
/// position makes a hard step between the two colours.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<GradientStop>", into = "Vec<GradientStop>")]
pub struct Gradient {
    stops: Vec<GradientStop>,
    sampler: Arc<colorgrad::Gradient>,
}

impl Gradient {
    pub fn new(stops: Vec<GradientStop>) -> Result<Self, ConfigError> {
        if stops.len() < 2 {
            return Err(ConfigError::InvalidGradient(format!(
                "need at least 2 stops, got {}",
                stops.len()
            )));
        }

        if let Some(stop) = stops.iter().find(|s| !(0.0..=1.0).contains(&s.position)) {
            return Err(ConfigError::InvalidGradient(format!(
                "stop position {} outside [0, 1]",
                stop.position
            )));
        }

        if stops.windows(2).any(|w| w[1].position < w[0].position) {
            return Err(ConfigError::InvalidGradient(
                "stops must be sorted by position".to_string(),
            ));
        }

        let colours: Vec<Color> = stops.iter().map(|s| s.colour.into()).collect();
        let domain: Vec<f64> = stops.iter().map(|s| s.position as f64).collect();
        let sampler = CustomGradient::new()
            .colors(&colours)
            .domain(&domain)
            .build()
            .map_err(|e| ConfigError::InvalidGradient(e.to_string()))?;

        Ok(Self {
            stops,
            sampler: Arc::new(sampler),
        })
    }

    /// Colour at `t`. Values outside the stops clamp to the end colours; NaN
    /// maps to the first colour.
    pub fn evaluate(&self, t: f32) -> Rgba {
        if t.is_nan() {
            return self.stops[0].colour;
        }
        self.sampler.at(t.clamp(0.0, 1.0) as f64).into()
    }
}

impl Default for Gradient {
    /// Blue (low) through green to red (high)
    fn default() -> Self {
        let stops = HEIGHT_GRADIENT
            .iter()
            .map(|&(position, colour)| GradientStop {
                position,
                colour: colour.into(),
            })
            .collect();
        match Gradient::new(stops) {
            Ok(g) => g,
            Err(e) => unreachable!("built-in height gradient is invalid: {e}"),
        }
    }
}

impl fmt::Debug for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gradient").field("stops", &self.stops).finish()
    }
}

impl PartialEq for Gradient {
    fn eq(&self, other: &Self) -> bool {
        self.stops == other.stops
    }
}

impl TryFrom<Vec<GradientStop>> for Gradient {
    type Error = ConfigError;

    fn try_from(stops: Vec<GradientStop>) -> Result<Self, Self::Error> {
        Gradient::new(stops)
    }
}

impl From<Gradient> for Vec<GradientStop> {
    fn from(g: Gradient) -> Self {
        g.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_colour;
    use approx::assert_relative_eq;
    use constants::colour::{BLUE, GREEN, RED};
    use test_case::test_case;

    fn stop(position: f32, colour: RgbaArray) -> GradientStop {
        GradientStop {
            position,
            colour: colour.into(),
        }
    }

    #[test]
    fn test_default_gradient_hits_stops() {
        let g = Gradient::default();
        assert_colour(g.evaluate(0.0), BLUE);
        assert_colour(g.evaluate(0.5), GREEN);
        assert_colour(g.evaluate(1.0), RED);
    }

    #[test]
    fn test_interpolates_each_channel() {
        let g = Gradient::default();
        assert_colour(g.evaluate(0.25), [0.0, 0.5, 0.5, 1.0]);
        assert_colour(g.evaluate(0.75), [0.5, 0.5, 0.0, 1.0]);
    }

    #[test_case(-0.5, BLUE)]
    #[test_case(1.5, RED)]
    #[test_case(f32::NAN, BLUE)]
    fn test_out_of_range_clamps(t: f32, expected: RgbaArray) {
        assert_colour(Gradient::default().evaluate(t), expected);
    }

    #[test]
    fn test_stops_not_covering_unit_interval() {
        let g = Gradient::new(vec![stop(0.2, BLUE), stop(0.8, RED)]).unwrap();
        assert_colour(g.evaluate(0.1), BLUE);
        assert_colour(g.evaluate(0.9), RED);
        assert_relative_eq!(g.evaluate(0.5).r, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_repeated_position_is_a_hard_step() {
        let g = Gradient::new(vec![
            stop(0.0, BLUE),
            stop(0.5, BLUE),
            stop(0.5, RED),
            stop(1.0, RED),
        ])
        .unwrap();
        assert_colour(g.evaluate(0.25), BLUE);
        assert_colour(g.evaluate(0.49), BLUE);
        assert_colour(g.evaluate(0.51), RED);
        assert_colour(g.evaluate(0.75), RED);
    }

    #[test]
    fn test_rejects_invalid_stops() {
        assert!(Gradient::new(vec![stop(0.0, BLUE)]).is_err());
        assert!(Gradient::new(vec![stop(0.0, BLUE), stop(1.5, RED)]).is_err());
        assert!(Gradient::new(vec![stop(0.8, BLUE), stop(0.2, RED)]).is_err());
    }

    #[test]
    fn test_deserialise_validates() {
        let ok: Gradient = serde_json::from_str(
            r#"[{"position":0.0,"colour":{"r":0,"g":0,"b":1,"a":1}},
                {"position":1.0,"colour":{"r":1,"g":0,"b":0,"a":1}}]"#,
        )
        .unwrap();
        assert_colour(ok.evaluate(0.5), [0.5, 0.0, 0.5, 1.0]);

        let bad: Result<Gradient, _> =
            serde_json::from_str(r#"[{"position":0.0,"colour":{"r":0,"g":0,"b":1,"a":1}}]"#);
        assert!(bad.is_err());
    }
}
