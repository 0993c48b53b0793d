/// Linear RGBA palette matching the editor's named colours
pub type RgbaArray = [f32; 4];

pub const BLUE: RgbaArray = [0.0, 0.0, 1.0, 1.0];
pub const GREEN: RgbaArray = [0.0, 1.0, 0.0, 1.0];
pub const RED: RgbaArray = [1.0, 0.0, 0.0, 1.0];
pub const YELLOW: RgbaArray = [1.0, 0.921_568_6, 0.015_686_275, 1.0];
pub const MAGENTA: RgbaArray = [1.0, 0.0, 1.0, 1.0];
pub const CYAN: RgbaArray = [0.0, 1.0, 1.0, 1.0];
pub const WHITE: RgbaArray = [1.0, 1.0, 1.0, 1.0];

/// Translucent grey used for solid geometry clouds
pub const GEOMETRY_GREY: RgbaArray = [0.5, 0.5, 0.5, 0.3];

/// Default height gradient stops (position, colour)
pub const HEIGHT_GRADIENT: &[(f32, RgbaArray)] = &[(0.0, BLUE), (0.5, GREEN), (1.0, RED)];

/// Default colour per zone, paired with `layer::ZONE_FILES`
pub const ZONE_COLOURS: &[RgbaArray] = &[RED, GREEN, BLUE, YELLOW, MAGENTA];
