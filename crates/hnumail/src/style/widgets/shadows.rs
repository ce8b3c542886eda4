//! Shadow presets and rounded corner radii.

use iced::{Shadow, Vector};

use super::palette;

/// Rounded corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 6.0;
    pub const LARGE: f32 = 10.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

pub fn subtle() -> Shadow {
    Shadow {
        color: palette::current().shadow,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    }
}

pub fn raised() -> Shadow {
    Shadow {
        color: palette::current().shadow_medium,
        offset: Vector::new(0.0, 4.0),
        blur_radius: 12.0,
    }
}
