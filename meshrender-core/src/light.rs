use crate::point::{Color3f, Point3f};
use serde::{Deserialize, Serialize};

/// A point light source in world space.
///
/// `intensity` is a per-channel multiplier. Values outside the unit range
/// are allowed and simply brighten or darken the lit surface before the
/// final clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// Position of the light in world space
    pub position: Point3f,
    /// RGB intensity of the light
    pub intensity: Color3f,
}

impl PointLight {
    /// Create a light at `position` with the given RGB intensity
    pub fn new(position: Point3f, intensity: Color3f) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// White light of unit intensity at `position`
    pub fn white(position: Point3f) -> Self {
        Self::new(position, Color3f::new(1.0, 1.0, 1.0))
    }
}
