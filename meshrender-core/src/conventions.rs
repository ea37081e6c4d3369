//! Coordinate-space and depth conventions shared by every pipeline stage.
//!
//! * **World space** is right-handed with y up.
//! * **Camera space** places the camera at the origin looking down the
//!   negative z axis. Camera-space z doubles as the depth value, so
//!   fragments with larger depth are closer to the camera.
//! * **Image space** has x growing rightward along columns and y growing
//!   downward along rows, with the origin at the top-left pixel; the
//!   camera axis maps to the image center.

use crate::point::Vector3f;

/// Depth every pixel starts at: infinitely far under the
/// larger-is-closer rule
pub const BACKGROUND_DEPTH: f32 = f32::NEG_INFINITY;

/// The depth test shared by the whole pipeline.
///
/// A candidate fragment replaces the stored one only when its depth is
/// strictly larger, so on exact ties the earlier write survives.
#[inline]
pub fn is_closer(candidate: f32, current: f32) -> bool {
    candidate > current
}

/// Vertical axis assumed when a camera is built without an up hint
#[inline]
pub fn default_up() -> Vector3f {
    Vector3f::y()
}

/// Replacement axis tried first when the up hint is parallel to the
/// viewing direction
#[inline]
pub fn fallback_up() -> Vector3f {
    Vector3f::z()
}
