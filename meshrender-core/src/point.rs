use nalgebra::{Matrix3, Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point coordinates
pub type Vector3f = Vector3<f32>;

/// A 3x3 matrix with floating point coordinates
pub type Matrix3f = Matrix3<f32>;

/// An RGB color with one floating point value per channel, nominally in [0, 1]
pub type Color3f = Vector3<f32>;

/// Clamp every channel of a color into the unit range
#[inline]
pub fn clamp_color(color: &Color3f) -> Color3f {
    Color3f::new(
        color.x.clamp(0.0, 1.0),
        color.y.clamp(0.0, 1.0),
        color.z.clamp(0.0, 1.0),
    )
}

/// True when every coordinate of the point is finite
#[inline]
pub fn point_is_finite(point: &Point3f) -> bool {
    point.coords.iter().all(|c| c.is_finite())
}

/// True when every coordinate of the vector is finite
#[inline]
pub fn vector_is_finite(vector: &Vector3f) -> bool {
    vector.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_color() {
        let clamped = clamp_color(&Color3f::new(-0.5, 0.25, 1.75));
        assert_eq!(clamped, Color3f::new(0.0, 0.25, 1.0));
    }

    #[test]
    fn test_finite_checks() {
        assert!(point_is_finite(&Point3f::new(1.0, 2.0, 3.0)));
        assert!(!point_is_finite(&Point3f::new(f32::NAN, 0.0, 0.0)));
        assert!(vector_is_finite(&Vector3f::new(0.0, -1.0, 1e30)));
        assert!(!vector_is_finite(&Vector3f::new(0.0, f32::INFINITY, 0.0)));
    }
}
