use crate::rotation::{is_rotation_matrix, rotation_from_degrees};
use meshrender_core::{point_is_finite, vector_is_finite, Error, Matrix3f, Point3f, Result, Vector3f};
use rayon::prelude::*;

/// Orthonormality tolerance for caller-supplied rotation matrices
const ROTATION_EPS: f32 = 1e-4;

/// A uniform-scale rigid placement applied to world-space vertices:
/// `scale * rotation * v + translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityTransform {
    /// Uniform positive scale factor
    pub scale: f32,
    /// Orthonormal rotation matrix
    pub rotation: Matrix3f,
    /// Translation applied after scaling and rotating
    pub translation: Vector3f,
}

impl SimilarityTransform {
    /// Validate and build a placement.
    ///
    /// The scale must be positive and finite and the rotation orthonormal
    /// with determinant 1; a reflected, sheared, or scaled matrix is a
    /// caller error, not something to correct silently.
    pub fn new(scale: f32, rotation: Matrix3f, translation: Vector3f) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::invalid_transform(format!(
                "scale must be positive and finite, got {}",
                scale
            )));
        }
        if !is_rotation_matrix(&rotation, ROTATION_EPS) {
            return Err(Error::invalid_transform(
                "rotation matrix must be orthonormal with determinant 1",
            ));
        }
        if !vector_is_finite(&translation) {
            return Err(Error::invalid_transform("translation must be finite"));
        }
        Ok(Self {
            scale,
            rotation,
            translation,
        })
    }

    /// The identity placement
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            rotation: Matrix3f::identity(),
            translation: Vector3f::zeros(),
        }
    }

    /// Build a placement from a scale, per-axis rotation angles in
    /// degrees, and a translation
    pub fn from_euler_degrees(scale: f32, angles: [f32; 3], translation: Vector3f) -> Result<Self> {
        Self::new(scale, rotation_from_degrees(angles), translation)
    }

    /// Place a single point
    #[inline]
    pub fn apply(&self, point: &Point3f) -> Point3f {
        Point3f::from(self.scale * (self.rotation * point.coords) + self.translation)
    }

    /// Place every vertex, in parallel.
    ///
    /// Fails if any placed vertex comes out non-finite, naming the vertex
    /// index, so bad data never reaches the rasterizer.
    pub fn apply_all(&self, vertices: &[Point3f]) -> Result<Vec<Point3f>> {
        vertices
            .par_iter()
            .enumerate()
            .map(|(index, vertex)| {
                let placed = self.apply(vertex);
                if point_is_finite(&placed) {
                    Ok(placed)
                } else {
                    Err(Error::NumericOverflow {
                        stage: "similarity transform",
                        index,
                    })
                }
            })
            .collect()
    }
}

impl Default for SimilarityTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_placement_preserves_vertices() {
        let vertices = vec![
            Point3f::new(1.0, -2.0, 3.5),
            Point3f::origin(),
            Point3f::new(-7.25, 0.5, 12.0),
        ];
        let placed = SimilarityTransform::identity()
            .apply_all(&vertices)
            .unwrap();
        for (original, placed) in vertices.iter().zip(&placed) {
            assert_relative_eq!(*original, *placed, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_scale_rotate_translate_order() {
        // Scale by 2, quarter turn about z, then shift along x:
        // (1, 0, 0) -> (0, 2, 0) -> (1, 2, 0)
        let placement = SimilarityTransform::from_euler_degrees(
            2.0,
            [0.0, 0.0, 90.0],
            Vector3f::new(1.0, 0.0, 0.0),
        )
        .unwrap();
        let placed = placement.apply(&Point3f::new(1.0, 0.0, 0.0));
        assert_relative_eq!(placed, Point3f::new(1.0, 2.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_non_positive_scale_is_rejected() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result =
                SimilarityTransform::new(scale, Matrix3f::identity(), Vector3f::zeros());
            assert!(matches!(result, Err(Error::InvalidTransform { .. })));
        }
    }

    #[test]
    fn test_non_orthonormal_rotation_is_rejected() {
        let mut sheared = Matrix3f::identity();
        sheared[(0, 1)] = 0.5;
        let result = SimilarityTransform::new(1.0, sheared, Vector3f::zeros());
        assert!(matches!(result, Err(Error::InvalidTransform { .. })));
    }

    #[test]
    fn test_overflowing_placement_reports_the_vertex() {
        let placement =
            SimilarityTransform::new(1e30, Matrix3f::identity(), Vector3f::zeros()).unwrap();
        let result = placement.apply_all(&[Point3f::new(1e10, 0.0, 0.0)]);
        assert!(matches!(
            result,
            Err(Error::NumericOverflow { index: 0, .. })
        ));
    }
}
