use meshrender_core::{point_is_finite, Error, Matrix3f, Point3f, Result};
use nalgebra::Rotation3;
use rayon::prelude::*;

/// Build a rotation matrix from per-axis angles in degrees.
///
/// Rotations are right-handed about the fixed world axes and compose as
/// `Rz * Ry * Rx`: the x rotation is applied first, then y, then z. A
/// positive angle turns counter-clockwise when viewed from the positive
/// end of its axis, so 90 degrees about y carries +x onto -z.
pub fn rotation_from_degrees(angles: [f32; 3]) -> Matrix3f {
    Rotation3::from_euler_angles(
        angles[0].to_radians(),
        angles[1].to_radians(),
        angles[2].to_radians(),
    )
    .into_inner()
}

/// Rotate every vertex about the origin, without scaling or translating
pub fn rotate(vertices: &[Point3f], angles: [f32; 3]) -> Result<Vec<Point3f>> {
    let rotation = rotation_from_degrees(angles);
    vertices
        .par_iter()
        .enumerate()
        .map(|(index, vertex)| {
            let rotated = Point3f::from(rotation * vertex.coords);
            if point_is_finite(&rotated) {
                Ok(rotated)
            } else {
                Err(Error::NumericOverflow {
                    stage: "rotation",
                    index,
                })
            }
        })
        .collect()
}

/// True when `rotation` is orthonormal with positive determinant, within
/// `epsilon` in the Frobenius norm
pub fn is_rotation_matrix(rotation: &Matrix3f, epsilon: f32) -> bool {
    if !rotation.iter().all(|c| c.is_finite()) {
        return false;
    }
    let gram = rotation.transpose() * rotation;
    (gram - Matrix3f::identity()).norm() <= epsilon && rotation.determinant() > 0.0
}
