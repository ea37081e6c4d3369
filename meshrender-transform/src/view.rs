use meshrender_core::{point_is_finite, Camera, Error, Point3f, Result};
use rayon::prelude::*;

/// Express world-space vertices in the frame of `camera`.
///
/// The camera looks down the negative z axis of the derived frame, so
/// camera-space z works directly as the depth value consumed by the
/// rasterizer: larger z is closer to the eye.
pub fn to_camera_space(vertices: &[Point3f], camera: &Camera) -> Result<Vec<Point3f>> {
    let basis = camera.view_basis()?;
    vertices
        .par_iter()
        .enumerate()
        .map(|(index, vertex)| {
            let transformed = basis.to_camera(vertex);
            if point_is_finite(&transformed) {
                Ok(transformed)
            } else {
                Err(Error::NumericOverflow {
                    stage: "camera transform",
                    index,
                })
            }
        })
        .collect()
}
