use meshrender_core::{point_is_finite, Error, Point3f, Result};
use nalgebra::Perspective3;
use rayon::prelude::*;

/// Orthographic projection.
///
/// Keeps camera-space x and y as-is; z rides along unchanged as the depth
/// value. No division happens, so depth ordering is preserved exactly.
pub fn orthographic_project(vertices: &[Point3f]) -> Vec<Point3f> {
    vertices.to_vec()
}

/// Parameters of a symmetric perspective frustum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveParams {
    /// Vertical field of view in degrees, in (0, 180)
    pub fovy_degrees: f32,
    /// Image plane width over height
    pub aspect: f32,
    /// Near clip distance, positive
    pub near: f32,
    /// Far clip distance, beyond `near`
    pub far: f32,
}

impl PerspectiveParams {
    fn validate(&self) -> Result<()> {
        if !self.fovy_degrees.is_finite()
            || self.fovy_degrees <= 0.0
            || self.fovy_degrees >= 180.0
        {
            return Err(Error::invalid_transform(format!(
                "field of view must lie in (0, 180) degrees, got {}",
                self.fovy_degrees
            )));
        }
        if !self.aspect.is_finite() || self.aspect <= 0.0 {
            return Err(Error::invalid_transform(format!(
                "aspect ratio must be positive, got {}",
                self.aspect
            )));
        }
        if !self.near.is_finite() || !self.far.is_finite() || self.near <= 0.0 {
            return Err(Error::invalid_transform(format!(
                "clip distances must be finite with a positive near plane, got near {} far {}",
                self.near, self.far
            )));
        }
        if self.far <= self.near {
            return Err(Error::invalid_transform(format!(
                "far plane {} must lie beyond near plane {}",
                self.far, self.near
            )));
        }
        Ok(())
    }
}

impl Default for PerspectiveParams {
    fn default() -> Self {
        Self {
            fovy_degrees: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Perspective projection into normalized device coordinates.
///
/// For points inside the frustum x and y land in [-1, 1]. The projective
/// divide flips depth ordering, so z is negated afterwards to keep the
/// larger-is-closer rule the rasterizer expects.
pub fn perspective_project(
    vertices: &[Point3f],
    params: &PerspectiveParams,
) -> Result<Vec<Point3f>> {
    params.validate()?;
    let projection = Perspective3::new(
        params.aspect,
        params.fovy_degrees.to_radians(),
        params.near,
        params.far,
    );
    vertices
        .par_iter()
        .enumerate()
        .map(|(index, vertex)| {
            let ndc = projection.project_point(vertex);
            let projected = Point3f::new(ndc.x, ndc.y, -ndc.z);
            if point_is_finite(&projected) {
                Ok(projected)
            } else {
                Err(Error::NumericOverflow {
                    stage: "perspective projection",
                    index,
                })
            }
        })
        .collect()
}

/// Map projected coordinates into pixel space.
///
/// The coordinate origin moves to the image center, x becomes the column
/// coordinate, and y flips so rows grow downward from the top of the
/// image. Depth passes through untouched. Outputs are fractional; the
/// rasterizer samples pixel centers, so nothing is rounded here.
pub fn to_image_coords(
    vertices: &[Point3f],
    height: usize,
    width: usize,
) -> Result<Vec<Point3f>> {
    check_dimensions(height, width)?;
    let (h, w) = (height as f32, width as f32);
    vertices
        .par_iter()
        .enumerate()
        .map(|(index, vertex)| {
            let mapped = Point3f::new(
                vertex.x + w / 2.0,
                h - 1.0 - (vertex.y + h / 2.0),
                vertex.z,
            );
            if point_is_finite(&mapped) {
                Ok(mapped)
            } else {
                Err(Error::NumericOverflow {
                    stage: "image mapping",
                    index,
                })
            }
        })
        .collect()
}

/// Map normalized device coordinates into pixel space, stretching the
/// unit square over the image dimensions before recentering and flipping
pub fn ndc_to_image_coords(
    vertices: &[Point3f],
    height: usize,
    width: usize,
) -> Result<Vec<Point3f>> {
    check_dimensions(height, width)?;
    let (h, w) = (height as f32, width as f32);
    vertices
        .par_iter()
        .enumerate()
        .map(|(index, vertex)| {
            let mapped = Point3f::new(
                vertex.x * w / 2.0 + w / 2.0,
                h - 1.0 - (vertex.y * h / 2.0 + h / 2.0),
                vertex.z,
            );
            if point_is_finite(&mapped) {
                Ok(mapped)
            } else {
                Err(Error::NumericOverflow {
                    stage: "image mapping",
                    index,
                })
            }
        })
        .collect()
}

fn check_dimensions(height: usize, width: usize) -> Result<()> {
    if height == 0 || width == 0 {
        return Err(Error::invalid_image(format!(
            "raster dimensions must be positive, got {}x{}",
            height, width
        )));
    }
    Ok(())
}
