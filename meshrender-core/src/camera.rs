use crate::conventions;
use crate::error::{Error, Result};
use crate::point::{point_is_finite, vector_is_finite, Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// Squared cross-product norm below which two directions count as parallel
const DEGENERATE_EPS: f32 = 1e-12;

/// A look-at camera described by an eye position, a look target, and an
/// optional up hint.
///
/// When `up` is `None` the canonical vertical axis is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Position of the camera in world space
    pub eye: Point3f,
    /// Point the camera looks at
    pub at: Point3f,
    /// Optional up hint; need not be unit length or orthogonal to the view
    pub up: Option<Vector3f>,
}

impl Camera {
    /// Camera at `eye` looking toward `at`, with the canonical up axis
    pub fn looking_at(eye: Point3f, at: Point3f) -> Self {
        Self { eye, at, up: None }
    }

    /// Replace the up hint
    pub fn with_up(mut self, up: Vector3f) -> Self {
        self.up = Some(up);
        self
    }

    /// Derive the orthonormal view basis for this camera.
    ///
    /// `back` points from the look target toward the eye, so the camera
    /// looks down the negative z axis of the resulting frame. The up hint
    /// is re-orthogonalized against `back`; when the hint is parallel to
    /// the viewing direction a deterministic replacement axis is used
    /// instead, so the same camera always yields the same basis.
    pub fn view_basis(&self) -> Result<ViewBasis> {
        if !point_is_finite(&self.eye) || !point_is_finite(&self.at) {
            return Err(Error::invalid_camera(
                "eye and at positions must be finite",
            ));
        }

        let gaze = self.at - self.eye;
        if gaze.norm_squared() < DEGENERATE_EPS {
            return Err(Error::invalid_camera(format!(
                "eye {:?} and look target {:?} coincide, the view direction is undefined",
                self.eye, self.at
            )));
        }
        let back = -gaze.normalize();

        let hint = match self.up {
            Some(up) => {
                if !vector_is_finite(&up) || up.norm_squared() < DEGENERATE_EPS {
                    return Err(Error::invalid_camera(
                        "up hint must be finite and nonzero",
                    ));
                }
                up.normalize()
            }
            None => conventions::default_up(),
        };

        let mut right = hint.cross(&back);
        if right.norm_squared() < DEGENERATE_EPS {
            right = conventions::fallback_up().cross(&back);
        }
        if right.norm_squared() < DEGENERATE_EPS {
            // The view direction is along the fallback axis as well, so
            // the canonical vertical must be independent of it.
            right = conventions::default_up().cross(&back);
        }

        let right = right.normalize();
        let up = back.cross(&right);

        Ok(ViewBasis {
            eye: self.eye,
            right,
            up,
            back,
        })
    }
}

/// An orthonormal camera frame.
///
/// `right`, `up` and `back` are unit vectors forming a right-handed basis
/// with `back` pointing from the scene toward the eye. Camera-space z is
/// the coordinate along `back`, which makes larger z values closer to the
/// camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    /// Eye position the frame is anchored at
    pub eye: Point3f,
    /// Unit vector along the image x axis
    pub right: Vector3f,
    /// Unit vector along the image y axis
    pub up: Vector3f,
    /// Unit vector from the look target toward the eye
    pub back: Vector3f,
}

impl ViewBasis {
    /// Express a world-space point in this camera frame
    #[inline]
    pub fn to_camera(&self, point: &Point3f) -> Point3f {
        let rel = point - self.eye;
        Point3f::new(self.right.dot(&rel), self.up.dot(&rel), self.back.dot(&rel))
    }
}
