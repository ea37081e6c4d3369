use meshrender_core::{Color3f, Point3f};

/// Doubled signed area of the triangle `(a, b, p)` in image coordinates.
///
/// Image y grows downward, so the value is positive when `p` lies on the
/// clockwise side of the directed edge `a -> b` as seen on screen.
#[inline]
pub fn edge_function(a: &Point3f, b: &Point3f, px: f32, py: f32) -> f32 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

/// Whether a pixel center sitting exactly on the edge `a -> b` belongs to
/// the triangle this edge bounds.
///
/// With positive orientation, edges running toward smaller y bound the
/// triangle on its left, and horizontal edges running toward larger x
/// bound it on top. Claiming exactly those edges gives every boundary
/// pixel a single owner, so triangles sharing an edge neither double-paint
/// nor leave a seam.
#[inline]
fn edge_accepts_zero(a: &Point3f, b: &Point3f) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dy < 0.0 || (dy == 0.0 && dx > 0.0)
}

/// A triangle prepared for rasterization: positively oriented, with its
/// edge tie rules precomputed. Vertex z carries depth; colors stay paired
/// with their vertices through any reorientation.
#[derive(Debug, Clone)]
pub(crate) struct ScreenTriangle {
    vertices: [Point3f; 3],
    colors: [Color3f; 3],
    area2: f32,
    accepts_zero: [bool; 3],
}

impl ScreenTriangle {
    /// Prepare a triangle, or `None` when its signed area is zero
    pub(crate) fn try_new(vertices: [Point3f; 3], colors: [Color3f; 3]) -> Option<Self> {
        let area2 = edge_function(&vertices[0], &vertices[1], vertices[2].x, vertices[2].y);
        if area2 == 0.0 {
            return None;
        }

        // Reorient negatively wound triangles, keeping colors attached
        let (vertices, colors, area2) = if area2 < 0.0 {
            (
                [vertices[0], vertices[2], vertices[1]],
                [colors[0], colors[2], colors[1]],
                -area2,
            )
        } else {
            (vertices, colors, area2)
        };

        let accepts_zero = [
            edge_accepts_zero(&vertices[1], &vertices[2]),
            edge_accepts_zero(&vertices[2], &vertices[0]),
            edge_accepts_zero(&vertices[0], &vertices[1]),
        ];

        Some(Self {
            vertices,
            colors,
            area2,
            accepts_zero,
        })
    }

    /// Rows and columns of candidate pixel centers, clipped to the image:
    /// `(row_start, row_end, col_start, col_end)`, ends inclusive.
    /// `None` when the triangle misses every pixel center.
    pub(crate) fn pixel_bounds(
        &self,
        height: usize,
        width: usize,
    ) -> Option<(usize, usize, usize, usize)> {
        let [v0, v1, v2] = &self.vertices;
        let min_x = v0.x.min(v1.x).min(v2.x);
        let max_x = v0.x.max(v1.x).max(v2.x);
        let min_y = v0.y.min(v1.y).min(v2.y);
        let max_y = v0.y.max(v1.y).max(v2.y);

        // Pixel (row, col) samples at (col + 0.5, row + 0.5)
        let col_start = (min_x - 0.5).ceil().max(0.0);
        let col_end = (max_x - 0.5).floor().min(width as f32 - 1.0);
        let row_start = (min_y - 0.5).ceil().max(0.0);
        let row_end = (max_y - 0.5).floor().min(height as f32 - 1.0);

        if col_start > col_end || row_start > row_end {
            return None;
        }
        Some((
            row_start as usize,
            row_end as usize,
            col_start as usize,
            col_end as usize,
        ))
    }

    /// Barycentric weights at an image position, or `None` when the
    /// position is not covered under the edge tie rules
    #[inline]
    pub(crate) fn coverage(&self, x: f32, y: f32) -> Option<(f32, f32, f32)> {
        let [v0, v1, v2] = &self.vertices;
        let w0 = edge_function(v1, v2, x, y);
        let w1 = edge_function(v2, v0, x, y);
        let w2 = edge_function(v0, v1, x, y);

        let inside = (w0 > 0.0 || (w0 == 0.0 && self.accepts_zero[0]))
            && (w1 > 0.0 || (w1 == 0.0 && self.accepts_zero[1]))
            && (w2 > 0.0 || (w2 == 0.0 && self.accepts_zero[2]));
        if !inside {
            return None;
        }

        let inv_area2 = 1.0 / self.area2;
        Some((w0 * inv_area2, w1 * inv_area2, w2 * inv_area2))
    }

    /// Interpolated depth at the given barycentric weights
    #[inline]
    pub(crate) fn depth_at(&self, weights: (f32, f32, f32)) -> f32 {
        weights.0 * self.vertices[0].z
            + weights.1 * self.vertices[1].z
            + weights.2 * self.vertices[2].z
    }

    /// Interpolated color at the given barycentric weights
    #[inline]
    pub(crate) fn color_at(&self, weights: (f32, f32, f32)) -> Color3f {
        weights.0 * self.colors[0] + weights.1 * self.colors[1] + weights.2 * self.colors[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn red() -> Color3f {
        Color3f::new(1.0, 0.0, 0.0)
    }

    fn rgb_corners() -> [Color3f; 3] {
        [
            Color3f::new(1.0, 0.0, 0.0),
            Color3f::new(0.0, 1.0, 0.0),
            Color3f::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_edge_function_signs() {
        let a = Point3f::new(0.0, 0.0, 0.0);
        let b = Point3f::new(4.0, 0.0, 0.0);
        // Below the edge on screen (larger y) is the positive side
        assert!(edge_function(&a, &b, 2.0, 1.0) > 0.0);
        assert!(edge_function(&a, &b, 2.0, -1.0) < 0.0);
        assert_eq!(edge_function(&a, &b, 2.0, 0.0), 0.0);
    }

    #[test]
    fn test_degenerate_triangles_are_rejected() {
        let coincident = [
            Point3f::new(1.0, 1.0, 0.0),
            Point3f::new(1.0, 1.0, 0.0),
            Point3f::new(3.0, 2.0, 0.0),
        ];
        assert!(ScreenTriangle::try_new(coincident, [red(); 3]).is_none());

        let collinear = [
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(2.0, 2.0, 0.0),
            Point3f::new(4.0, 4.0, 0.0),
        ];
        assert!(ScreenTriangle::try_new(collinear, [red(); 3]).is_none());
    }

    #[test]
    fn test_winding_does_not_change_interpolation() {
        let forward = ScreenTriangle::try_new(
            [
                Point3f::new(0.0, 0.0, 3.0),
                Point3f::new(4.0, 0.0, 6.0),
                Point3f::new(0.0, 4.0, 9.0),
            ],
            rgb_corners(),
        )
        .unwrap();
        let reversed = ScreenTriangle::try_new(
            [
                Point3f::new(0.0, 0.0, 3.0),
                Point3f::new(0.0, 4.0, 9.0),
                Point3f::new(4.0, 0.0, 6.0),
            ],
            [rgb_corners()[0], rgb_corners()[2], rgb_corners()[1]],
        )
        .unwrap();

        // Sample a strictly interior point
        let weights_f = forward.coverage(1.0, 1.0).unwrap();
        let weights_r = reversed.coverage(1.0, 1.0).unwrap();

        assert_relative_eq!(
            forward.depth_at(weights_f),
            reversed.depth_at(weights_r),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            forward.color_at(weights_f),
            reversed.color_at(weights_r),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_barycentric_weights_at_vertices() {
        let triangle = ScreenTriangle::try_new(
            [
                Point3f::new(1.0, 1.0, 0.0),
                Point3f::new(5.0, 1.0, 0.0),
                Point3f::new(1.0, 5.0, 0.0),
            ],
            rgb_corners(),
        )
        .unwrap();

        let weights = triangle.coverage(1.0, 1.0).unwrap();
        assert_relative_eq!(weights.0, 1.0, epsilon = 1e-6);
        assert_relative_eq!(weights.1, 0.0, epsilon = 1e-6);
        assert_relative_eq!(weights.2, 0.0, epsilon = 1e-6);
        assert_relative_eq!(weights.0 + weights.1 + weights.2, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_shared_edge_has_exactly_one_owner() {
        // A square split along its diagonal; pixel centers on the
        // diagonal must belong to one triangle only
        let lower = ScreenTriangle::try_new(
            [
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(4.0, 0.0, 0.0),
                Point3f::new(0.0, 4.0, 0.0),
            ],
            [red(); 3],
        )
        .unwrap();
        let upper = ScreenTriangle::try_new(
            [
                Point3f::new(4.0, 0.0, 0.0),
                Point3f::new(4.0, 4.0, 0.0),
                Point3f::new(0.0, 4.0, 0.0),
            ],
            [red(); 3],
        )
        .unwrap();

        for (x, y) in [(3.5, 0.5), (2.5, 1.5), (1.5, 2.5), (0.5, 3.5)] {
            let owners = [lower.coverage(x, y).is_some(), upper.coverage(x, y).is_some()];
            assert_eq!(
                owners.iter().filter(|&&owned| owned).count(),
                1,
                "center ({}, {}) should have exactly one owner",
                x,
                y
            );
        }
    }

    #[test]
    fn test_pixel_bounds_clip_to_the_image() {
        let triangle = ScreenTriangle::try_new(
            [
                Point3f::new(-10.0, -10.0, 0.0),
                Point3f::new(30.0, -10.0, 0.0),
                Point3f::new(-10.0, 30.0, 0.0),
            ],
            [red(); 3],
        )
        .unwrap();
        assert_eq!(triangle.pixel_bounds(8, 8), Some((0, 7, 0, 7)));
    }

    #[test]
    fn test_offscreen_triangle_has_no_candidate_pixels() {
        let triangle = ScreenTriangle::try_new(
            [
                Point3f::new(10.0, 10.0, 0.0),
                Point3f::new(14.0, 10.0, 0.0),
                Point3f::new(10.0, 14.0, 0.0),
            ],
            [red(); 3],
        )
        .unwrap();
        assert_eq!(triangle.pixel_bounds(8, 8), None);
    }
}
