use meshrender_core::{validate_triangles, Point3f, Result, Vector3f};
use rayon::prelude::*;

/// Compute one unit normal per vertex by area-weighted face averaging.
///
/// Each triangle contributes the cross product of two of its edges, whose
/// magnitude is proportional to the triangle's area, to all three of its
/// vertices. Orientation follows the winding order: counter-clockwise
/// vertices seen from a viewpoint produce a normal toward that viewpoint.
/// Degenerate triangles contribute a zero vector, and a vertex whose
/// accumulated normal has zero magnitude falls back to the +x axis so the
/// result is always unit length.
pub fn compute_vertex_normals(
    vertices: &[Point3f],
    triangles: &[[usize; 3]],
) -> Result<Vec<Vector3f>> {
    validate_triangles(vertices, triangles)?;

    let face_normals: Vec<Vector3f> = triangles
        .par_iter()
        .map(|&[a, b, c]| {
            let p0 = vertices[a];
            let p1 = vertices[b];
            let p2 = vertices[c];
            (p0 - p1).cross(&(p0 - p2))
        })
        .collect();

    let mut accumulated = vec![Vector3f::zeros(); vertices.len()];
    for (indices, normal) in triangles.iter().zip(&face_normals) {
        for &index in indices {
            accumulated[index] += *normal;
        }
    }

    Ok(accumulated
        .into_par_iter()
        .map(|normal| {
            if normal.norm_squared() == 0.0 {
                Vector3f::x()
            } else {
                normal.normalize()
            }
        })
        .collect())
}
