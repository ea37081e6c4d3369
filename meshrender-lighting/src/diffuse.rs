use crate::normals::compute_vertex_normals;
use meshrender_core::{
    clamp_color, validate_mesh, vector_is_finite, Color3f, Error, Point3f, PointLight, Result,
};
use rayon::prelude::*;

/// Lights closer to a vertex than this contribute nothing, since their
/// direction is undefined
const DIRECTION_EPS: f32 = 1e-12;

/// Shade vertex colors with a set of point lights.
///
/// Purely local Lambertian shading: for each vertex, every light
/// contributes its intensity weighted by `max(dot(normal, direction), 0)`
/// where `direction` points from the vertex toward the light. The summed
/// contribution multiplies the base color channelwise and the result is
/// clipped to the unit range. Lights behind a surface add nothing rather
/// than darkening it.
///
/// With no lights the base colors are returned unchanged.
pub fn add_light(
    vertices: &[Point3f],
    triangles: &[[usize; 3]],
    colors: &[Color3f],
    lights: &[PointLight],
) -> Result<Vec<Color3f>> {
    validate_mesh(vertices, triangles, colors)?;
    if lights.is_empty() {
        return Ok(colors.to_vec());
    }

    let normals = compute_vertex_normals(vertices, triangles)?;

    vertices
        .par_iter()
        .zip(normals.par_iter())
        .zip(colors.par_iter())
        .enumerate()
        .map(|(index, ((vertex, normal), base))| {
            let mut diffuse = Color3f::zeros();
            for light in lights {
                let to_light = light.position - vertex;
                let distance = to_light.norm();
                if distance <= DIRECTION_EPS {
                    continue;
                }
                let weight = normal.dot(&to_light) / distance;
                if weight > 0.0 {
                    diffuse += weight * light.intensity;
                }
            }
            // Check finiteness before clipping: clamping would fold an
            // infinite channel into 1.0 and hide the overflow
            let shaded = diffuse.component_mul(base);
            if vector_is_finite(&shaded) {
                Ok(clamp_color(&shaded))
            } else {
                Err(Error::NumericOverflow {
                    stage: "diffuse shading",
                    index,
                })
            }
        })
        .collect()
}
