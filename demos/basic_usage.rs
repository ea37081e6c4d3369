//! Basic usage example for meshrender
//!
//! This example demonstrates fundamental operations:
//! - Building a colored mesh
//! - Describing a scene
//! - Rendering to an image

use meshrender_core::{Camera, Color3f, ColoredMesh, Point3f, PointLight};
use meshrender_pipeline::{render, RenderParams};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("meshrender Basic Usage");
    println!("======================");

    // A quad facing the camera, built from two triangles
    let mesh = ColoredMesh::new(
        vec![
            Point3f::new(-50.0, -50.0, 0.0),
            Point3f::new(50.0, -50.0, 0.0),
            Point3f::new(50.0, 50.0, 0.0),
            Point3f::new(-50.0, 50.0, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
        vec![
            Color3f::new(1.0, 0.0, 0.0),
            Color3f::new(0.0, 1.0, 0.0),
            Color3f::new(0.0, 0.0, 1.0),
            Color3f::new(1.0, 1.0, 0.0),
        ],
    )?;
    println!(
        "Created mesh with {} vertices and {} triangles",
        mesh.vertices.len(),
        mesh.triangles.len()
    );

    // Look down the z axis from in front, with a light up and to the left
    let camera = Camera::looking_at(Point3f::new(0.0, 0.0, 200.0), Point3f::origin());
    let params = RenderParams::new(camera, 128, 128)
        .with_light(PointLight::white(Point3f::new(-128.0, 128.0, 300.0)));

    let image = render(&mesh, &params)?;

    let covered = image
        .pixels()
        .iter()
        .filter(|pixel| **pixel != Color3f::zeros())
        .count();
    println!(
        "Rendered a {}x{} image with {} covered pixels",
        image.height(),
        image.width(),
        covered
    );

    // The interpolated center mixes all four corner colors
    let center = image.pixel(63, 64);
    println!(
        "Center pixel came out ({:.3}, {:.3}, {:.3})",
        center.x, center.y, center.z
    );

    println!("\nExample completed successfully!");
    Ok(())
}
