//! Full pipeline demo
//!
//! Generates a face-like bump surface, stands it 180 units tall, turns
//! it 30 degrees, lights it from the lower left, and saves the render
//! as a PNG.

use clap::Parser;
use image::RgbImage;
use meshrender_core::{Camera, Color3f, ColoredMesh, Point3f, PointLight, Vector3f};
use meshrender_pipeline::{fit_height_scale, render, RenderParams};
use meshrender_transform::SimilarityTransform;

#[derive(Parser)]
#[command(about = "Render a procedurally generated surface to a PNG")]
struct Args {
    /// Output image path
    #[arg(short, long, default_value = "pipeline_demo.png")]
    output: std::path::PathBuf,

    /// Output image height and width in pixels
    #[arg(long, default_value_t = 256)]
    size: usize,

    /// Turn about the vertical axis, in degrees
    #[arg(long, default_value_t = 30.0)]
    yaw: f32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("meshrender Pipeline Demo");
    println!("========================");

    let mesh = create_bump_surface(48);
    println!(
        "Generated a surface with {} vertices and {} triangles",
        mesh.vertices.len(),
        mesh.triangles.len()
    );

    // Scale the mesh to a fixed on-screen height before turning it
    let scale = fit_height_scale(&mesh, 180.0)?;
    let placement =
        SimilarityTransform::from_euler_degrees(scale, [0.0, args.yaw, 0.0], Vector3f::zeros())?;

    let camera = Camera::looking_at(Point3f::new(0.0, 0.0, 200.0), Point3f::origin());
    let params = RenderParams::new(camera, args.size, args.size)
        .with_placement(placement)
        .with_light(PointLight::white(Point3f::new(-128.0, -128.0, 300.0)));

    let rendering = render(&mesh, &params)?;
    let covered = rendering
        .pixels()
        .iter()
        .filter(|pixel| **pixel != Color3f::zeros())
        .count();
    println!(
        "Rendered {}x{} with {:.1}% of pixels covered",
        rendering.height(),
        rendering.width(),
        100.0 * covered as f32 / (args.size * args.size) as f32
    );

    let png = RgbImage::from_raw(
        rendering.width() as u32,
        rendering.height() as u32,
        rendering.to_rgb8(),
    )
    .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match the image dimensions"))?;
    png.save(&args.output)?;
    println!("Saved render to {}", args.output.display());

    Ok(())
}

/// A smooth dome with a raised ridge, colored like a skin tone that
/// darkens down the sides
fn create_bump_surface(size: usize) -> ColoredMesh {
    let mut vertices = Vec::with_capacity(size * size);
    let mut colors = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let u = col as f32 / (size - 1) as f32 * 2.0 - 1.0;
            let v = row as f32 / (size - 1) as f32 * 2.0 - 1.0;
            let dome = (-2.5 * (u * u + v * v)).exp();
            let ridge = 0.2 * (-30.0 * u * u).exp() * (-1.5 * v * v).exp();
            let height = 60.0 * dome + 60.0 * ridge;
            vertices.push(Point3f::new(u * 90.0, v * 110.0, height));

            let shade = 0.55 + 0.45 * dome;
            colors.push(Color3f::new(0.92 * shade, 0.72 * shade, 0.62 * shade));
        }
    }
    let mut triangles = Vec::with_capacity((size - 1) * (size - 1) * 2);
    for row in 0..(size - 1) {
        for col in 0..(size - 1) {
            let tl = row * size + col;
            let tr = tl + 1;
            let bl = (row + 1) * size + col;
            let br = bl + 1;
            triangles.push([tl, bl, tr]);
            triangles.push([tr, bl, br]);
        }
    }
    ColoredMesh::new(vertices, triangles, colors).expect("generator indices stay in range")
}
