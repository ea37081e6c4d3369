//! Serial versus banded rasterization benchmark
//!
//! Runs the staged pipeline by hand on grids of growing density, then
//! rasterizes each scene twice, once serially and once with the banded
//! parallel path, and reports timings alongside an exactness check.

use meshrender_core::{Camera, Color3f, ColoredMesh, Point3f, PointLight};
use meshrender_lighting::add_light;
use meshrender_raster::{render_colors, RasterConfig};
use meshrender_transform::{orthographic_project, to_camera_space, to_image_coords};
use std::time::Instant;

const IMAGE_SIZE: usize = 512;

fn main() -> anyhow::Result<()> {
    println!("Banded Rasterizer Benchmark");
    println!("===========================\n");

    let camera = Camera::looking_at(Point3f::new(0.0, 0.0, 200.0), Point3f::origin());
    let light = PointLight::white(Point3f::new(-128.0, -128.0, 300.0));

    let grid_sizes = [32, 64, 128, 256];
    for &size in &grid_sizes {
        println!("Grid {0}x{0}", size);
        println!("{}", "-".repeat(40));

        let mesh = create_wave_grid(size);

        // Stage the scene once so both runs rasterize identical input
        let lit = add_light(&mesh.vertices, &mesh.triangles, &mesh.colors, &[light])?;
        let viewed = to_camera_space(&mesh.vertices, &camera)?;
        let screen = to_image_coords(&orthographic_project(&viewed), IMAGE_SIZE, IMAGE_SIZE)?;

        let serial_start = Instant::now();
        let serial = render_colors(
            &screen,
            &mesh.triangles,
            &lit,
            IMAGE_SIZE,
            IMAGE_SIZE,
            &RasterConfig::serial(),
        )?;
        let serial_time = serial_start.elapsed();
        println!("Serial: {} triangles in {:?}", mesh.triangles.len(), serial_time);

        let banded_start = Instant::now();
        let banded = render_colors(
            &screen,
            &mesh.triangles,
            &lit,
            IMAGE_SIZE,
            IMAGE_SIZE,
            &RasterConfig::default(),
        )?;
        let banded_time = banded_start.elapsed();
        println!("Banded: {} triangles in {:?}", mesh.triangles.len(), banded_time);

        let speedup = serial_time.as_secs_f32() / banded_time.as_secs_f32();
        println!("Speedup: {:.2}x", speedup);

        if serial == banded {
            println!("Outputs match exactly\n");
        } else {
            anyhow::bail!("serial and banded renders disagree at grid size {}", size);
        }
    }

    println!("Benchmark completed!");
    Ok(())
}

/// A sine-rippled square sheet spanning most of the view, dense enough
/// to give the rasterizer real work
fn create_wave_grid(size: usize) -> ColoredMesh {
    let mut vertices = Vec::with_capacity(size * size);
    let mut colors = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let u = col as f32 / (size - 1) as f32;
            let v = row as f32 / (size - 1) as f32;
            let wave = (u * 12.0).sin() * (v * 12.0).cos();
            vertices.push(Point3f::new(
                (u - 0.5) * 400.0,
                (v - 0.5) * 400.0,
                wave * 25.0,
            ));
            colors.push(Color3f::new(u, 0.5 + 0.5 * wave, 1.0 - v));
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
