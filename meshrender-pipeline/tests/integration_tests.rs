//! Integration tests for meshrender-pipeline
//!
//! These tests run the complete mesh-to-image pipeline and check pixel
//! output, determinism, and failure behavior end to end.

use meshrender_core::{
    Camera, Color3f, ColoredMesh, Error, Point3f, PointLight, RasterImage, Vector3f,
};
use meshrender_pipeline::*;
use meshrender_raster::RasterConfig;
use meshrender_transform::{PerspectiveParams, SimilarityTransform};

/// A square facing +z, centered on the view axis, spanning `half` units
/// in each direction, with a uniform color
fn create_facing_quad(half: f32, depth: f32, color: Color3f) -> ColoredMesh {
    ColoredMesh::new(
        vec![
            Point3f::new(-half, -half, depth),
            Point3f::new(half, -half, depth),
            Point3f::new(half, half, depth),
            Point3f::new(-half, half, depth),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
        vec![color; 4],
    )
    .unwrap()
}

/// A sine-rippled grid roughly the size of a face scan, exercising every
/// stage with nontrivial geometry
fn create_ripple_mesh(size: usize) -> ColoredMesh {
    let mut vertices = Vec::with_capacity(size * size);
    let mut colors = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let fx = x as f32 / (size - 1) as f32;
            let fy = y as f32 / (size - 1) as f32;
            let ripple = (fx * std::f32::consts::PI * 2.0).sin()
                * (fy * std::f32::consts::PI * 2.0).sin();
            vertices.push(Point3f::new(
                (fx - 0.5) * 100.0,
                (fy - 0.5) * 100.0,
                ripple * 15.0,
            ));
            colors.push(Color3f::new(fx, 0.5 + 0.5 * ripple.abs(), fy));
        }
    }
    let mut triangles = Vec::with_capacity((size - 1) * (size - 1) * 2);
    for y in 0..(size - 1) {
        for x in 0..(size - 1) {
            let tl = y * size + x;
            let tr = tl + 1;
            let bl = (y + 1) * size + x;
            let br = bl + 1;
            triangles.push([tl, bl, tr]);
            triangles.push([tr, bl, br]);
        }
    }
    ColoredMesh::new(vertices, triangles, colors).unwrap()
}

fn front_camera() -> Camera {
    Camera::looking_at(Point3f::new(0.0, 0.0, 200.0), Point3f::origin())
}

/// A light so distant that every vertex near the origin sees it exactly
/// head on, letting base colors pass through shading bit for bit
fn distant_headlight() -> PointLight {
    PointLight::white(Point3f::new(0.0, 0.0, 1.0e8))
}

fn count_pixels(image: &RasterImage, color: Color3f) -> usize {
    image.pixels().iter().filter(|&&p| p == color).count()
}

#[test]
fn test_orthographic_quad_lands_centered() {
    // Dyadic color channels and a power-of-two quad span keep the
    // barycentric arithmetic exact, so pixels match the base color bitwise
    let base = Color3f::new(0.75, 0.5, 0.25);
    let mesh = create_facing_quad(64.0, 0.0, base);

    let params = RenderParams::new(front_camera(), 256, 256)
        .with_light(distant_headlight())
        .with_raster(RasterConfig::serial());

    let image = render(&mesh, &params).unwrap();

    // World [-64, 64] maps to a 128x128 pixel block, with the y flip
    // shifting rows up by one
    assert_eq!(count_pixels(&image, base), 128 * 128);
    assert_eq!(*image.pixel(127, 128), base);
    assert_eq!(*image.pixel(63, 64), base);
    assert_eq!(*image.pixel(190, 191), base);
    assert_eq!(*image.pixel(0, 0), Color3f::zeros());
    assert_eq!(*image.pixel(255, 255), Color3f::zeros());
}

#[test]
fn test_unlit_render_equals_distant_headlight() {
    let base = Color3f::new(0.25, 0.5, 0.75);
    let mesh = create_facing_quad(40.0, 0.0, base);

    let unlit = RenderParams::new(front_camera(), 128, 128).with_raster(RasterConfig::serial());
    let headlit = unlit.clone().with_light(distant_headlight());

    let without = render(&mesh, &unlit).unwrap();
    let with = render(&mesh, &headlit).unwrap();
    assert_eq!(without, with);
}

#[test]
fn test_depth_orders_overlapping_quads() {
    let red = Color3f::new(1.0, 0.0, 0.0);
    let blue = Color3f::new(0.0, 0.0, 1.0);

    // A full red square behind, with a nearer blue rectangle over its
    // left half; larger camera-space z wins the overlap
    let vertices = vec![
        Point3f::new(-64.0, -64.0, -10.0),
        Point3f::new(64.0, -64.0, -10.0),
        Point3f::new(64.0, 64.0, -10.0),
        Point3f::new(-64.0, 64.0, -10.0),
        Point3f::new(-64.0, -64.0, 10.0),
        Point3f::new(0.0, -64.0, 10.0),
        Point3f::new(0.0, 64.0, 10.0),
        Point3f::new(-64.0, 64.0, 10.0),
    ];
    let triangles = vec![[0, 1, 2], [0, 2, 3], [4, 5, 6], [4, 6, 7]];
    let mut colors = vec![red; 4];
    colors.extend_from_slice(&[blue; 4]);
    let mesh = ColoredMesh::new(vertices, triangles, colors).unwrap();

    let params = RenderParams::new(front_camera(), 256, 256).with_raster(RasterConfig::serial());
    let image = render(&mesh, &params).unwrap();

    // World x < 0 maps to columns left of 128
    assert_eq!(*image.pixel(100, 70), blue);
    assert_eq!(*image.pixel(100, 150), red);
    assert_eq!(count_pixels(&image, blue), 64 * 128);
    assert_eq!(count_pixels(&image, red), 64 * 128);
}

#[test]
fn test_rotation_turns_a_quad_edge_on() {
    let base = Color3f::new(0.9, 0.9, 0.1);
    let mesh = create_facing_quad(50.0, 0.0, base);

    let face_on = RenderParams::new(front_camera(), 128, 128).with_raster(RasterConfig::serial());
    let edge_on = face_on.clone().with_placement(
        SimilarityTransform::from_euler_degrees(1.0, [0.0, 90.0, 0.0], Vector3f::zeros())
            .unwrap(),
    );

    let visible = render(&mesh, &face_on).unwrap();
    let vanishing = render(&mesh, &edge_on).unwrap();

    assert!(count_pixels(&visible, Color3f::zeros()) < 128 * 128);
    // Rotated 90 degrees about y the quad collapses to a line on screen
    // and rasterizes to nothing
    assert_eq!(count_pixels(&vanishing, Color3f::zeros()), 128 * 128);
}

#[test]
fn test_perspective_makes_near_objects_larger() {
    let base = Color3f::new(0.3, 0.8, 0.3);
    let near = create_facing_quad(30.0, 100.0, base);
    let far = create_facing_quad(30.0, -100.0, base);

    let params = RenderParams::new(front_camera(), 128, 128)
        .with_projection(Projection::Perspective(PerspectiveParams::default()))
        .with_raster(RasterConfig::serial());

    let near_covered = 128 * 128 - count_pixels(&render(&near, &params).unwrap(), Color3f::zeros());
    let far_covered = 128 * 128 - count_pixels(&render(&far, &params).unwrap(), Color3f::zeros());

    assert!(far_covered > 0);
    assert!(near_covered > far_covered);
}

#[test]
fn test_end_to_end_render_is_reproducible() {
    let mesh = create_ripple_mesh(24);
    let scale = fit_height_scale(&mesh, 180.0).unwrap();
    let placement =
        SimilarityTransform::from_euler_degrees(scale, [0.0, 30.0, 0.0], Vector3f::zeros())
            .unwrap();

    let params = RenderParams::new(front_camera(), 256, 256)
        .with_placement(placement)
        .with_light(PointLight::white(Point3f::new(-128.0, -128.0, 300.0)));

    let first = render(&mesh, &params).unwrap();
    let second = render(&mesh, &params).unwrap();
    assert_eq!(first, second);

    // The scene covers a meaningful part of the frame
    let background = count_pixels(&first, Color3f::zeros());
    assert!(background < 256 * 256 / 2);
}

#[test]
fn test_serial_and_banded_rendering_agree() {
    let mesh = create_ripple_mesh(24);
    let scale = fit_height_scale(&mesh, 180.0).unwrap();
    let placement =
        SimilarityTransform::from_euler_degrees(scale, [0.0, 30.0, 0.0], Vector3f::zeros())
            .unwrap();
    let base = RenderParams::new(front_camera(), 256, 256)
        .with_placement(placement)
        .with_light(PointLight::white(Point3f::new(-128.0, -128.0, 300.0)));

    let serial = render(&mesh, &base.clone().with_raster(RasterConfig::serial())).unwrap();
    for tile_rows in [16, 64, 300] {
        let banded = render(
            &mesh,
            &base
                .clone()
                .with_raster(RasterConfig::default().with_tile_rows(tile_rows)),
        )
        .unwrap();
        assert_eq!(serial, banded, "tile_rows = {}", tile_rows);
    }
}

#[test]
fn test_bad_triangle_index_fails_before_rendering() {
    // Bypass the validating constructor to simulate a corrupted mesh
    let mesh = ColoredMesh {
        vertices: vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        ],
        triangles: vec![[0, 1, 3]],
        colors: vec![Color3f::new(0.5, 0.5, 0.5); 3],
    };

    let params = RenderParams::new(front_camera(), 64, 64);
    assert!(matches!(
        render(&mesh, &params),
        Err(Error::InvalidMesh { .. })
    ));
}

#[test]
fn test_degenerate_camera_fails_cleanly() {
    let mesh = create_facing_quad(10.0, 0.0, Color3f::new(1.0, 1.0, 1.0));
    let camera = Camera::looking_at(Point3f::origin(), Point3f::origin());
    let params = RenderParams::new(camera, 64, 64);
    assert!(matches!(
        render(&mesh, &params),
        Err(Error::InvalidCamera { .. })
    ));
}

#[test]
fn test_zero_output_dimensions_fail_cleanly() {
    let mesh = create_facing_quad(10.0, 0.0, Color3f::new(1.0, 1.0, 1.0));
    let params = RenderParams::new(front_camera(), 0, 64);
    assert!(matches!(
        render(&mesh, &params),
        Err(Error::InvalidImage { .. })
    ));
}
