use crate::config::RasterConfig;
use crate::edge::ScreenTriangle;
use crate::tile;
use meshrender_core::{
    conventions, point_is_finite, validate_mesh, vector_is_finite, Color3f, Error, Point3f,
    RasterImage, Result,
};

/// Rasterize lit, image-space triangles into a fresh color buffer.
///
/// `vertices` are image-space positions: x is the column coordinate, y
/// the row coordinate, and z the depth, where larger depth is closer to
/// the camera. Each pixel center covered by a triangle receives the
/// barycentrically interpolated color of the nearest covering fragment;
/// everything else keeps the configured background color. Degenerate and
/// fully off-screen triangles are skipped silently.
pub fn render_colors(
    vertices: &[Point3f],
    triangles: &[[usize; 3]],
    colors: &[Color3f],
    height: usize,
    width: usize,
    config: &RasterConfig,
) -> Result<RasterImage> {
    if height == 0 || width == 0 {
        return Err(Error::invalid_image(format!(
            "output dimensions must be positive, got {}x{}",
            height, width
        )));
    }
    let pixels = vec![config.background; height * width];
    render_into(vertices, triangles, colors, pixels, height, width, config)
}

/// Rasterize onto a copy of an existing image instead of a flat
/// background color.
///
/// The background image supplies both the dimensions and the starting
/// pixels; `config.background` is not consulted. Depth still starts
/// infinitely far everywhere, so the mesh always paints over the
/// background where it has coverage.
pub fn render_colors_onto(
    vertices: &[Point3f],
    triangles: &[[usize; 3]],
    colors: &[Color3f],
    background: &RasterImage,
    config: &RasterConfig,
) -> Result<RasterImage> {
    let pixels = background.pixels().to_vec();
    render_into(
        vertices,
        triangles,
        colors,
        pixels,
        background.height(),
        background.width(),
        config,
    )
}

fn render_into(
    vertices: &[Point3f],
    triangles: &[[usize; 3]],
    colors: &[Color3f],
    mut pixels: Vec<Color3f>,
    height: usize,
    width: usize,
    config: &RasterConfig,
) -> Result<RasterImage> {
    validate_mesh(vertices, triangles, colors)?;
    for (index, vertex) in vertices.iter().enumerate() {
        if !point_is_finite(vertex) {
            return Err(Error::NumericOverflow {
                stage: "rasterizer vertex input",
                index,
            });
        }
    }
    for (index, color) in colors.iter().enumerate() {
        if !vector_is_finite(color) {
            return Err(Error::NumericOverflow {
                stage: "rasterizer color input",
                index,
            });
        }
    }

    // Degenerate triangles drop out here; submission order is preserved
    let screen_triangles: Vec<ScreenTriangle> = triangles
        .iter()
        .filter_map(|&[a, b, c]| {
            ScreenTriangle::try_new(
                [vertices[a], vertices[b], vertices[c]],
                [colors[a], colors[b], colors[c]],
            )
        })
        .collect();

    let mut depths = vec![conventions::BACKGROUND_DEPTH; height * width];

    if config.parallel {
        tile::rasterize_banded(
            &screen_triangles,
            &mut pixels,
            &mut depths,
            height,
            width,
            config.tile_rows,
        );
    } else {
        rasterize_serial(&screen_triangles, &mut pixels, &mut depths, height, width);
    }

    RasterImage::from_pixels(height, width, pixels)
}

fn rasterize_serial(
    screen_triangles: &[ScreenTriangle],
    pixels: &mut [Color3f],
    depths: &mut [f32],
    height: usize,
    width: usize,
) {
    for triangle in screen_triangles {
        let Some((row_start, row_end, col_start, col_end)) = triangle.pixel_bounds(height, width)
        else {
            continue;
        };
        draw_rows(
            triangle, row_start, row_end, col_start, col_end, 0, pixels, depths, width,
        );
    }
}

/// Scan one triangle over an inclusive row range, writing into a buffer
/// slice whose first row is `row_offset`
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_rows(
    triangle: &ScreenTriangle,
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
    row_offset: usize,
    pixels: &mut [Color3f],
    depths: &mut [f32],
    width: usize,
) {
    for row in row_start..=row_end {
        let y = row as f32 + 0.5;
        let base = (row - row_offset) * width;
        for col in col_start..=col_end {
            let x = col as f32 + 0.5;
            if let Some(weights) = triangle.coverage(x, y) {
                let depth = triangle.depth_at(weights);
                let index = base + col;
                if conventions::is_closer(depth, depths[index]) {
                    depths[index] = depth;
                    pixels[index] = triangle.color_at(weights);
                }
            }
        }
    }
}
