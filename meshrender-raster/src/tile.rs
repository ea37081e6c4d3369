use crate::edge::ScreenTriangle;
use crate::render::draw_rows;
use meshrender_core::Color3f;
use rayon::prelude::*;

/// Rasterize by splitting the image into horizontal bands of `tile_rows`
/// rows and fanning the bands out across the rayon pool.
///
/// Every band owns a disjoint slice of the color and depth buffers, and
/// within a band triangles are drawn in submission order, so the result
/// is bit-identical to a serial scan: parallelism never reorders the
/// depth-test ties.
pub(crate) fn rasterize_banded(
    screen_triangles: &[ScreenTriangle],
    pixels: &mut [Color3f],
    depths: &mut [f32],
    height: usize,
    width: usize,
    tile_rows: usize,
) {
    let tile_rows = tile_rows.max(1);
    let band_count = height.div_ceil(tile_rows);

    // Route each triangle to the bands its pixel bounds touch, keeping
    // submission order within every band
    let mut bands: Vec<Vec<usize>> = vec![Vec::new(); band_count];
    for (index, triangle) in screen_triangles.iter().enumerate() {
        let Some((row_start, row_end, _, _)) = triangle.pixel_bounds(height, width) else {
            continue;
        };
        for band in (row_start / tile_rows)..=(row_end / tile_rows) {
            bands[band].push(index);
        }
    }

    pixels
        .par_chunks_mut(tile_rows * width)
        .zip(depths.par_chunks_mut(tile_rows * width))
        .zip(bands.par_iter())
        .enumerate()
        .for_each(|(band, ((pixel_band, depth_band), routed))| {
            let band_start = band * tile_rows;
            let band_end = (band_start + tile_rows).min(height) - 1;
            for &index in routed {
                let triangle = &screen_triangles[index];
                let Some((row_start, row_end, col_start, col_end)) =
                    triangle.pixel_bounds(height, width)
                else {
                    continue;
                };
                draw_rows(
                    triangle,
                    row_start.max(band_start),
                    row_end.min(band_end),
                    col_start,
                    col_end,
                    band_start,
                    pixel_band,
                    depth_band,
                    width,
                );
            }
        });
}
