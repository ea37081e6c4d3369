use crate::error::{Error, Result};
use crate::point::{clamp_color, Color3f};

/// A dense row-major RGB image with floating point channels.
///
/// Row 0 is the top of the image; within a row, column 0 is leftmost.
/// Channel values are nominally in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    height: usize,
    width: usize,
    pixels: Vec<Color3f>,
}

impl RasterImage {
    /// Image of the given dimensions with every pixel set to `background`
    pub fn filled(height: usize, width: usize, background: Color3f) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::invalid_image(format!(
                "output dimensions must be positive, got {}x{}",
                height, width
            )));
        }
        Ok(Self {
            height,
            width,
            pixels: vec![background; height * width],
        })
    }

    /// Wrap an existing row-major pixel buffer
    pub fn from_pixels(height: usize, width: usize, pixels: Vec<Color3f>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::invalid_image(format!(
                "output dimensions must be positive, got {}x{}",
                height, width
            )));
        }
        if pixels.len() != height * width {
            return Err(Error::invalid_image(format!(
                "expected {} pixels for a {}x{} image, found {}",
                height * width,
                height,
                width,
                pixels.len()
            )));
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Image height in rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width in columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixel at `(row, col)`
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &Color3f {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) out of bounds for a {}x{} image",
            row,
            col,
            self.height,
            self.width
        );
        &self.pixels[row * self.width + col]
    }

    /// Overwrite the pixel at `(row, col)`
    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, color: Color3f) {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) out of bounds for a {}x{} image",
            row,
            col,
            self.height,
            self.width
        );
        self.pixels[row * self.width + col] = color;
    }

    /// All pixels in row-major order
    #[inline]
    pub fn pixels(&self) -> &[Color3f] {
        &self.pixels
    }

    /// The buffer viewed as a flat channel array, height x width x 3
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Convert to 8-bit RGB bytes, scaling each clamped channel by 255
    /// and truncating
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| {
                let c = clamp_color(color);
                [
                    (c.x * 255.0) as u8,
                    (c.y * 255.0) as u8,
                    (c.z * 255.0) as u8,
                ]
            })
            .collect()
    }
}
