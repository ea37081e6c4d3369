use meshrender_core::Color3f;

/// Options for one rasterization call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterConfig {
    /// Color every pixel starts at
    pub background: Color3f,
    /// Rows per horizontal band when rendering in parallel
    pub tile_rows: usize,
    /// Spread bands across the rayon thread pool; the output is
    /// identical either way
    pub parallel: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            background: Color3f::zeros(),
            tile_rows: 64,
            parallel: true,
        }
    }
}

impl RasterConfig {
    /// Configuration that keeps everything on the calling thread
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Set the background color
    pub fn with_background(mut self, background: Color3f) -> Self {
        self.background = background;
        self
    }

    /// Set the band height used for parallel rendering
    pub fn with_tile_rows(mut self, tile_rows: usize) -> Self {
        self.tile_rows = tile_rows;
        self
    }

    /// Enable or disable parallel rendering
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
