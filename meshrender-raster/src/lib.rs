//! Depth-buffered triangle rasterization for meshrender
//!
//! The rasterizer turns image-space vertices, triangle indices, and lit
//! per-vertex colors into a dense color buffer. Coverage uses the signed
//! edge-function test against pixel centers with a top-left tie rule, so
//! triangles sharing an edge paint every boundary pixel exactly once.
//! Depth resolves with a larger-is-closer z-buffer scoped to the call;
//! the rasterizer itself keeps no state between calls.

pub mod config;
pub mod render;

mod edge;
mod tile;

pub use config::RasterConfig;
pub use render::{render_colors, render_colors_onto};
pub use edge::edge_function;
