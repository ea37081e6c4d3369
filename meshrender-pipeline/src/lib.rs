//! End-to-end mesh-to-image rendering for meshrender
//!
//! Composes the transform, lighting, and rasterization crates into one
//! call: a colored mesh plus a [`RenderParams`] description of the scene
//! in, a raster image out. Shading happens in world space after
//! placement; the camera, projection, and rasterizer run afterwards, so
//! lighting is independent of where the camera stands.

mod pipeline;

pub use pipeline::{fit_height_scale, render, Projection, RenderParams};
