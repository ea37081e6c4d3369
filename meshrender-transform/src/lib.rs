//! Vertex placement and projection for meshrender
//!
//! This crate moves vertices through the front half of the pipeline:
//! rotation matrices from Euler angles, similarity transforms for world
//! placement, camera framing, and the projections that land vertices in
//! image space ready for rasterization. Every operation returns a fresh
//! vertex array and leaves its input untouched.

pub mod projection;
pub mod rotation;
pub mod similarity;
pub mod view;

pub use projection::*;
pub use rotation::*;
pub use similarity::*;
pub use view::*;
