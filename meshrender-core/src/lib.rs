//! Core data structures and conventions for meshrender
//!
//! This crate provides the shared vocabulary of the rendering pipeline:
//! colored meshes, cameras, point lights, the raster image the pipeline
//! produces, the coordinate-space conventions every stage agrees on, and
//! the common error type.

pub mod camera;
pub mod conventions;
pub mod error;
pub mod image;
pub mod light;
pub mod mesh;
pub mod point;

pub use camera::*;
pub use error::*;
pub use image::*;
pub use light::*;
pub use mesh::*;
pub use point::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Point3, Vector3};
