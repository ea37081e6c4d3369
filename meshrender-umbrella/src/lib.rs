//! # meshrender
//!
//! A software 3D mesh rendering pipeline for Rust.
//!
//! This is the umbrella crate that provides convenient access to the whole
//! meshrender pipeline. You can use this crate to get everything in one
//! place, or use individual crates for more granular control over
//! dependencies.
//!
//! ## Features
//!
//! - **Core**: Shared data structures (ColoredMesh, Camera, RasterImage, etc.)
//! - **Transform**: Mesh placement, camera, and projection transforms
//! - **Lighting**: Vertex normals and point-light diffuse shading
//! - **Raster**: Depth-buffered triangle rasterization
//! - **Pipeline**: One-call mesh-to-image rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use meshrender::prelude::*;
//!
//! // Build a single colored triangle
//! let mesh = ColoredMesh::new(
//!     vec![
//!         Point3f::new(-40.0, -40.0, 0.0),
//!         Point3f::new(40.0, -40.0, 0.0),
//!         Point3f::new(0.0, 40.0, 10.0),
//!     ],
//!     vec![[0, 1, 2]],
//!     vec![Color3f::new(0.8, 0.2, 0.2); 3],
//! )
//! .unwrap();
//!
//! // Light it and render it from in front
//! let camera = Camera::looking_at(Point3f::new(0.0, 0.0, 200.0), Point3f::origin());
//! let params = RenderParams::new(camera, 256, 256)
//!     .with_light(PointLight::white(Point3f::new(-128.0, -128.0, 300.0)));
//! let image = render(&mesh, &params).unwrap();
//! assert_eq!(image.height(), 256);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables transform, lighting, raster, and pipeline
//! - `transform`: Placement, camera, and projection transforms
//! - `lighting`: Normal estimation and diffuse shading
//! - `raster`: The depth-buffered rasterizer
//! - `pipeline`: The end-to-end render call
//! - `all`: Enables all features

// Re-export core functionality
pub use meshrender_core::*;

// Re-export sub-crates
#[cfg(feature = "transform")]
pub use meshrender_transform as transform;

#[cfg(feature = "lighting")]
pub use meshrender_lighting as lighting;

#[cfg(feature = "raster")]
pub use meshrender_raster as raster;

#[cfg(feature = "pipeline")]
pub use meshrender_pipeline as pipeline;

/// Convenient imports for common use cases
pub mod prelude {
    pub use meshrender_core::*;

    #[cfg(feature = "transform")]
    pub use meshrender_transform::*;

    #[cfg(feature = "lighting")]
    pub use meshrender_lighting::*;

    #[cfg(feature = "raster")]
    pub use meshrender_raster::*;

    #[cfg(feature = "pipeline")]
    pub use meshrender_pipeline::*;
}
