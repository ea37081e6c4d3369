//! Vertex normals and diffuse point-light shading for meshrender
//!
//! Shading happens in world space, before the camera transform: normals
//! come from area-weighted face averaging over the triangle mesh, and a
//! purely local Lambertian model accumulates each light's contribution
//! per vertex.

pub mod diffuse;
pub mod normals;

pub use diffuse::*;
pub use normals::*;
