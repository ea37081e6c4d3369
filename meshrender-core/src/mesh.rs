use crate::error::{Error, Result};
use crate::point::{Color3f, Point3f};
use serde::{Deserialize, Serialize};

/// A triangle mesh with one color per vertex.
///
/// `vertices` and `colors` are parallel arrays and `triangles` indexes
/// into them. Construction validates the cross references, and the
/// pipeline never mutates a mesh afterwards: every stage returns fresh
/// arrays instead of writing through to its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoredMesh {
    /// Vertex positions
    pub vertices: Vec<Point3f>,
    /// Vertex index triples, one per triangle
    pub triangles: Vec<[usize; 3]>,
    /// Per-vertex colors, parallel to `vertices`
    pub colors: Vec<Color3f>,
}

impl ColoredMesh {
    /// Create a mesh from vertex positions, triangle indices, and
    /// per-vertex colors
    pub fn new(
        vertices: Vec<Point3f>,
        triangles: Vec<[usize; 3]>,
        colors: Vec<Color3f>,
    ) -> Result<Self> {
        validate_mesh(&vertices, &triangles, &colors)?;
        Ok(Self {
            vertices,
            triangles,
            colors,
        })
    }

    /// Number of vertices in the mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Axis-aligned bounding box of the vertices, as `(min, max)` corners.
    /// Returns `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3f, Point3f)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for vertex in &self.vertices {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }

        Some((min, max))
    }

    /// Center of the bounding box. Returns `None` for an empty mesh.
    pub fn center(&self) -> Option<Point3f> {
        self.bounding_box()
            .map(|(min, max)| Point3f::new(
                (min.x + max.x) / 2.0,
                (min.y + max.y) / 2.0,
                (min.z + max.z) / 2.0,
            ))
    }

    /// Vertical extent of the bounding box, handy for fitting a mesh to a
    /// target height. Returns 0.0 for an empty mesh.
    pub fn height_extent(&self) -> f32 {
        self.bounding_box()
            .map(|(min, max)| max.y - min.y)
            .unwrap_or(0.0)
    }
}

/// Check that every triangle index is in range and that the color array
/// is parallel to the vertex array
pub fn validate_mesh(
    vertices: &[Point3f],
    triangles: &[[usize; 3]],
    colors: &[Color3f],
) -> Result<()> {
    if colors.len() != vertices.len() {
        return Err(Error::invalid_mesh(format!(
            "expected {} colors to match the vertex count, found {}",
            vertices.len(),
            colors.len()
        )));
    }
    validate_triangles(vertices, triangles)
}

/// Check that every triangle index references an existing vertex
pub fn validate_triangles(vertices: &[Point3f], triangles: &[[usize; 3]]) -> Result<()> {
    for (triangle, indices) in triangles.iter().enumerate() {
        for (slot, &index) in indices.iter().enumerate() {
            if index >= vertices.len() {
                return Err(Error::invalid_mesh(format!(
                    "triangle {} slot {} references vertex {}, but the mesh has {} vertices",
                    triangle,
                    slot,
                    index,
                    vertices.len()
                )));
            }
        }
    }
    Ok(())
}
