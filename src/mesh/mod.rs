mod export;

pub use export::ExportObj;

use crate::math::{Point3, Vector3, TOLERANCE};

/// A flat-shaded triangle mesh with non-shared vertices.
///
/// Every face owns three fresh vertices even when a position coincides with
/// a neighbouring face, and indices are appended in lockstep with vertices —
/// never reused, never deduplicated. `triangles` holds index triples into
/// `vertices`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpikeMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle).
    pub triangles: Vec<[u32; 3]>,
}

impl SpikeMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one triangle as three fresh vertices plus an index triple.
    ///
    /// For the logical triangle `(a, b, c)` the vertices are pushed in
    /// `(c, b, a)` order, which yields the front-face orientation consuming
    /// renderers expect for this coordinate convention.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_triangle(&mut self, a: Point3, b: Point3, c: Point3) {
        let base = self.vertices.len() as u32;
        self.vertices.push(c);
        self.vertices.push(b);
        self.vertices.push(a);
        self.triangles.push([base, base + 1, base + 2]);
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns whether the mesh holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Computes one flat normal per vertex from the final buffers.
    ///
    /// With fully non-shared vertices, per-vertex recomputation and flat
    /// face normals coincide: all three vertices of a face receive the
    /// face's cross-product normal. A degenerate (zero-area) face keeps the
    /// zero normal — degenerate faces are ordinary output under degenerate
    /// configuration, not an error.
    #[must_use]
    pub fn flat_normals(&self) -> Vec<Vector3> {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for triangle in &self.triangles {
            let [i0, i1, i2] = triangle.map(|i| i as usize);
            let v0 = self.vertices[i0];
            let v1 = self.vertices[i1];
            let v2 = self.vertices[i2];

            let normal = (v1 - v0).cross(&(v2 - v0));
            let length = normal.norm();
            if length > TOLERANCE {
                let normal = normal / length;
                normals[i0] = normal;
                normals[i1] = normal;
                normals[i2] = normal;
            }
        }
        normals
    }
}
