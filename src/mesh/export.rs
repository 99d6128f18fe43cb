use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExportError, Result};

use super::SpikeMesh;

/// Serializes a [`SpikeMesh`] to Wavefront OBJ text.
///
/// Emits `v` lines for positions, `vn` lines for flat normals, and `f`
/// lines with 1-based `v//vn` references. Vertices and flat normals are
/// parallel arrays, so the same index serves both slots of a reference.
pub struct ExportObj<'a> {
    mesh: &'a SpikeMesh,
}

impl<'a> ExportObj<'a> {
    /// Creates a new `ExportObj` operation.
    #[must_use]
    pub fn new(mesh: &'a SpikeMesh) -> Self {
        Self { mesh }
    }

    /// Executes the export, writing OBJ text to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle index lies outside the vertex buffer
    /// or the writer fails.
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<()> {
        let vertex_count = self.mesh.vertices.len();
        for triangle in &self.mesh.triangles {
            for &index in triangle {
                if index as usize >= vertex_count {
                    return Err(ExportError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    }
                    .into());
                }
            }
        }

        for v in &self.mesh.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z).map_err(ExportError::Io)?;
        }

        let normals = self.mesh.flat_normals();
        for n in &normals {
            writeln!(writer, "vn {} {} {}", n.x, n.y, n.z).map_err(ExportError::Io)?;
        }

        for triangle in &self.mesh.triangles {
            // OBJ indices are 1-based.
            writeln!(
                writer,
                "f {0}//{0} {1}//{1} {2}//{2}",
                triangle[0] + 1,
                triangle[1] + 1,
                triangle[2] + 1,
            )
            .map_err(ExportError::Io)?;
        }

        Ok(())
    }

    /// Executes the export into a file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(ExportError::Io)?;
        let mut writer = BufWriter::new(file);
        self.execute(&mut writer)?;
        writer.flush().map_err(ExportError::Io)?;
        Ok(())
    }
}
