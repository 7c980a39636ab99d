/// Binary STL writer
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};
use crate::geometry::{Mesh, Triangle};

const HEADER_TAG: &[u8] = b"text3d stl export";

/// Write a mesh as binary STL: an 80-byte header, a little-endian u32
/// triangle count, then one 50-byte record per triangle (normal, three
/// vertices, attribute count 0).
pub fn write_stl(mesh: &Mesh, path: &Path) -> ConvertResult<()> {
    let file = File::create(path).map_err(|e| ConvertError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    write_mesh(&mut writer, mesh).map_err(|e| ConvertError::write(path, e))?;
    writer.flush().map_err(|e| ConvertError::write(path, e))?;

    log::info!(
        "wrote {} triangles to {}",
        mesh.triangles.len(),
        path.display()
    );
    Ok(())
}

fn write_mesh<W: Write>(writer: &mut W, mesh: &Mesh) -> io::Result<()> {
    let mut header = [0u8; 80];
    header[..HEADER_TAG.len()].copy_from_slice(HEADER_TAG);
    writer.write_all(&header)?;

    writer.write_all(&(mesh.triangles.len() as u32).to_le_bytes())?;

    for triangle in &mesh.triangles {
        let normal = face_normal(triangle);
        write_vector(writer, normal)?;
        for vertex in &triangle.vertices {
            let p = vertex.position;
            write_vector(writer, [p.x, p.y, p.z])?;
        }
        // Attribute byte count
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

fn write_vector<W: Write>(writer: &mut W, v: [f32; 3]) -> io::Result<()> {
    for component in v {
        writer.write_all(&component.to_le_bytes())?;
    }
    Ok(())
}

/// Face normal from the vertex positions, zero for degenerate triangles
fn face_normal(triangle: &Triangle) -> [f32; 3] {
    let v0 = triangle.vertices[0].position;
    let v1 = triangle.vertices[1].position;
    let v2 = triangle.vertices[2].position;
    let normal = (v1 - v0).cross(&(v2 - v0));
    let len = normal.norm();
    if len > 0.0 {
        [normal.x / len, normal.y / len, normal.z / len]
    } else {
        [0.0, 0.0, 0.0]
    }
}
