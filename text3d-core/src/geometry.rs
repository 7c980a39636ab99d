/// Geometry primitives for mesh construction
use nalgebra::{Point3, Vector3};

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Append another mesh's triangles, preserving both orders
    pub fn merge(&mut self, other: Mesh) {
        self.triangles.extend(other.triangles);
    }

    /// Build the closed box for one lit pixel, spanning
    /// `[x, x+1] x [y, y+1] x [0, depth]`.
    ///
    /// Each face normal points away from the box interior. Boxes for
    /// adjacent pixels are deliberately not merged; every lit cell becomes
    /// an independent closed solid.
    pub fn pixel_box(x: f32, y: f32, depth: f32) -> Self {
        let (x0, x1) = (x, x + 1.0);
        let (y0, y1) = (y, y + 1.0);
        let mut mesh = Self::with_capacity(12);

        // Front face (z = depth)
        mesh.add_triangle(Triangle::new(
            Vertex::new(x0, y0, depth, 0.0, 0.0, 1.0),
            Vertex::new(x1, y0, depth, 0.0, 0.0, 1.0),
            Vertex::new(x0, y1, depth, 0.0, 0.0, 1.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(x1, y0, depth, 0.0, 0.0, 1.0),
            Vertex::new(x1, y1, depth, 0.0, 0.0, 1.0),
            Vertex::new(x0, y1, depth, 0.0, 0.0, 1.0),
        ));

        // Back face (z = 0)
        mesh.add_triangle(Triangle::new(
            Vertex::new(x0, y0, 0.0, 0.0, 0.0, -1.0),
            Vertex::new(x0, y1, 0.0, 0.0, 0.0, -1.0),
            Vertex::new(x1, y0, 0.0, 0.0, 0.0, -1.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(x1, y0, 0.0, 0.0, 0.0, -1.0),
            Vertex::new(x0, y1, 0.0, 0.0, 0.0, -1.0),
            Vertex::new(x1, y1, 0.0, 0.0, 0.0, -1.0),
        ));

        // Left face (x = x0)
        mesh.add_triangle(Triangle::new(
            Vertex::new(x0, y0, depth, -1.0, 0.0, 0.0),
            Vertex::new(x0, y1, depth, -1.0, 0.0, 0.0),
            Vertex::new(x0, y0, 0.0, -1.0, 0.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(x0, y1, depth, -1.0, 0.0, 0.0),
            Vertex::new(x0, y1, 0.0, -1.0, 0.0, 0.0),
            Vertex::new(x0, y0, 0.0, -1.0, 0.0, 0.0),
        ));

        // Right face (x = x1)
        mesh.add_triangle(Triangle::new(
            Vertex::new(x1, y0, depth, 1.0, 0.0, 0.0),
            Vertex::new(x1, y0, 0.0, 1.0, 0.0, 0.0),
            Vertex::new(x1, y1, depth, 1.0, 0.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(x1, y1, depth, 1.0, 0.0, 0.0),
            Vertex::new(x1, y0, 0.0, 1.0, 0.0, 0.0),
            Vertex::new(x1, y1, 0.0, 1.0, 0.0, 0.0),
        ));

        // Row-start edge face (y = y0)
        mesh.add_triangle(Triangle::new(
            Vertex::new(x0, y0, depth, 0.0, -1.0, 0.0),
            Vertex::new(x0, y0, 0.0, 0.0, -1.0, 0.0),
            Vertex::new(x1, y0, depth, 0.0, -1.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(x1, y0, depth, 0.0, -1.0, 0.0),
            Vertex::new(x0, y0, 0.0, 0.0, -1.0, 0.0),
            Vertex::new(x1, y0, 0.0, 0.0, -1.0, 0.0),
        ));

        // Row-end edge face (y = y1)
        mesh.add_triangle(Triangle::new(
            Vertex::new(x0, y1, depth, 0.0, 1.0, 0.0),
            Vertex::new(x1, y1, depth, 0.0, 1.0, 0.0),
            Vertex::new(x0, y1, 0.0, 0.0, 1.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(x1, y1, depth, 0.0, 1.0, 0.0),
            Vertex::new(x1, y1, 0.0, 0.0, 1.0, 0.0),
            Vertex::new(x0, y1, 0.0, 0.0, 1.0, 0.0),
        ));

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_box_triangle_count() {
        let mesh = Mesh::pixel_box(3.0, 7.0, 10.0);
        assert_eq!(mesh.triangles.len(), 12);
    }

    #[test]
    fn test_pixel_box_winding_matches_stored_normals() {
        let mesh = Mesh::pixel_box(2.0, 5.0, 4.0);
        for triangle in &mesh.triangles {
            let computed = triangle.calculate_normal();
            let stored = triangle.vertices[0].normal;
            assert!(
                computed.dot(&stored) > 0.99,
                "winding disagrees with face normal {:?}",
                stored
            );
        }
    }

    #[test]
    fn test_pixel_box_is_closed() {
        // A closed surface's area-weighted normals sum to zero.
        let mesh = Mesh::pixel_box(0.0, 0.0, 2.5);
        let mut sum = Vector3::zeros();
        for triangle in &mesh.triangles {
            let v0 = triangle.vertices[0].position;
            let v1 = triangle.vertices[1].position;
            let v2 = triangle.vertices[2].position;
            sum += (v1 - v0).cross(&(v2 - v0));
        }
        assert!(sum.norm() < 1e-5);
    }

    #[test]
    fn test_pixel_box_bounds() {
        let mesh = Mesh::pixel_box(4.0, 9.0, 10.0);
        let mut min = Vector3::repeat(f32::INFINITY);
        let mut max = Vector3::repeat(f32::NEG_INFINITY);
        for triangle in &mesh.triangles {
            for vertex in &triangle.vertices {
                min = min.inf(&vertex.position.coords);
                max = max.sup(&vertex.position.coords);
            }
        }
        assert_eq!(min, Vector3::new(4.0, 9.0, 0.0));
        assert_eq!(max, Vector3::new(5.0, 10.0, 10.0));
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut first = Mesh::pixel_box(0.0, 0.0, 1.0);
        let second = Mesh::pixel_box(10.0, 0.0, 1.0);
        first.merge(second);

        assert_eq!(first.triangles.len(), 24);
        // First 12 triangles still belong to the first box.
        assert!(first.triangles[0].vertices[0].position.x < 2.0);
        assert!(first.triangles[12].vertices[0].position.x >= 10.0);
    }
}
