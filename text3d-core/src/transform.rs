/// 3D transformation matrices and mesh canonicalization
use nalgebra::{Matrix4, Vector3};

use crate::geometry::Mesh;

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix about the x axis (the text baseline)
    pub fn rotation_x(angle: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(angle, 0.0, 0.0))
    }

    /// Create a translation matrix
    pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Create a uniform scale matrix
    pub fn scaling(factor: f32) -> Matrix4<f32> {
        Matrix4::new_scaling(factor)
    }

    /// Apply a transform to every vertex of a mesh.
    ///
    /// Positions go through the full matrix; normals skip the translation
    /// part. Only rigid and uniform-scale transforms are used here, so
    /// normal directions stay correct without an inverse-transpose.
    pub fn apply(mesh: &mut Mesh, matrix: &Matrix4<f32>) {
        for triangle in &mut mesh.triangles {
            for vertex in &mut triangle.vertices {
                vertex.position = matrix.transform_point(&vertex.position);
                vertex.normal = matrix.transform_vector(&vertex.normal);
            }
        }
    }
}

/// Normalize a combined mesh into its print-ready pose.
///
/// Rotates the flat-extruded text by +90 degrees about the baseline so the
/// extrusion axis becomes the up axis, recenters it (mean along the text
/// direction and depth, minimum along up so it rests on the ground plane),
/// and applies the uniform output scale.
///
/// Empty meshes are left untouched; callers report those before ever
/// reaching the statistics below.
pub fn canonicalize(mesh: &mut Mesh, scale_factor: f32) {
    if mesh.is_empty() {
        return;
    }

    Transform::apply(mesh, &Transform::rotation_x(std::f32::consts::FRAC_PI_2));

    let mut sum_x = 0.0f32;
    let mut sum_z = 0.0f32;
    let mut min_y = f32::INFINITY;
    let mut count = 0usize;
    for triangle in &mesh.triangles {
        for vertex in &triangle.vertices {
            sum_x += vertex.position.x;
            sum_z += vertex.position.z;
            min_y = min_y.min(vertex.position.y);
            count += 1;
        }
    }
    let n = count as f32;
    Transform::apply(
        mesh,
        &Transform::translation(-sum_x / n, -min_y, -sum_z / n),
    );

    Transform::apply(mesh, &Transform::scaling(scale_factor));
}
