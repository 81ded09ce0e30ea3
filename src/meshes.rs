//! Procedural primitive meshes.
//!
//! Every generator returns position/normal/uv vertices with CCW front
//! faces and outward unit normals. Shapes are unit-sized and centered (or
//! base-at-origin for the upright solids) so the scene table sizes them
//! purely through its transforms.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::types::Vertex;

/// CPU-side mesh data ready for vertex/index buffer upload
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Unit plane in the XZ plane, normal +Y, spanning [-1, 1] on both axes
pub fn plane() -> MeshData {
    let vertices = vec![
        Vertex::new([-1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
        Vertex::new([-1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
        Vertex::new([1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
        Vertex::new([1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];
    MeshData { vertices, indices }
}

/// Unit cube centered at the origin, four vertices per face
pub fn cube() -> MeshData {
    // (normal, four corners in CCW order seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [0.5, 0.5, 0.5],
                [-0.5, 0.5, 0.5],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [0.5, -0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [-0.5, 0.5, -0.5],
                [0.5, 0.5, -0.5],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [0.5, -0.5, 0.5],
                [0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
                [0.5, 0.5, 0.5],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, 0.5, 0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-0.5, 0.5, 0.5],
                [0.5, 0.5, 0.5],
                [0.5, 0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, 0.5],
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        for (corner, uv) in corners.iter().zip(uvs) {
            vertices.push(Vertex::new(*corner, normal, uv));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Square pyramid: unit base centered at the origin, apex at y = 1
pub fn pyramid() -> MeshData {
    let apex = Vec3::new(0.0, 1.0, 0.0);
    let base = [
        Vec3::new(-0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, -0.5),
        Vec3::new(-0.5, 0.0, -0.5),
    ];

    let mut vertices = Vec::with_capacity(16);
    let mut indices = Vec::with_capacity(18);

    // Side faces, one flat-shaded triangle each
    for i in 0..4 {
        let a = base[i];
        let b = base[(i + 1) % 4];
        let normal = (b - a).cross(apex - a).normalize().to_array();

        let idx = vertices.len() as u32;
        vertices.push(Vertex::new(a.to_array(), normal, [0.0, 1.0]));
        vertices.push(Vertex::new(b.to_array(), normal, [1.0, 1.0]));
        vertices.push(Vertex::new(apex.to_array(), normal, [0.5, 0.0]));
        indices.extend_from_slice(&[idx, idx + 1, idx + 2]);
    }

    // Base, facing down
    let idx = vertices.len() as u32;
    let down = [0.0, -1.0, 0.0];
    vertices.push(Vertex::new(base[0].to_array(), down, [0.0, 0.0]));
    vertices.push(Vertex::new(base[1].to_array(), down, [1.0, 0.0]));
    vertices.push(Vertex::new(base[2].to_array(), down, [1.0, 1.0]));
    vertices.push(Vertex::new(base[3].to_array(), down, [0.0, 1.0]));
    indices.extend_from_slice(&[idx, idx + 2, idx + 1, idx, idx + 3, idx + 2]);

    MeshData { vertices, indices }
}

/// Upright cylinder: radius 1, base at y = 0, top at y = 1
pub fn cylinder(segments: u32) -> MeshData {
    assert!(segments >= 3);

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side wall: one duplicated column at the seam for clean uvs
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        let u = i as f32 / segments as f32;

        vertices.push(Vertex::new([cos, 0.0, sin], [cos, 0.0, sin], [u, 1.0]));
        vertices.push(Vertex::new([cos, 1.0, sin], [cos, 0.0, sin], [u, 0.0]));
    }
    for i in 0..segments {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 1, base + 3, base, base + 3, base + 2]);
    }

    // Caps: center fan with cap-facing normals
    for (y, ny) in [(0.0f32, -1.0f32), (1.0, 1.0)] {
        let center = vertices.len() as u32;
        vertices.push(Vertex::new([0.0, y, 0.0], [0.0, ny, 0.0], [0.5, 0.5]));

        let ring_start = vertices.len() as u32;
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            vertices.push(Vertex::new(
                [cos, y, sin],
                [0.0, ny, 0.0],
                [0.5 + cos * 0.5, 0.5 + sin * 0.5],
            ));
        }
        for i in 0..segments {
            let a = ring_start + i;
            let b = ring_start + i + 1;
            if ny > 0.0 {
                indices.extend_from_slice(&[center, b, a]);
            } else {
                indices.extend_from_slice(&[center, a, b]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Upright cone: base radius 1 at y = 0, apex at y = 1
pub fn cone(segments: u32) -> MeshData {
    assert!(segments >= 3);

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Slanted side: normal tilts outward by the slope of the surface.
    // For unit radius and height the slope gives equal xz/y components.
    let tilt = std::f32::consts::FRAC_1_SQRT_2;
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        let u = i as f32 / segments as f32;
        let normal = [cos * tilt, tilt, sin * tilt];

        vertices.push(Vertex::new([cos, 0.0, sin], normal, [u, 1.0]));
        vertices.push(Vertex::new([0.0, 1.0, 0.0], normal, [u, 0.0]));
    }
    for i in 0..segments {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    // Base cap, facing down
    let center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]));
    let ring_start = vertices.len() as u32;
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        vertices.push(Vertex::new(
            [cos, 0.0, sin],
            [0.0, -1.0, 0.0],
            [0.5 + cos * 0.5, 0.5 + sin * 0.5],
        ));
    }
    for i in 0..segments {
        indices.extend_from_slice(&[center, ring_start + i, ring_start + i + 1]);
    }

    MeshData { vertices, indices }
}

/// UV sphere of radius 1 centered at the origin
pub fn sphere(stacks: u32, slices: u32) -> MeshData {
    assert!(stacks >= 2 && slices >= 3);

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let phi = v * std::f32::consts::PI;
        let (phi_sin, phi_cos) = phi.sin_cos();

        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let theta = u * TAU;
            let (theta_sin, theta_cos) = theta.sin_cos();

            let position = [phi_sin * theta_cos, phi_cos, phi_sin * theta_sin];
            vertices.push(Vertex::new(position, position, [u, v]));
        }
    }

    let row = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * row + slice;
            let b = a + row;
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }

    MeshData { vertices, indices }
}

/// Torus in the XZ plane: ring radius 1, tube radius `tube_radius`
pub fn torus(tube_radius: f32, ring_segments: u32, tube_segments: u32) -> MeshData {
    assert!(ring_segments >= 3 && tube_segments >= 3);

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=ring_segments {
        let u = ring as f32 / ring_segments as f32;
        let theta = u * TAU;
        let (theta_sin, theta_cos) = theta.sin_cos();
        let ring_center = Vec3::new(theta_cos, 0.0, theta_sin);

        for tube in 0..=tube_segments {
            let v = tube as f32 / tube_segments as f32;
            let phi = v * TAU;
            let (phi_sin, phi_cos) = phi.sin_cos();

            let normal = Vec3::new(theta_cos * phi_cos, phi_sin, theta_sin * phi_cos);
            let position = ring_center + normal * tube_radius;
            vertices.push(Vertex::new(
                position.to_array(),
                normal.to_array(),
                [u, v],
            ));
        }
    }

    let row = tube_segments + 1;
    for ring in 0..ring_segments {
        for tube in 0..tube_segments {
            let a = ring * row + tube;
            let b = a + row;
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(mesh: &MeshData) {
        for vertex in &mesh.vertices {
            let length = Vec3::from_array(vertex.normal).length();
            assert!(
                (length - 1.0).abs() < 1e-5,
                "non-unit normal {:?}",
                vertex.normal
            );
        }
    }

    fn assert_indices_in_bounds(mesh: &MeshData) {
        let count = mesh.vertices.len() as u32;
        assert_eq!(mesh.indices.len() % 3, 0);
        for &index in &mesh.indices {
            assert!(index < count);
        }
    }

    #[test]
    fn plane_is_two_triangles() {
        let mesh = plane();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_unit_normals(&mesh);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn cube_has_per_face_vertices() {
        let mesh = cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_unit_normals(&mesh);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn pyramid_side_normals_point_outward() {
        let mesh = pyramid();
        assert_unit_normals(&mesh);
        assert_indices_in_bounds(&mesh);

        // Side-face normals must have an upward component and point away
        // from the axis; the base normal points straight down
        for vertex in &mesh.vertices[..12] {
            assert!(vertex.normal[1] > 0.0);
        }
        assert_eq!(mesh.vertices[12].normal, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn cylinder_counts_scale_with_segments() {
        let mesh = cylinder(16);
        // 2 * 17 side + 2 * (1 center + 17 ring) caps
        assert_eq!(mesh.vertices.len(), 70);
        // 16 quads * 6 + 2 caps * 16 * 3
        assert_eq!(mesh.index_count(), 192);
        assert_unit_normals(&mesh);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn cone_stays_within_unit_bounds() {
        let mesh = cone(24);
        assert_unit_normals(&mesh);
        assert_indices_in_bounds(&mesh);
        for vertex in &mesh.vertices {
            assert!(vertex.position[1] >= 0.0 && vertex.position[1] <= 1.0);
            let radial = (vertex.position[0].powi(2) + vertex.position[2].powi(2)).sqrt();
            assert!(radial <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn sphere_vertices_sit_on_unit_radius() {
        let mesh = sphere(12, 24);
        assert_unit_normals(&mesh);
        assert_indices_in_bounds(&mesh);
        for vertex in &mesh.vertices {
            let radius = Vec3::from_array(vertex.position).length();
            assert!((radius - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn torus_tube_distance_is_constant() {
        let tube_radius = 0.25;
        let mesh = torus(tube_radius, 24, 12);
        assert_unit_normals(&mesh);
        assert_indices_in_bounds(&mesh);

        for vertex in &mesh.vertices {
            let p = Vec3::from_array(vertex.position);
            let ring_point = Vec3::new(p.x, 0.0, p.z).normalize();
            let distance = (p - ring_point).length();
            assert!((distance - tube_radius).abs() < 1e-4);
        }
    }
}
