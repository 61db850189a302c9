use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A point sequence approximating an edge or wire.
pub type Polyline = Vec<Point3<f64>>;

/// A triangle mesh produced by tessellation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals [nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Triangle indices [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn add_vertex(&mut self, pos: Point3<f64>, normal: Vector3<f64>) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.push(pos.x as f32);
        self.positions.push(pos.y as f32);
        self.positions.push(pos.z as f32);
        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        for &idx in &other.indices {
            self.indices.push(idx + offset);
        }
    }
}

/// Result of tessellating a general shape: the surface mesh plus,
/// when requested, boundary polylines for the edge overlay.
#[derive(Debug, Clone, Default)]
pub struct Tessellation {
    pub mesh: TriangleMesh,
    pub edges: Vec<Polyline>,
}

/// Build an axis-aligned box mesh with per-face normals.
pub fn box_mesh(min: Point3<f64>, max: Point3<f64>) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);

    // Each face: outward normal and its four corners, counterclockwise
    // seen from outside.
    let faces: [(Vector3<f64>, [Point3<f64>; 4]); 6] = [
        (
            -Vector3::z(),
            [
                Point3::new(x0, y0, z0),
                Point3::new(x0, y1, z0),
                Point3::new(x1, y1, z0),
                Point3::new(x1, y0, z0),
            ],
        ),
        (
            Vector3::z(),
            [
                Point3::new(x0, y0, z1),
                Point3::new(x1, y0, z1),
                Point3::new(x1, y1, z1),
                Point3::new(x0, y1, z1),
            ],
        ),
        (
            -Vector3::y(),
            [
                Point3::new(x0, y0, z0),
                Point3::new(x1, y0, z0),
                Point3::new(x1, y0, z1),
                Point3::new(x0, y0, z1),
            ],
        ),
        (
            Vector3::y(),
            [
                Point3::new(x0, y1, z0),
                Point3::new(x0, y1, z1),
                Point3::new(x1, y1, z1),
                Point3::new(x1, y1, z0),
            ],
        ),
        (
            -Vector3::x(),
            [
                Point3::new(x0, y0, z0),
                Point3::new(x0, y0, z1),
                Point3::new(x0, y1, z1),
                Point3::new(x0, y1, z0),
            ],
        ),
        (
            Vector3::x(),
            [
                Point3::new(x1, y0, z0),
                Point3::new(x1, y1, z0),
                Point3::new(x1, y1, z1),
                Point3::new(x1, y0, z1),
            ],
        ),
    ];

    for (normal, corners) in faces {
        let idx: Vec<u32> = corners
            .iter()
            .map(|p| mesh.add_vertex(*p, normal))
            .collect();
        mesh.add_triangle(idx[0], idx[1], idx[2]);
        mesh.add_triangle(idx[0], idx[2], idx[3]);
    }

    mesh
}

/// The twelve boundary edges of an axis-aligned box, as two-point
/// polylines (used for the edge overlay).
pub fn box_outline(min: Point3<f64>, max: Point3<f64>) -> Vec<Polyline> {
    let c = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);
    let corners = [
        c(x0, y0, z0),
        c(x1, y0, z0),
        c(x1, y1, z0),
        c(x0, y1, z0),
        c(x0, y0, z1),
        c(x1, y0, z1),
        c(x1, y1, z1),
        c(x0, y1, z1),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    EDGES
        .iter()
        .map(|&(a, b)| vec![corners[a], corners[b]])
        .collect()
}

/// Tessellate a parametric surface by sampling on a UV grid.
///
/// `eval` maps (u, v) to a position and outward normal.
pub fn uv_grid_mesh<F>(
    eval: F,
    u_range: (f64, f64),
    v_range: (f64, f64),
    u_divisions: usize,
    v_divisions: usize,
) -> TriangleMesh
where
    F: Fn(f64, f64) -> (Point3<f64>, Vector3<f64>),
{
    let mut mesh = TriangleMesh::new();

    let mut indices_grid = vec![vec![0u32; v_divisions + 1]; u_divisions + 1];

    for i in 0..=u_divisions {
        for j in 0..=v_divisions {
            let u = u_range.0 + (u_range.1 - u_range.0) * (i as f64 / u_divisions as f64);
            let v = v_range.0 + (v_range.1 - v_range.0) * (j as f64 / v_divisions as f64);
            let (pos, normal) = eval(u, v);
            indices_grid[i][j] = mesh.add_vertex(pos, normal);
        }
    }

    for i in 0..u_divisions {
        for j in 0..v_divisions {
            let i00 = indices_grid[i][j];
            let i10 = indices_grid[i + 1][j];
            let i01 = indices_grid[i][j + 1];
            let i11 = indices_grid[i + 1][j + 1];

            mesh.add_triangle(i00, i10, i11);
            mesh.add_triangle(i00, i11, i01);
        }
    }

    mesh
}

/// Sphere mesh via UV sampling (longitude x latitude divisions).
pub fn sphere_mesh(
    center: Point3<f64>,
    radius: f64,
    u_divisions: usize,
    v_divisions: usize,
) -> TriangleMesh {
    uv_grid_mesh(
        |u, v| {
            let normal = Vector3::new(v.cos() * u.cos(), v.cos() * u.sin(), v.sin());
            (center + normal * radius, normal)
        },
        (0.0, std::f64::consts::TAU),
        (
            -std::f64::consts::FRAC_PI_2,
            std::f64::consts::FRAC_PI_2,
        ),
        u_divisions,
        v_divisions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_mesh_counts() {
        let mesh = box_mesh(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        // 6 faces, 2 triangles each, 4 vertices each (per-face normals).
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertex_count(), 24);
    }

    #[test]
    fn test_box_outline_has_twelve_edges() {
        let outline = box_outline(Point3::origin(), Point3::new(2.0, 1.0, 1.0));
        assert_eq!(outline.len(), 12);
        assert!(outline.iter().all(|e| e.len() == 2));
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = box_mesh(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let b = box_mesh(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0));
        a.merge(&b);
        assert_eq!(a.triangle_count(), 24);
        assert_eq!(a.vertex_count(), 48);
        assert!(a.indices.iter().all(|&i| (i as usize) < a.vertex_count()));
    }

    #[test]
    fn test_sphere_mesh_counts() {
        let mesh = sphere_mesh(Point3::origin(), 1.0, 16, 8);
        assert_eq!(mesh.vertex_count(), 17 * 9);
        assert_eq!(mesh.triangle_count(), 16 * 8 * 2);
    }
}
