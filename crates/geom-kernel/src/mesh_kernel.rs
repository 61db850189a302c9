use tracing::debug;

use crate::curve::Curve;
use crate::mesh::{Polyline, Tessellation, TriangleMesh};
use crate::{GeometryKernel, KernelError, ShapeKind};

/// Shape handle understood by the built-in [`MeshKernel`].
///
/// Edges and wires are analytic curves discretized on demand; solids are
/// stored pre-tessellated, optionally with boundary polylines for the
/// edge overlay.
#[derive(Debug, Clone)]
pub enum MeshShape {
    Edge(Curve),
    Wire(Vec<Curve>),
    Solid {
        mesh: TriangleMesh,
        outline: Vec<Polyline>,
    },
}

impl MeshShape {
    pub fn solid(mesh: TriangleMesh) -> Self {
        Self::Solid {
            mesh,
            outline: Vec::new(),
        }
    }
}

/// Built-in kernel over [`MeshShape`] data.
///
/// `curve_resolution` is the span count used when discretizing at mesh
/// quality 1.0; quality scales it (lower quality value, more spans).
#[derive(Debug, Clone)]
pub struct MeshKernel {
    pub curve_resolution: usize,
}

impl Default for MeshKernel {
    fn default() -> Self {
        Self {
            curve_resolution: 48,
        }
    }
}

impl MeshKernel {
    fn discretize_curves(&self, curves: &[Curve]) -> Polyline {
        let mut points = Polyline::new();
        for curve in curves {
            let pts = curve.discretize(self.curve_resolution);
            // Consecutive edges of a wire share a vertex; keep it once.
            let skip = usize::from(!points.is_empty());
            points.extend(pts.into_iter().skip(skip));
        }
        points
    }
}

impl GeometryKernel for MeshKernel {
    type Shape = MeshShape;

    fn classify(&self, shape: &MeshShape) -> ShapeKind {
        match shape {
            MeshShape::Edge(_) => ShapeKind::Edge,
            MeshShape::Wire(_) => ShapeKind::Wire,
            MeshShape::Solid { .. } => ShapeKind::Solid,
        }
    }

    fn discretize_edge(&self, shape: &MeshShape) -> Result<Polyline, KernelError> {
        match shape {
            MeshShape::Edge(curve) => Ok(curve.discretize(self.curve_resolution)),
            _ => Err(KernelError::NotDiscretizable),
        }
    }

    fn discretize_wire(&self, shape: &MeshShape) -> Result<Polyline, KernelError> {
        match shape {
            MeshShape::Wire(curves) if curves.is_empty() => {
                Err(KernelError::Meshing("wire has no edges".to_string()))
            }
            MeshShape::Wire(curves) => Ok(self.discretize_curves(curves)),
            _ => Err(KernelError::NotDiscretizable),
        }
    }

    fn tessellate(
        &self,
        shape: &MeshShape,
        mesh_quality: f64,
        compute_edges: bool,
    ) -> Result<Tessellation, KernelError> {
        match shape {
            MeshShape::Solid { mesh, outline } => {
                // Stored meshes are already tessellated; quality only
                // applies to curve sampling in this kernel.
                debug!(
                    triangles = mesh.triangle_count(),
                    mesh_quality, "returning stored tessellation"
                );
                Ok(Tessellation {
                    mesh: mesh.clone(),
                    edges: if compute_edges {
                        outline.clone()
                    } else {
                        Vec::new()
                    },
                })
            }
            _ => Err(KernelError::Unsupported(
                "1d topology goes through the discretization path".to_string(),
            )),
        }
    }
}
