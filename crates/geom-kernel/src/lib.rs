//! Boundary between the viewer and the geometry kernel.
//!
//! The viewer never meshes anything itself; it asks an implementation of
//! [`GeometryKernel`] to classify, discretize, or tessellate a shape and
//! serializes whatever comes back. [`MeshKernel`] is the built-in
//! implementation over analytic curves and stored triangle meshes; real
//! BRep kernels plug in behind the same trait.

pub mod curve;
pub mod mesh;
pub mod mesh_kernel;

pub use curve::{Arc3d, Curve, Segment3d};
pub use mesh::{Polyline, Tessellation, TriangleMesh};
pub use mesh_kernel::{MeshKernel, MeshShape};

/// Topological kind of a shape, as seen by the export dispatcher.
///
/// Anything that is not recognizably 1-dimensional is treated as a
/// general shape; there is no error path for exotic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Edge,
    Wire,
    Solid,
}

/// Errors surfaced by a kernel while meshing or discretizing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("shape is not an edge or wire, cannot discretize")]
    NotDiscretizable,

    #[error("meshing failed: {0}")]
    Meshing(String),

    #[error("unsupported shape: {0}")]
    Unsupported(String),
}

/// The geometry kernel the viewer delegates all real work to.
///
/// `Shape` is whatever handle the kernel hands out for its geometry; the
/// viewer treats it as opaque and only routes it back through these
/// methods.
pub trait GeometryKernel {
    type Shape;

    /// Determine the topological kind of a shape. Never fails;
    /// unrecognized kinds report [`ShapeKind::Solid`].
    fn classify(&self, shape: &Self::Shape) -> ShapeKind;

    /// Approximate an edge with a point sequence.
    fn discretize_edge(&self, shape: &Self::Shape) -> Result<Polyline, KernelError>;

    /// Approximate a wire with a single point sequence covering all of
    /// its edges in order.
    fn discretize_wire(&self, shape: &Self::Shape) -> Result<Polyline, KernelError>;

    /// Mesh a general shape. `mesh_quality` follows the usual CAD
    /// convention (1.0 default, lower is finer); when `compute_edges`
    /// is set the result also carries boundary polylines for the edge
    /// overlay.
    fn tessellate(
        &self,
        shape: &Self::Shape,
        mesh_quality: f64,
        compute_edges: bool,
    ) -> Result<Tessellation, KernelError>;
}
