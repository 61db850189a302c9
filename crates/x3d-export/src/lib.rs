//! X3D serialization for tessellated shapes and discretized curves.

pub mod errors;
pub mod format;
pub mod nodes;
pub mod shape;

pub use errors::ExportError;
pub use nodes::{edge_document, x3d_header, EXPORTER_VERSION, X3D_FOOTER};
pub use shape::ShapeExporter;
