use std::fmt::Write as _;

use geom_kernel::Polyline;

use crate::format::{compact_floats, DEFAULT_DIGITS, DEFAULT_EPSILON};

/// Exporter version stamped into the generated document metadata.
pub const EXPORTER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const X3D_FOOTER: &str = "</Scene>\n</X3D>\n";

/// X3D document preamble: XML declaration, doctype, and generator
/// metadata, opening the `<Scene>` element.
pub fn x3d_header() -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE X3D PUBLIC \"ISO//Web3D//DTD X3D 4.0//EN\" \"https://www.web3d.org/specifications/x3d-4.0.dtd\">\n\
         <X3D profile='Immersive' version='4.0' xmlns:xsd='http://www.w3.org/2001/XMLSchema-instance' xsd:noNamespaceSchemaLocation='http://www.web3d.org/specifications/x3d-4.0.xsd'>\n\
         <head>\n\
         \x20   <meta name='generator' content='x3d-export {v} X3D exporter'/>\n\
         \x20   <meta name='description' content='x3dom based shape rendering'/>\n\
         </head>\n\
         <Scene>\n",
        v = EXPORTER_VERSION
    )
}

/// A `TriangleSet` node from flat position/normal arrays.
pub fn triangle_set(positions: &[f32], normals: &[f32]) -> String {
    format!(
        "\n<TriangleSet solid='false'>\n\
         \x20 <Coordinate point='{}'/>\n\
         \x20 <Normal vector='{}'/>\n\
         </TriangleSet>\n",
        compact_floats(positions.iter().map(|&v| v as f64), DEFAULT_DIGITS, DEFAULT_EPSILON),
        compact_floats(normals.iter().map(|&v| v as f64), DEFAULT_DIGITS, DEFAULT_EPSILON),
    )
}

/// An `IndexedTriangleSet` node from an index buffer plus flat
/// position/normal arrays.
pub fn indexed_triangle_set(indices: &[u32], positions: &[f32], normals: &[f32]) -> String {
    let index_str = indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "\n<IndexedTriangleSet index='{}' solid='false'>\n\
         \x20 <Coordinate point='{}'/>\n\
         \x20 <Normal vector='{}'/>\n\
         </IndexedTriangleSet>\n",
        index_str,
        compact_floats(positions.iter().map(|&v| v as f64), DEFAULT_DIGITS, DEFAULT_EPSILON),
        compact_floats(normals.iter().map(|&v| v as f64), DEFAULT_DIGITS, DEFAULT_EPSILON),
    )
}

/// A single-polyline `LineSet` node.
pub fn line_set(points: &Polyline) -> String {
    multi_line_set(std::slice::from_ref(points))
}

/// A `LineSet` node covering several polylines at once.
///
/// `vertexCount` takes one entry per polyline, each defining a separate
/// line over the shared coordinate list.
pub fn multi_line_set(polylines: &[Polyline]) -> String {
    let vertex_counts = polylines
        .iter()
        .map(|p| p.len().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let mut coords = String::new();
    for polyline in polylines {
        for p in polyline {
            let _ = write!(coords, "{} {} {} ", p.x, p.y, p.z);
        }
    }
    format!(
        "\t<LineSet vertexCount='{}'><Coordinate point='{}'/></LineSet>\n",
        vertex_counts,
        coords.trim_end(),
    )
}

/// Wrap rendered `LineSet` nodes in the switch/group scaffolding x3dom
/// expects, optionally as a complete standalone document.
pub fn lineset_group(linesets: &[String], id: &str, header: bool, footer: bool) -> String {
    let mut out = if header { x3d_header() } else { String::new() };
    out.push_str("<Switch whichChoice='0' id='swBRP'>\n\t<Group>\n");
    for (i, lineset) in linesets.iter().enumerate() {
        let _ = write!(out, "\t\t<Transform scale='1 1 1'><Shape DEF='{id}{i}'>\n");
        // Empty appearance, but the x3d validator complains if nothing set.
        out.push_str("\t\t\t<Appearance><Material emissiveColor='0 0 0'/></Appearance>\n\t\t");
        out.push_str(lineset);
        out.push_str("\t\t</Shape></Transform>\n");
    }
    out.push_str("\t</Group>\n</Switch>\n");
    if footer {
        out.push_str(X3D_FOOTER);
    }
    out
}

/// Complete X3D document for one discretized edge or wire.
pub fn edge_document(points: &Polyline, id: &str) -> String {
    lineset_group(&[line_set(points)], id, true, true)
}
