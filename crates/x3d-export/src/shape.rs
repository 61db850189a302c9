use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use geom_kernel::{GeometryKernel, Polyline, TriangleMesh};
use scene_types::DisplayParams;
use tracing::debug;

use crate::errors::ExportError;
use crate::nodes;

/// Serializes one tessellated shape to an X3D document.
///
/// Construction runs the kernel; `write_to_file` serializes. The `slot`
/// passed at serialization time is the shape's index in the scene and
/// only feeds the `DEF` names inside the document.
#[derive(Debug)]
pub struct ShapeExporter {
    params: DisplayParams,
    mesh: TriangleMesh,
    edge_overlay: Vec<Polyline>,
}

impl ShapeExporter {
    /// Tessellate `shape` and capture everything needed to serialize it.
    pub fn compute<K: GeometryKernel>(
        kernel: &K,
        shape: &K::Shape,
        params: &DisplayParams,
    ) -> Result<Self, ExportError> {
        let tess = kernel.tessellate(shape, params.mesh_quality, params.export_edges)?;
        debug!(
            triangles = tess.mesh.triangle_count(),
            overlay_edges = tess.edges.len(),
            "shape tessellated"
        );
        Ok(Self {
            params: params.clone(),
            mesh: tess.mesh,
            edge_overlay: tess.edges,
        })
    }

    fn appearance(&self) -> String {
        if self.params.uses_shader() {
            let vs = self.params.vertex_shader.as_deref().unwrap_or("");
            let fs = self.params.fragment_shader.as_deref().unwrap_or("");
            format!(
                "<ComposedShader><ShaderPart type=\"VERTEX\" style=\"display:none;\">\n\
                 {vs}\n\
                 </ShaderPart>\n\
                 <ShaderPart type=\"FRAGMENT\" style=\"display:none;\">\n\
                 {fs}\n\
                 </ShaderPart></ComposedShader>\n"
            )
        } else {
            format!(
                "<Material id='color' diffuseColor='{}' shininess='{}' specularColor='{}' transparency='{}'>\n</Material>\n",
                self.params.color.to_x3d(),
                self.params.shininess,
                self.params.specular_color.to_x3d(),
                self.params.transparency,
            )
        }
    }

    /// Render the complete X3D document.
    pub fn to_x3d_string(&self, slot: usize) -> String {
        let mut out = nodes::x3d_header();
        let _ = write!(
            out,
            "<Switch whichChoice='0' id='swBRP'><Transform scale='1 1 1'><Shape DEF='shape{slot}' onclick='select(this);'><Appearance>\n"
        );
        out.push_str(&self.appearance());
        out.push_str("</Appearance>\n");
        if self.mesh.indices.is_empty() {
            out.push_str(&nodes::triangle_set(&self.mesh.positions, &self.mesh.normals));
        } else {
            out.push_str(&nodes::indexed_triangle_set(
                &self.mesh.indices,
                &self.mesh.positions,
                &self.mesh.normals,
            ));
        }
        out.push_str("</Shape></Transform></Switch>\n");
        if !self.edge_overlay.is_empty() {
            let lineset = nodes::multi_line_set(&self.edge_overlay);
            out.push_str(&nodes::lineset_group(
                &[lineset],
                &format!("shape{slot}edges"),
                false,
                false,
            ));
        }
        out.push_str(nodes::X3D_FOOTER);
        out
    }

    /// Write the document to `path`.
    pub fn write_to_file(&self, path: &Path, slot: usize) -> Result<(), ExportError> {
        fs::write(path, self.to_x3d_string(slot))?;
        debug!(path = %path.display(), "x3d file written");
        Ok(())
    }
}
