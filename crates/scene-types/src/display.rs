use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Display attributes for a single shape export.
///
/// `Default` gives the neutral grey material the viewer uses when the
/// caller does not care about appearance. When either shader source is
/// set, the exported Appearance carries a ComposedShader instead of a
/// Material node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayParams {
    /// GLSL vertex shader source, overrides the material when set.
    pub vertex_shader: Option<String>,
    /// GLSL fragment shader source, overrides the material when set.
    pub fragment_shader: Option<String>,
    /// Also serialize boundary edges as line sets (can be slow).
    pub export_edges: bool,
    pub color: Rgb,
    pub specular_color: Rgb,
    pub shininess: f64,
    /// 0.0 is opaque, 1.0 fully transparent.
    pub transparency: f64,
    pub line_color: Rgb,
    pub line_width: f64,
    /// Mesh quality passed to the kernel tessellator; lower is finer.
    pub mesh_quality: f64,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            vertex_shader: None,
            fragment_shader: None,
            export_edges: false,
            color: Rgb::new(0.65, 0.65, 0.7),
            specular_color: Rgb::new(0.2, 0.2, 0.2),
            shininess: 0.9,
            transparency: 0.0,
            line_color: Rgb::BLACK,
            line_width: 2.0,
            mesh_quality: 1.0,
        }
    }
}

impl DisplayParams {
    pub fn with_color(color: Rgb) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Whether the Appearance should carry a ComposedShader node.
    pub fn uses_shader(&self) -> bool {
        self.vertex_shader.is_some() || self.fragment_shader.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let p = DisplayParams::default();
        assert_eq!(p.color, Rgb::new(0.65, 0.65, 0.7));
        assert_eq!(p.line_width, 2.0);
        assert!(!p.export_edges);
        assert!(!p.uses_shader());
    }

    #[test]
    fn test_shader_detection() {
        let p = DisplayParams {
            fragment_shader: Some("void main() {}".into()),
            ..Default::default()
        };
        assert!(p.uses_shader());
    }
}
