use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::display::DisplayParams;

/// Registry record for a fully exported shape.
///
/// Created once per successful export and never mutated; the identifier
/// doubles as the stem of the companion `.x3d` file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub id: String,
    pub export_edges: bool,
    pub color: Rgb,
    pub specular_color: Rgb,
    pub shininess: f64,
    pub transparency: f64,
    pub line_color: Rgb,
    pub line_width: f64,
}

impl ShapeEntry {
    pub fn from_params(id: impl Into<String>, params: &DisplayParams) -> Self {
        Self {
            id: id.into(),
            export_edges: params.export_edges,
            color: params.color,
            specular_color: params.specular_color,
            shininess: params.shininess,
            transparency: params.transparency,
            line_color: params.line_color,
            line_width: params.line_width,
        }
    }
}

/// Registry record for a discretized edge or wire.
///
/// Line geometry only retains color and line width; the other display
/// attributes do not apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub id: String,
    pub color: Rgb,
    pub line_width: f64,
}

impl EdgeEntry {
    pub fn from_params(id: impl Into<String>, params: &DisplayParams) -> Self {
        Self {
            id: id.into(),
            color: params.color,
            line_width: params.line_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_entry_keeps_color_and_width_only() {
        let params = DisplayParams {
            color: Rgb::new(1.0, 0.0, 0.0),
            line_width: 3.0,
            transparency: 0.5,
            ..Default::default()
        };
        let entry = EdgeEntry::from_params("edgabc", &params);
        assert_eq!(entry.color, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(entry.line_width, 3.0);
    }

    #[test]
    fn test_shape_entry_copies_all_attributes() {
        let params = DisplayParams {
            export_edges: true,
            transparency: 0.25,
            ..Default::default()
        };
        let entry = ShapeEntry::from_params("shpabc", &params);
        assert!(entry.export_edges);
        assert_eq!(entry.transparency, 0.25);
        assert_eq!(entry.id, "shpabc");
    }
}
