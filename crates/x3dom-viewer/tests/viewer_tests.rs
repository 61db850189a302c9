use nalgebra::{Point3, Vector3};

use geom_kernel::mesh::{box_mesh, box_outline, sphere_mesh};
use geom_kernel::{Arc3d, Curve, MeshKernel, MeshShape, Segment3d};
use scene_types::{DisplayParams, Rgb};
use x3dom_viewer::{RendererConfig, X3domRenderer};

// ── Helper Functions ─────────────────────────────────────────────────────

fn temp_renderer() -> X3domRenderer<MeshKernel> {
    let dir = tempfile::tempdir().unwrap().keep();
    X3domRenderer::new(MeshKernel::default(), RendererConfig::with_workdir(dir)).unwrap()
}

fn unit_box() -> MeshShape {
    MeshShape::Solid {
        mesh: box_mesh(Point3::origin(), Point3::new(1.0, 1.0, 1.0)),
        outline: box_outline(Point3::origin(), Point3::new(1.0, 1.0, 1.0)),
    }
}

fn circle_edge() -> MeshShape {
    MeshShape::Edge(Curve::Arc(Arc3d::full_circle(
        Point3::origin(),
        2.0,
        Vector3::z(),
    )))
}

fn l_wire() -> MeshShape {
    MeshShape::Wire(vec![
        Curve::Segment(Segment3d::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))),
        Curve::Segment(Segment3d::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        )),
    ])
}

// ── Export behavior ──────────────────────────────────────────────────────

#[test]
fn test_each_export_writes_one_x3d_file() {
    let mut renderer = temp_renderer();
    for _ in 0..3 {
        renderer
            .display_shape(&unit_box(), &DisplayParams::default())
            .unwrap();
    }
    for entry in renderer.shapes() {
        let path = renderer.workdir().join(format!("{}.x3d", entry.id));
        assert!(path.is_file(), "missing {}", path.display());
    }
    let x3d_files = std::fs::read_dir(renderer.workdir())
        .unwrap()
        .filter(|e| {
            e.as_ref().unwrap().path().extension().and_then(|s| s.to_str()) == Some("x3d")
        })
        .count();
    assert_eq!(x3d_files, 3);
}

#[test]
fn test_registry_sizes_split_by_kind() {
    let mut renderer = temp_renderer();
    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();
    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();
    renderer
        .display_shape(&circle_edge(), &DisplayParams::default())
        .unwrap();
    let (shapes, edges) = renderer
        .display_shape(&l_wire(), &DisplayParams::default())
        .unwrap();
    // Edges and wires share one registry.
    assert_eq!(shapes.len(), 2);
    assert_eq!(edges.len(), 2);
}

#[test]
fn test_identifier_prefixes() {
    let mut renderer = temp_renderer();
    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();
    renderer
        .display_shape(&circle_edge(), &DisplayParams::default())
        .unwrap();
    renderer
        .display_shape(&l_wire(), &DisplayParams::default())
        .unwrap();
    assert!(renderer.shapes()[0].id.starts_with("shp"));
    assert!(renderer.edges()[0].id.starts_with("edg"));
    assert!(renderer.edges()[1].id.starts_with("wir"));
}

#[test]
fn test_single_edge_export_example() {
    // The canonical example: one red edge with line width 3.
    let mut renderer = temp_renderer();
    let params = DisplayParams {
        color: Rgb::new(1.0, 0.0, 0.0),
        line_width: 3.0,
        ..Default::default()
    };
    let (shapes, edges) = renderer.display_shape(&circle_edge(), &params).unwrap();
    assert!(shapes.is_empty());
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].color, Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(edges[0].line_width, 3.0);

    let id = edges[0].id.clone();
    let content = std::fs::read_to_string(
        renderer.workdir().join(format!("{}.x3d", id)),
    )
    .unwrap();
    assert_eq!(content.matches("<LineSet").count(), 1);
}

// ── HTML composition ─────────────────────────────────────────────────────

#[test]
fn test_html_preserves_insertion_order_shapes_then_edges() {
    let mut renderer = temp_renderer();
    renderer
        .display_shape(&circle_edge(), &DisplayParams::default())
        .unwrap();
    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();
    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();

    let path = renderer.generate_html_file().unwrap();
    let html = std::fs::read_to_string(path).unwrap();

    // Shapes come first in the scene graph, then edges, each group in
    // insertion order.
    let shape_positions: Vec<usize> = renderer
        .shapes()
        .iter()
        .map(|s| html.find(&format!("url=\"{}.x3d\"", s.id)).unwrap())
        .collect();
    let edge_positions: Vec<usize> = renderer
        .edges()
        .iter()
        .map(|e| html.find(&format!("url=\"{}.x3d\"", e.id)).unwrap())
        .collect();
    assert!(shape_positions.windows(2).all(|w| w[0] < w[1]));
    assert!(shape_positions.last().unwrap() < edge_positions.first().unwrap());
}

#[test]
fn test_rerender_accumulates() {
    let mut renderer = temp_renderer();
    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();
    let first = std::fs::read_to_string(renderer.generate_html_file().unwrap()).unwrap();
    let first_id = renderer.shapes()[0].id.clone();
    assert!(first.contains(&first_id));

    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();
    let second = std::fs::read_to_string(renderer.generate_html_file().unwrap()).unwrap();
    assert!(second.contains(&first_id));
    assert!(second.contains(&renderer.shapes()[1].id));
}

#[test]
fn test_axes_plane_inline_count() {
    let dir = tempfile::tempdir().unwrap().keep();
    let config = RendererConfig {
        axes_plane: false,
        ..RendererConfig::with_workdir(&dir)
    };
    let mut renderer = X3domRenderer::new(MeshKernel::default(), config).unwrap();
    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();
    let html = std::fs::read_to_string(renderer.generate_html_file().unwrap()).unwrap();
    assert_eq!(html.matches("rawcdn.githack.com").count(), 0);

    let config = RendererConfig::with_workdir(&dir);
    let mut renderer = X3domRenderer::new(MeshKernel::default(), config).unwrap();
    renderer
        .display_shape(&unit_box(), &DisplayParams::default())
        .unwrap();
    let html = std::fs::read_to_string(renderer.generate_html_file().unwrap()).unwrap();
    assert_eq!(html.matches("rawcdn.githack.com").count(), 3);
}

#[test]
fn test_empty_session_still_renders_page() {
    let renderer = temp_renderer();
    let path = renderer.generate_html_file().unwrap();
    let html = std::fs::read_to_string(path).unwrap();
    assert!(html.contains("<x3d id=\"x3d-scene\""));
    assert!(!html.contains("<Inline"));
}

#[test]
fn test_default_config_uses_fresh_temp_workdir() {
    let a = X3domRenderer::new(MeshKernel::default(), RendererConfig::default()).unwrap();
    let b = X3domRenderer::new(MeshKernel::default(), RendererConfig::default()).unwrap();
    assert!(a.workdir().is_dir());
    assert!(b.workdir().is_dir());
    assert_ne!(a.workdir(), b.workdir());
}
