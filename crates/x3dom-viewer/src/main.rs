//! Serve a small demo scene: a box with its edge overlay, a transparent
//! sphere, a circle edge, and an L-shaped wire.

use nalgebra::{Point3, Vector3};

use geom_kernel::mesh::{box_mesh, box_outline, sphere_mesh};
use geom_kernel::{Arc3d, Curve, MeshKernel, MeshShape, Segment3d};
use scene_types::{DisplayParams, Rgb};
use x3dom_viewer::{RendererConfig, X3domRenderer};

fn main() -> Result<(), x3dom_viewer::ViewerError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "x3dom_viewer=debug,x3d_export=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::args()
        .nth(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let open_browser = std::env::args().any(|a| a == "--open");

    let mut renderer = X3domRenderer::new(MeshKernel::default(), RendererConfig::default())?;

    // A box with the boundary edge overlay enabled.
    renderer.display_shape(
        &MeshShape::Solid {
            mesh: box_mesh(Point3::origin(), Point3::new(10.0, 8.0, 6.0)),
            outline: box_outline(Point3::origin(), Point3::new(10.0, 8.0, 6.0)),
        },
        &DisplayParams {
            export_edges: true,
            color: Rgb::new(0.4, 0.6, 0.85),
            ..Default::default()
        },
    )?;

    // A semi-transparent sphere next to it.
    renderer.display_shape(
        &MeshShape::solid(sphere_mesh(Point3::new(18.0, 4.0, 3.0), 4.0, 48, 24)),
        &DisplayParams {
            color: Rgb::new(0.9, 0.5, 0.2),
            transparency: 0.4,
            ..Default::default()
        },
    )?;

    // A red circle around the box, line width 3.
    renderer.display_shape(
        &MeshShape::Edge(Curve::Arc(Arc3d::full_circle(
            Point3::new(5.0, 4.0, 0.0),
            9.0,
            Vector3::z(),
        ))),
        &DisplayParams {
            color: Rgb::new(1.0, 0.0, 0.0),
            line_width: 3.0,
            ..Default::default()
        },
    )?;

    // An L-shaped wire.
    renderer.display_shape(
        &MeshShape::Wire(vec![
            Curve::Segment(Segment3d::new(
                Point3::new(-4.0, 0.0, 0.0),
                Point3::new(-4.0, 8.0, 0.0),
            )),
            Curve::Segment(Segment3d::new(
                Point3::new(-4.0, 8.0, 0.0),
                Point3::new(-4.0, 8.0, 6.0),
            )),
        ]),
        &DisplayParams {
            color: Rgb::new(0.0, 0.4, 0.0),
            ..Default::default()
        },
    )?;

    renderer.render("127.0.0.1", port, open_browser)
}
