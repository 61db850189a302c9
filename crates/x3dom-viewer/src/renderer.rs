use std::fs;
use std::path::{Path, PathBuf};

use geom_kernel::{GeometryKernel, ShapeKind};
use scene_types::{DisplayParams, EdgeEntry, ShapeEntry};
use tracing::{debug, info};
use uuid::Uuid;
use x3d_export::{edge_document, ExportError, ShapeExporter};

use crate::config::RendererConfig;
use crate::error::ViewerError;
use crate::html::{HtmlBody, HtmlHeader};
use crate::server;

/// One rendering session: owns the working directory, the registries,
/// and the kernel it delegates geometry work to.
///
/// Exports accumulate; `render` composes the page from everything
/// exported so far and serves it.
pub struct X3domRenderer<K: GeometryKernel> {
    kernel: K,
    workdir: PathBuf,
    axes_plane: bool,
    axes_plane_zoom: f64,
    bg_gradient: (String, String),
    shapes: Vec<ShapeEntry>,
    edges: Vec<EdgeEntry>,
}

impl<K: GeometryKernel> X3domRenderer<K> {
    /// Open a session. Creates the working directory (or a fresh
    /// temporary one that outlives the session) up front.
    pub fn new(kernel: K, config: RendererConfig) -> Result<Self, ViewerError> {
        let workdir = match config.workdir {
            Some(path) => {
                fs::create_dir_all(&path)?;
                path
            }
            None => tempfile::Builder::new().prefix("x3dom-").tempdir()?.keep(),
        };
        info!(
            workdir = %workdir.display(),
            axes_plane = config.axes_plane,
            zoom = config.axes_plane_zoom,
            "x3dom renderer session opened"
        );
        Ok(Self {
            kernel,
            workdir,
            axes_plane: config.axes_plane,
            axes_plane_zoom: config.axes_plane_zoom,
            bg_gradient: config.bg_gradient,
            shapes: Vec::new(),
            edges: Vec::new(),
        })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn shapes(&self) -> &[ShapeEntry] {
        &self.shapes
    }

    pub fn edges(&self) -> &[EdgeEntry] {
        &self.edges
    }

    fn fresh_id(prefix: &str) -> String {
        format!("{prefix}{}", Uuid::new_v4().simple())
    }

    fn x3d_path(&self, id: &str) -> PathBuf {
        self.workdir.join(format!("{id}.x3d"))
    }

    /// Export one shape to the working directory and register it.
    ///
    /// Edges and wires go through discretization and keep only color
    /// and line width; everything else is tessellated with the full
    /// attribute set. Returns the registries accumulated so far.
    pub fn display_shape(
        &mut self,
        shape: &K::Shape,
        params: &DisplayParams,
    ) -> Result<(&[ShapeEntry], &[EdgeEntry]), ViewerError> {
        match self.kernel.classify(shape) {
            ShapeKind::Edge => {
                println!("x3d export, discretize an edge");
                let points = self.kernel.discretize_edge(shape).map_err(ExportError::from)?;
                let id = Self::fresh_id("edg");
                fs::write(self.x3d_path(&id), edge_document(&points, &id))?;
                self.edges.push(EdgeEntry::from_params(&id, params));
            }
            ShapeKind::Wire => {
                println!("x3d export, discretize a wire");
                let points = self.kernel.discretize_wire(shape).map_err(ExportError::from)?;
                let id = Self::fresh_id("wir");
                fs::write(self.x3d_path(&id), edge_document(&points, &id))?;
                self.edges.push(EdgeEntry::from_params(&id, params));
            }
            ShapeKind::Solid => {
                println!("x3d export, tessellate a shape");
                let id = Self::fresh_id("shp");
                let exporter = ShapeExporter::compute(&self.kernel, shape, params)?;
                // The slot index only feeds DEF names inside the file.
                let slot = self.shapes.len();
                exporter.write_to_file(&self.x3d_path(&id), slot)?;
                self.shapes.push(ShapeEntry::from_params(&id, params));
            }
        }
        debug!(
            shapes = self.shapes.len(),
            edges = self.edges.len(),
            "shape registered"
        );
        Ok((&self.shapes, &self.edges))
    }

    /// Compose `index.html` from the current registries. Every
    /// registered identifier already has its `.x3d` file on disk.
    pub fn generate_html_file(&self) -> Result<PathBuf, ViewerError> {
        let header = HtmlHeader {
            bg_gradient: self.bg_gradient.clone(),
        };
        let body = HtmlBody {
            shape_ids: self
                .shapes
                .iter()
                .map(|s| s.id.clone())
                .chain(self.edges.iter().map(|e| e.id.clone()))
                .collect(),
            axes_plane: self.axes_plane,
            axes_plane_zoom: self.axes_plane_zoom,
        };
        let html = format!(
            "<!DOCTYPE HTML>\n<html lang=\"en\">{}{}</html>\n",
            header.render(),
            body.render()
        );
        let path = self.workdir.join("index.html");
        fs::write(&path, html)?;
        info!(path = %path.display(), "viewer page generated");
        Ok(path)
    }

    /// Compose the page, then serve the working directory until
    /// externally terminated.
    pub fn render(&self, addr: &str, port: u16, open_browser: bool) -> Result<(), ViewerError> {
        self.generate_html_file()?;
        server::serve(&self.workdir, addr, port, open_browser)
    }
}
