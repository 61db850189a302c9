//! Browser-based shape viewing over the x3dom WebGL runtime.
//!
//! A rendering session exports shapes to `.x3d` files in a working
//! directory, composes an `index.html` referencing them, and serves the
//! directory over HTTP.

pub mod config;
pub mod error;
pub mod html;
pub mod renderer;
pub mod server;

pub use config::RendererConfig;
pub use error::ViewerError;
pub use renderer::X3domRenderer;
pub use server::serve;

/// Viewer version shown in the generated page.
pub const VIEWER_VERSION: &str = env!("CARGO_PKG_VERSION");
