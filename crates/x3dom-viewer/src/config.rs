use std::path::PathBuf;

/// Rendering session configuration.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Where generated files go. `None` creates a fresh temporary
    /// directory that is left behind after the session.
    pub workdir: Option<PathBuf>,
    /// Display the reference plane and RGB axes in the scene.
    pub axes_plane: bool,
    /// Scale factor applied to the reference plane/axes geometry.
    pub axes_plane_zoom: f64,
    /// Page background, rendered as a two-color linear gradient.
    pub bg_gradient: (String, String),
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            axes_plane: true,
            axes_plane_zoom: 1.0,
            bg_gradient: ("#ced7de".to_string(), "#808080".to_string()),
        }
    }
}

impl RendererConfig {
    pub fn with_workdir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
            ..Self::default()
        }
    }
}
