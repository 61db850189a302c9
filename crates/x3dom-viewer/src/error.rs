use x3d_export::ExportError;

/// Errors surfaced by a rendering session.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("working directory error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to bind http server on {addr}: {reason}")]
    ServerBind { addr: String, reason: String },
}
