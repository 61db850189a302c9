use geom_kernel::KernelError;

/// Errors during X3D export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write x3d file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Kernel(#[from] KernelError),
}
