use std::path::PathBuf;
use thiserror::Error;

/// Failures while producing the icon file
///
/// Every variant is a resource failure: geometry and colors are constants,
/// so only the filesystem and the encoder can go wrong.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

impl IconError {
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            IconError::OutputDirMissing(_) | IconError::Io { .. } | IconError::Encode(_)
        )
    }
}
