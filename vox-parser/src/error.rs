use std::{error::Error, io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("failed to open point cloud {}", .path.display())]
    StreamOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse header of {}", .path.display())]
    HeaderParse {
        path: PathBuf,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    #[error("file extension is not found: {}", .0.display())]
    MissingExtension(PathBuf),

    #[error("unsupported extension: {0}")]
    UnsupportedExtension(String),
}
