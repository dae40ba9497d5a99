use std::{io, path::PathBuf};

use vox_core::VoxelizeError;
use vox_parser::ReaderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read config {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error("voxelization failed")]
    Voxelize(#[from] VoxelizeError),
}
