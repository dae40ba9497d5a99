use std::io;

#[derive(Debug, thiserror::Error)]
pub enum VoxelizeError {
    #[error("failed to read point #{index}")]
    Read {
        index: u64,
        #[source]
        source: io::Error,
    },

    /// Quantizing the point would leave the `i32` voxel grid.
    #[error("point #{index} ({x}, {y}, {z}) is outside the representable voxel range")]
    RangeViolation { index: u64, x: f64, y: f64, z: f64 },
}
