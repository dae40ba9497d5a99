pub mod color;
pub mod coord;
pub mod set;
pub mod stats;
pub mod transform;
pub mod voxelizer;

pub use color::{ColorStrategy, DepthBanding, RawHeight, Rgb};
pub use coord::{TileOrigin, VoxelCoord, VoxelVertex};
pub use set::VoxelSet;
pub use stats::RunStatistics;
pub use voxelizer::{voxelize, VoxelizeOutput, Voxelizer};
