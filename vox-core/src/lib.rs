pub mod error;
pub mod pointcloud;
pub mod voxel;

pub use error::VoxelizeError;
