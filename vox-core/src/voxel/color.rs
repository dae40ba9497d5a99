//! Per-voxel color derivation.
//!
//! Colors are computed once per unique voxel after ingestion, so a strategy
//! can see the statistics of the whole run.

use crate::voxel::coord::VoxelCoord;
use crate::voxel::stats::RunStatistics;

pub type Rgb = [f32; 3];

pub trait ColorStrategy {
    fn color(&self, voxel: VoxelCoord, stats: &RunStatistics) -> Rgb;
}

impl<F> ColorStrategy for F
where
    F: Fn(VoxelCoord, &RunStatistics) -> Rgb,
{
    fn color(&self, voxel: VoxelCoord, stats: &RunStatistics) -> Rgb {
        self(voxel, stats)
    }
}

/// Gray ramp over `|voxel.y|`: black below `offset`, white from
/// `offset + width` on, linear in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBanding {
    pub offset: f32,
    pub width: f32,
}

impl Default for DepthBanding {
    fn default() -> Self {
        Self {
            offset: 400.0,
            width: 30.0,
        }
    }
}

impl DepthBanding {
    pub fn intensity(&self, voxel: VoxelCoord) -> f32 {
        let magnitude = voxel.y.unsigned_abs() as f32;
        if self.width <= 0.0 {
            // degenerate band is a step
            return if magnitude >= self.offset { 1.0 } else { 0.0 };
        }
        ((magnitude - self.offset) / self.width).clamp(0.0, 1.0)
    }
}

impl ColorStrategy for DepthBanding {
    fn color(&self, voxel: VoxelCoord, _stats: &RunStatistics) -> Rgb {
        let i = self.intensity(voxel);
        [i, i, i]
    }
}

/// Quantized source height written straight into every channel, unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawHeight;

impl ColorStrategy for RawHeight {
    fn color(&self, voxel: VoxelCoord, _stats: &RunStatistics) -> Rgb {
        let height = -(voxel.y as f32);
        [height, height, height]
    }
}
