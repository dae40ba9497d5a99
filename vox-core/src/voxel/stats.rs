/// Counters gathered while a stream is voxelized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    /// Largest quantized source z over every point read, duplicates included.
    /// Stays `i32::MIN` when no point was read.
    pub max_height: i32,
    pub points_read: u64,
    pub unique_voxels: usize,
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self {
            max_height: i32::MIN,
            points_read: 0,
            unique_voxels: 0,
        }
    }
}

impl RunStatistics {
    pub fn observe(&mut self, height: i32) {
        self.max_height = self.max_height.max(height);
        self.points_read += 1;
    }

    pub fn duplicates(&self) -> u64 {
        self.points_read.saturating_sub(self.unique_voxels as u64)
    }
}
