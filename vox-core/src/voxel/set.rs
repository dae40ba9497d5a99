use std::collections::{hash_set, HashSet};

use crate::voxel::coord::VoxelCoord;

/// Unique voxel cells, keyed by exact integer equality.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct VoxelSet {
    cells: HashSet<VoxelCoord>,
}

impl VoxelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` if the cell was not present yet.
    pub fn insert(&mut self, voxel: VoxelCoord) -> bool {
        self.cells.insert(voxel)
    }

    pub fn contains(&self, voxel: &VoxelCoord) -> bool {
        self.cells.contains(voxel)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VoxelCoord> + '_ {
        self.cells.iter()
    }
}

impl IntoIterator for VoxelSet {
    type Item = VoxelCoord;
    type IntoIter = hash_set::IntoIter<VoxelCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl FromIterator<VoxelCoord> for VoxelSet {
    fn from_iter<I: IntoIterator<Item = VoxelCoord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
