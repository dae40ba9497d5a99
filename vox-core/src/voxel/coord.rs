use crate::voxel::color::Rgb;

/// Extent of one tile in source units.
pub const TILE_SIZE: f64 = 100.0;

/// Tile indices that define the origin of the voxel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileOrigin {
    pub x: i32,
    pub y: i32,
}

impl TileOrigin {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Source-unit offset subtracted from raw x/y.
    pub fn offset(&self) -> (f64, f64) {
        (self.x as f64 * TILE_SIZE, self.y as f64 * TILE_SIZE)
    }

    /// File name the tile is stored under, e.g. `6830_2475.laz`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}_{}.{}", self.x, self.y, extension)
    }
}

// Render frame: x is east, y is the negated height, z is the source y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn to_f32(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

/// One render vertex per unique voxel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelVertex {
    pub position: [f32; 3],
    pub color: Rgb,
}

impl VoxelVertex {
    pub fn new(voxel: VoxelCoord, color: Rgb) -> Self {
        Self {
            position: voxel.to_f32(),
            color,
        }
    }
}
