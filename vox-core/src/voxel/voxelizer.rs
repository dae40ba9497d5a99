use crate::error::VoxelizeError;
use crate::pointcloud::point::RawPoint;
use crate::pointcloud::reader::PointReader;
use crate::voxel::color::ColorStrategy;
use crate::voxel::coord::{TileOrigin, VoxelVertex};
use crate::voxel::set::VoxelSet;
use crate::voxel::stats::RunStatistics;
use crate::voxel::transform::quantize_point;

/// Result of a voxelization run. Vertex order is unspecified.
#[derive(Debug, Clone)]
pub struct VoxelizeOutput {
    pub vertices: Vec<VoxelVertex>,
    pub stats: RunStatistics,
}

/// Incremental point-to-voxel bucketing for a single tile.
pub struct Voxelizer {
    origin: TileOrigin,
    cells: VoxelSet,
    stats: RunStatistics,
}

impl Voxelizer {
    pub fn new(origin: TileOrigin) -> Self {
        Self {
            origin,
            cells: VoxelSet::new(),
            stats: RunStatistics::default(),
        }
    }

    pub fn with_capacity(origin: TileOrigin, capacity: usize) -> Self {
        Self {
            origin,
            cells: VoxelSet::with_capacity(capacity),
            stats: RunStatistics::default(),
        }
    }

    pub fn statistics(&self) -> RunStatistics {
        RunStatistics {
            unique_voxels: self.cells.len(),
            ..self.stats
        }
    }

    pub fn cells(&self) -> &VoxelSet {
        &self.cells
    }

    /// Buckets one point. Returns `true` if it opened a new cell.
    ///
    /// A rejected point leaves the voxelizer untouched.
    pub fn insert(&mut self, point: &RawPoint) -> Result<bool, VoxelizeError> {
        let index = self.stats.points_read;
        let out_of_range = || VoxelizeError::RangeViolation {
            index,
            x: point.x,
            y: point.y,
            z: point.z,
        };

        let quantized = quantize_point(point, self.origin).ok_or_else(out_of_range)?;
        let voxel = quantized.to_voxel().ok_or_else(out_of_range)?;

        self.stats.observe(quantized.z);
        Ok(self.cells.insert(voxel))
    }

    /// Colors every unique cell and hands back the vertex list.
    pub fn finish<C>(self, strategy: &C) -> VoxelizeOutput
    where
        C: ColorStrategy + ?Sized,
    {
        let stats = self.statistics();
        let vertices = self
            .cells
            .into_iter()
            .map(|voxel| VoxelVertex::new(voxel, strategy.color(voxel, &stats)))
            .collect();

        VoxelizeOutput { vertices, stats }
    }
}

/// Reads `reader` to exhaustion and voxelizes it relative to `origin`.
///
/// Any read error or out-of-range point aborts the run; there is no partial
/// result.
pub fn voxelize<R, C>(
    reader: &mut R,
    origin: TileOrigin,
    strategy: &C,
) -> Result<VoxelizeOutput, VoxelizeError>
where
    R: PointReader + ?Sized,
    C: ColorStrategy + ?Sized,
{
    let header = reader.header();
    log::info!("signature: {}", header.signature);
    log::info!("compressed: {}", header.compressed);
    if let Some(version) = &header.version {
        log::info!("version: {}", version);
    }
    match header.point_count {
        Some(count) => log::info!("points count: {}", count),
        None => log::info!("points count: unknown"),
    }

    // cap the reservation, the header count is untrusted
    let capacity = header.point_count.unwrap_or(0).min(1 << 24) as usize;
    let mut voxelizer = Voxelizer::with_capacity(origin, capacity);

    let start = std::time::Instant::now();
    loop {
        let index = voxelizer.stats.points_read;
        let point = match reader.next_point() {
            Ok(Some(point)) => point,
            Ok(None) => break,
            Err(source) => return Err(VoxelizeError::Read { index, source }),
        };
        log::trace!("point #{}: {}, {}, {}", index, point.x, point.y, point.z);
        voxelizer.insert(&point)?;
    }
    log::info!(
        "read {} points in {:?}",
        voxelizer.stats.points_read,
        start.elapsed()
    );

    let start = std::time::Instant::now();
    let output = voxelizer.finish(strategy);
    log::info!(
        "unique voxels: {} (max height {}), colored in {:?}",
        output.stats.unique_voxels,
        output.stats.max_height,
        start.elapsed()
    );

    Ok(output)
}
