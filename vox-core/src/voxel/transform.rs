//! Source point to voxel cell mapping.
//!
//! Coordinates are shifted by the tile origin and floored: a point lying on a
//! cell boundary belongs to the cell that starts there, and anything just
//! below it to the previous one, including on the negative side of the origin.
//! The quantized source axes are then relabelled for the renderer: source z
//! becomes the negated vertical axis and source y the depth axis.

use crate::pointcloud::point::RawPoint;
use crate::voxel::coord::{TileOrigin, VoxelCoord};

/// Floor-quantized source coordinates, before the axis reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantized {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Quantized {
    /// `(x, -z, y)`. `None` when `z` has no `i32` negation.
    pub fn to_voxel(self) -> Option<VoxelCoord> {
        Some(VoxelCoord::new(self.x, self.z.checked_neg()?, self.y))
    }
}

/// Floors `value` into an `i32`, rejecting NaN, infinities and anything
/// outside the integer range instead of saturating.
pub fn quantize(value: f64) -> Option<i32> {
    let floored = value.floor();
    if floored.is_finite() && floored >= i32::MIN as f64 && floored <= i32::MAX as f64 {
        Some(floored as i32)
    } else {
        None
    }
}

pub fn quantize_point(point: &RawPoint, origin: TileOrigin) -> Option<Quantized> {
    let (offset_x, offset_y) = origin.offset();
    Some(Quantized {
        x: quantize(point.x - offset_x)?,
        y: quantize(point.y - offset_y)?,
        z: quantize(point.z)?,
    })
}

pub fn voxel_for(point: &RawPoint, origin: TileOrigin) -> Option<VoxelCoord> {
    quantize_point(point, origin)?.to_voxel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_floors_toward_negative_infinity() {
        assert_eq!(quantize(5.0), Some(5));
        assert_eq!(quantize(5.999), Some(5));
        assert_eq!(quantize(-0.001), Some(-1));
        assert_eq!(quantize(-1.0), Some(-1));
        assert_eq!(quantize(-1.5), Some(-2));
    }

    #[test]
    fn quantize_rejects_unrepresentable_values() {
        assert_eq!(quantize(f64::NAN), None);
        assert_eq!(quantize(f64::INFINITY), None);
        assert_eq!(quantize(f64::NEG_INFINITY), None);
        assert_eq!(quantize(i32::MAX as f64 + 1.0), None);
        assert_eq!(quantize(i32::MIN as f64 - 0.5), None);
        assert_eq!(quantize(i32::MAX as f64 + 0.5), Some(i32::MAX));
        assert_eq!(quantize(i32::MIN as f64), Some(i32::MIN));
    }

    #[test]
    fn boundary_points_relative_to_tile_origin() {
        let origin = TileOrigin::new(6830, 2475);
        let base_x = 6830.0 * 100.0;
        let base_y = 2475.0 * 100.0;

        let at = |dx: f64| voxel_for(&RawPoint::new(base_x + dx, base_y, 0.0), origin).unwrap();
        assert_eq!(at(5.0).x, 5);
        assert_eq!(at(5.999).x, 5);
        assert_eq!(at(-0.001).x, -1);
        assert_eq!(at(0.0).x, 0);
    }

    #[test]
    fn axes_are_reordered_for_the_renderer() {
        let origin = TileOrigin::new(0, 0);
        assert_eq!(
            voxel_for(&RawPoint::new(0.0, 0.0, 10.0), origin),
            Some(VoxelCoord::new(0, -10, 0))
        );
        assert_eq!(
            voxel_for(&RawPoint::new(1.5, 7.2, -3.5), origin),
            Some(VoxelCoord::new(1, 4, 7))
        );
    }

    #[test]
    fn tile_origin_shifts_x_and_y_only() {
        let origin = TileOrigin::new(2, 3);
        assert_eq!(
            quantize_point(&RawPoint::new(250.5, 310.0, 42.9), origin),
            Some(Quantized { x: 50, y: 10, z: 42 })
        );
    }

    #[test]
    fn minimum_height_cannot_be_negated() {
        let origin = TileOrigin::new(0, 0);
        let point = RawPoint::new(0.0, 0.0, i32::MIN as f64);
        assert!(quantize_point(&point, origin).is_some());
        assert_eq!(voxel_for(&point, origin), None);
    }
}
