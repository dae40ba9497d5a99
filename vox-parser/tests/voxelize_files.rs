use std::path::Path;

use vox_core::voxel::{voxelize, DepthBanding, RawHeight, TileOrigin};
use vox_core::VoxelizeError;
use vox_parser::{open_point_reader, ReaderError};

fn write_las(path: &Path, header: las::Header, points: &[(f64, f64, f64)]) {
    let mut writer = las::Writer::from_path(path, header).unwrap();
    for &(x, y, z) in points {
        writer
            .write_point(las::Point {
                x,
                y,
                z,
                ..Default::default()
            })
            .unwrap();
    }
    writer.close().unwrap();
}

fn sorted_positions(vertices: &[vox_core::voxel::VoxelVertex]) -> Vec<[i32; 3]> {
    let mut cells: Vec<_> = vertices
        .iter()
        .map(|v| v.position.map(|c| c as i32))
        .collect();
    cells.sort();
    cells
}

#[test]
fn las_tile_is_voxelized_relative_to_its_origin() {
    let dir = tempfile::tempdir().unwrap();
    let origin = TileOrigin::new(6830, 2475);
    let path = dir.path().join(origin.file_name("las"));
    write_las(
        &path,
        las::Header::default(),
        &[
            (683_000.25, 247_500.5, 5.2),
            (683_000.75, 247_500.25, 5.9),
            (683_001.5, 247_500.5, 5.2),
            (682_999.5, 247_599.5, 12.0),
        ],
    );

    let mut reader = open_point_reader(&path).unwrap();
    assert_eq!(reader.header().signature, "LASF");
    assert_eq!(reader.header().point_count, Some(4));
    assert!(!reader.header().compressed);

    let output = voxelize(&mut reader, origin, &DepthBanding::default()).unwrap();
    assert_eq!(
        sorted_positions(&output.vertices),
        vec![[-1, -12, 99], [0, -5, 0], [1, -5, 0]]
    );
    assert_eq!(output.stats.points_read, 4);
    assert_eq!(output.stats.max_height, 12);
}

#[test]
fn laz_tile_reports_compression() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("0_0.laz");
    let mut builder = las::Builder::default();
    builder.point_format.is_compressed = true;
    write_las(
        &path,
        builder.into_header().unwrap(),
        &[(0.0, 0.0, 10.0), (0.5, 0.5, 10.5)],
    );

    let mut reader = open_point_reader(&path).unwrap();
    assert!(reader.header().compressed);

    let output = voxelize(&mut reader, TileOrigin::new(0, 0), &RawHeight).unwrap();
    assert_eq!(output.vertices.len(), 1);
    assert_eq!(output.vertices[0].position, [0.0, -10.0, 0.0]);
    assert_eq!(output.vertices[0].color, [10.0, 10.0, 10.0]);
}

#[test]
fn empty_las_yields_no_vertices() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.las");
    write_las(&path, las::Header::default(), &[]);

    let mut reader = open_point_reader(&path).unwrap();
    assert_eq!(reader.header().point_count, Some(0));
    let output = voxelize(&mut reader, TileOrigin::new(0, 0), &DepthBanding::default()).unwrap();
    assert!(output.vertices.is_empty());
}

#[test]
fn text_tile_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.xyz");
    std::fs::write(&path, "0 0 5.2\n0 0 5.9\n1 0 5.2\n").unwrap();

    let mut reader = open_point_reader(&path).unwrap();
    let output = voxelize(&mut reader, TileOrigin::new(0, 0), &DepthBanding::default()).unwrap();
    assert_eq!(output.vertices.len(), 2);
    assert_eq!(sorted_positions(&output.vertices), vec![[0, -5, 0], [1, -5, 0]]);
    assert!(output.vertices.iter().all(|v| v.color == [0.0; 3]));
}

#[test]
fn malformed_text_point_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.csv");
    std::fs::write(&path, "x,y,z\n0,0,1\n0,zero,2\n").unwrap();

    let mut reader = open_point_reader(&path).unwrap();
    let err = voxelize(&mut reader, TileOrigin::new(0, 0), &DepthBanding::default()).unwrap_err();
    assert!(matches!(err, VoxelizeError::Read { index: 1, .. }));
}

#[test]
fn missing_tile_fails_before_voxelizing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("6830_2475.laz");
    assert!(matches!(
        open_point_reader(&path),
        Err(ReaderError::StreamOpen { .. })
    ));
}
