pub mod las;
pub mod xyz;

use std::{ffi::OsStr, path::Path};

use vox_core::pointcloud::reader::PointReader;

use crate::error::ReaderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Las,
    Laz,
    Csv,
    Txt,
    Xyz,
}

pub fn get_extension(extension: &str) -> Result<Extension, ReaderError> {
    match extension.to_ascii_lowercase().as_str() {
        "las" => Ok(Extension::Las),
        "laz" => Ok(Extension::Laz),
        "csv" => Ok(Extension::Csv),
        "txt" => Ok(Extension::Txt),
        "xyz" => Ok(Extension::Xyz),
        _ => Err(ReaderError::UnsupportedExtension(extension.to_string())),
    }
}

/// Opens `path` with the reader matching its extension. The header has been
/// parsed by the time this returns.
pub fn open_point_reader(path: &Path) -> Result<Box<dyn PointReader>, ReaderError> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .ok_or_else(|| ReaderError::MissingExtension(path.to_path_buf()))?;

    let reader: Box<dyn PointReader> = match get_extension(extension)? {
        Extension::Las | Extension::Laz => Box::new(self::las::LasPointReader::open(path)?),
        Extension::Csv | Extension::Txt | Extension::Xyz => {
            Box::new(self::xyz::XyzPointReader::open(path)?)
        }
    };
    Ok(reader)
}
