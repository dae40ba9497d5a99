use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use las::Reader;
use vox_core::pointcloud::{
    point::RawPoint,
    reader::{PointReader, StreamHeader},
};

use crate::error::ReaderError;

/// Streams points out of a single LAS or LAZ file.
pub struct LasPointReader {
    path: PathBuf,
    header: StreamHeader,
    reader: Reader,
}

impl LasPointReader {
    pub fn open(path: &Path) -> Result<Self, ReaderError> {
        let file = File::open(path).map_err(|source| ReaderError::StreamOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let header_error = |source: las::Error| ReaderError::HeaderParse {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        let reader = Reader::new(BufReader::new(file)).map_err(header_error)?;
        let header = Self::convert_header(reader.header()).map_err(header_error)?;

        log::debug!("opened {:?}: {:?}", path, header);

        Ok(Self {
            path: path.to_path_buf(),
            header,
            reader,
        })
    }

    fn convert_header(header: &las::Header) -> Result<StreamHeader, las::Error> {
        let raw = header.clone().into_raw()?;
        Ok(StreamHeader {
            signature: String::from_utf8_lossy(&raw.file_signature).into_owned(),
            point_count: Some(header.number_of_points()),
            compressed: header.point_format().is_compressed,
            version: Some(header.version().to_string()),
        })
    }

    fn convert_las_point(las_point: las::Point) -> RawPoint {
        RawPoint {
            x: las_point.x,
            y: las_point.y,
            z: las_point.z,
        }
    }
}

impl PointReader for LasPointReader {
    fn header(&self) -> &StreamHeader {
        &self.header
    }

    fn next_point(&mut self) -> io::Result<Option<RawPoint>> {
        match self.reader.points().next() {
            Some(Ok(las_point)) => Ok(Some(Self::convert_las_point(las_point))),
            Some(Err(e)) => {
                log::error!("Error reading LAS point from {:?}: {}", self.path, e);
                Err(io::Error::other(e))
            }
            None => Ok(None),
        }
    }
}
