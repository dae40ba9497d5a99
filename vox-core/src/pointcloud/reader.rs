use std::io;

use crate::pointcloud::point::RawPoint;

/// File level information reported before any point is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamHeader {
    pub signature: String,
    /// `None` when the format does not record a count up front.
    pub point_count: Option<u64>,
    pub compressed: bool,
    pub version: Option<String>,
}

/// Sequential access to a decoded point stream.
///
/// `next_point` returns `Ok(None)` once the stream is exhausted. Implementors
/// are expected to have parsed their header by the time they are constructed.
pub trait PointReader {
    fn header(&self) -> &StreamHeader;

    fn next_point(&mut self) -> io::Result<Option<RawPoint>>;
}

impl<R: PointReader + ?Sized> PointReader for Box<R> {
    fn header(&self) -> &StreamHeader {
        (**self).header()
    }

    fn next_point(&mut self) -> io::Result<Option<RawPoint>> {
        (**self).next_point()
    }
}

/// A reader over points that are already in memory.
pub struct MemoryPointReader {
    header: StreamHeader,
    points: std::vec::IntoIter<RawPoint>,
}

impl MemoryPointReader {
    pub fn new(points: Vec<RawPoint>) -> Self {
        let header = StreamHeader {
            signature: "MEM".to_string(),
            point_count: Some(points.len() as u64),
            compressed: false,
            version: None,
        };
        Self {
            header,
            points: points.into_iter(),
        }
    }
}

impl PointReader for MemoryPointReader {
    fn header(&self) -> &StreamHeader {
        &self.header
    }

    fn next_point(&mut self) -> io::Result<Option<RawPoint>> {
        Ok(self.points.next())
    }
}
