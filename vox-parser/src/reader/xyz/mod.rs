use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, Trim};
use vox_core::pointcloud::{
    point::RawPoint,
    reader::{PointReader, StreamHeader},
};

use crate::error::ReaderError;

const AXES: [&str; 3] = ["x", "y", "z"];

/// Streams `x y z` records out of a delimited text file.
///
/// Separators may be commas, tabs or runs of spaces; the first data line
/// decides which. An optional first row naming the `x`, `y` and `z` columns
/// selects them by position; without it the first three fields are used.
/// Lines starting with `#` are skipped. With comma or tab separators every
/// field keeps its position, so a blank coordinate is an error.
pub struct XyzPointReader {
    path: PathBuf,
    header: StreamHeader,
    reader: csv::Reader<Source>,
    collapse_spaces: bool,
    skipped_lines: u64,
    columns: [usize; 3],
    pending: Option<StringRecord>,
    record: StringRecord,
}

fn sniff_delimiter(first_line: &[u8]) -> u8 {
    if first_line.contains(&b',') {
        b','
    } else if first_line.contains(&b'\t') {
        b'\t'
    } else {
        b' '
    }
}

// leading comment lines are consumed before the csv reader sees the rest
type Source = io::Chain<io::Cursor<Vec<u8>>, BufReader<File>>;

fn fields(record: &StringRecord, collapse_spaces: bool) -> Vec<&str> {
    if collapse_spaces {
        record.iter().filter(|field| !field.is_empty()).collect()
    } else {
        record.iter().collect()
    }
}

fn create_column_mapping(headers: &[&str]) -> Result<[usize; 3], String> {
    let mut mapping = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        let normalized = header.to_lowercase().replace(['_', '-', '"'], "");
        if AXES.contains(&normalized.as_str()) {
            mapping.entry(normalized).or_insert(index);
        }
    }

    let mut columns = [0; 3];
    for (column, axis) in columns.iter_mut().zip(AXES) {
        *column = *mapping
            .get(axis)
            .ok_or_else(|| format!("Required column '{}' is missing in header row", axis))?;
    }
    Ok(columns)
}

impl XyzPointReader {
    pub fn open(path: &Path) -> Result<Self, ReaderError> {
        let open_error = |source: io::Error| ReaderError::StreamOpen {
            path: path.to_path_buf(),
            source,
        };
        let header_error = |message: String| ReaderError::HeaderParse {
            path: path.to_path_buf(),
            source: message.into(),
        };

        let file = File::open(path).map_err(open_error)?;
        let mut buffered = BufReader::new(file);

        let mut first_line = Vec::new();
        let mut skipped_lines = 0;
        loop {
            first_line.clear();
            let read = buffered
                .read_until(b'\n', &mut first_line)
                .map_err(|e| header_error(e.to_string()))?;
            let trimmed = first_line.trim_ascii();
            if read == 0 || (!trimmed.is_empty() && !trimmed.starts_with(b"#")) {
                break;
            }
            skipped_lines += 1;
        }
        let delimiter = sniff_delimiter(first_line.trim_ascii());
        let collapse_spaces = delimiter == b' ';

        let source = io::Cursor::new(first_line).chain(buffered);
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .delimiter(delimiter)
            .from_reader(source);

        let mut first = StringRecord::new();
        let has_first = reader
            .read_record(&mut first)
            .map_err(|e| header_error(e.to_string()))?;

        let (columns, pending) = if !has_first {
            ([0, 1, 2], None)
        } else {
            let first_fields = fields(&first, collapse_spaces);
            let numeric = first_fields
                .first()
                .is_some_and(|field| field.parse::<f64>().is_ok());
            if numeric {
                ([0, 1, 2], Some(first))
            } else {
                (create_column_mapping(&first_fields).map_err(header_error)?, None)
            }
        };

        let header = StreamHeader {
            signature: "XYZ".to_string(),
            point_count: None,
            compressed: false,
            version: None,
        };

        Ok(Self {
            path: path.to_path_buf(),
            header,
            reader,
            collapse_spaces,
            skipped_lines,
            columns,
            pending,
            record: StringRecord::new(),
        })
    }

    fn parse_point(&self, record: &StringRecord) -> Result<RawPoint, String> {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let line = line + self.skipped_lines;
        let fields = fields(record, self.collapse_spaces);
        let mut coordinates = [0.0; 3];
        for ((value, column), axis) in coordinates.iter_mut().zip(self.columns).zip(AXES) {
            let field = fields
                .get(column)
                .filter(|field| !field.is_empty())
                .ok_or_else(|| format!("line {}: missing '{}' value", line, axis))?;
            *value = field
                .parse::<f64>()
                .map_err(|e| format!("line {}: invalid '{}' value {:?}: {}", line, axis, field, e))?;
        }
        Ok(RawPoint::from(coordinates))
    }
}

impl PointReader for XyzPointReader {
    fn header(&self) -> &StreamHeader {
        &self.header
    }

    fn next_point(&mut self) -> io::Result<Option<RawPoint>> {
        let record = match self.pending.take() {
            Some(record) => record,
            None => {
                let mut record = std::mem::take(&mut self.record);
                let more = self.reader.read_record(&mut record).map_err(|e| {
                    log::error!("Error reading text record from {:?}: {}", self.path, e);
                    io::Error::other(e)
                })?;
                if !more {
                    self.record = record;
                    return Ok(None);
                }
                record
            }
        };

        let parsed = self.parse_point(&record);
        self.record = record;
        match parsed {
            Ok(point) => Ok(Some(point)),
            Err(e) => {
                log::error!("Error parsing text point from {:?}: {}", self.path, e);
                Err(io::Error::new(io::ErrorKind::InvalidData, e))
            }
        }
    }
}
