pub mod error;
pub mod reader;

pub use error::ReaderError;
pub use reader::{get_extension, open_point_reader, Extension};
