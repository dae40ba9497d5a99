pub mod point;
pub mod reader;
