//! Operator input processing

pub mod parser;

pub use parser::{parse_coordinate_list, ParseError};
