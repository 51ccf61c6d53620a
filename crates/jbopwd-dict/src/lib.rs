//! Fixed-width parsers for the Lojban reference tables.
//!
//! Both tables are line-oriented with exact byte columns; the first line is
//! a version header. A single malformed line rejects the whole table.

pub mod errors;
pub mod loader;
pub mod parse;

pub use errors::DictError;
pub use loader::{load_lexicon, parse_cmavo_file, parse_gismu_file};
pub use parse::{CMAVO_MIN_LINE, GISMU_MIN_LINE, parse_cmavo, parse_gismu};
