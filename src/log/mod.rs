//! Parsing for simulation result files: file-name metadata plus `key: value` lines.

pub mod name;
pub mod parse;
pub mod row;

pub use name::FileName;
pub use parse::parse_dir;
pub use row::{Measurement, ResultFile};
