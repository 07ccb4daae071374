//! Fixed run configuration.
//!
//! Each variant owns its input directory and output file; nothing here is
//! read from the environment or from a file. The only tunable structure is
//! `AlgoConfig`, which lists the frame buckets the multi-algorithm table is
//! seeded with.

pub mod algo;
pub mod variant;

pub use algo::{AlgoConfig, Algorithm};
pub use variant::Variant;
