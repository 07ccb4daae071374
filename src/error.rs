//! Typed failures for malformed result files.
//!
//! Every variant aborts the run; they are surfaced through `anyhow` at the top
//! and can be recovered with `downcast_ref::<ParseError>()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("file name {file:?} has no refresh-rate segment")]
    MissingRefreshRate { file: String },

    #[error("cannot parse line at {file}:{line_no}: {line:?}")]
    UnparseableLine {
        file: String,
        line_no: usize,
        line: String,
    },

    #[error("{file}: missing measurement {key:?}")]
    MissingMeasurement { file: String, key: String },

    #[error("{file}: unknown algorithm {value:?}")]
    UnknownAlgorithm { file: String, value: String },

    #[error("{file}: frames value {value:?} is not a frame count")]
    InvalidFrames { file: String, value: String },

    #[error("{file}: frames {frames} is not one of the configured buckets")]
    UnknownFrameBucket { file: String, frames: u32 },
}
