//! One aggregation pass: parse the variant's input dir, build the table, write the CSV.

use crate::Result;
use crate::config::{AlgoConfig, Variant};
use crate::{log, model, render};
use std::path::{Path, PathBuf};

pub struct Outcome {
    pub output: PathBuf,
    pub table: model::Table,
}

/// Run `variant` with its fixed paths resolved against `base`.
///
/// All rows are built before the output file is touched; any malformed input
/// aborts the run and leaves an existing output file as it was.
pub fn run_variant(variant: Variant, base: &Path, config: AlgoConfig) -> Result<Outcome> {
    let input = base.join(variant.input_dir());
    let files = log::parse_dir(&input)?;
    tracing::debug!(%variant, dir = %input.display(), files = files.len(), "parsed results");

    let table = match variant {
        Variant::Aging => model::passthrough_table(&files, true)?,
        Variant::Fifo => model::passthrough_table(&files, false)?,
        Variant::Algo => model::algo_table(&files, config)?,
    };

    let output = base.join(variant.output_file());
    render::write_csv(&output, &table)?;

    Ok(Outcome { output, table })
}
