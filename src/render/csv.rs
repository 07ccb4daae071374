use crate::model::Table;
use anyhow::{Context, anyhow};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::path::Path;

/// Encode a table with every field quoted and CRLF record endings.
pub fn render_csv(table: &Table) -> anyhow::Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .flexible(true)
        .from_writer(Vec::new());

    if let Some(header) = &table.header {
        wtr.write_record(header)?;
    }
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    wtr.into_inner()
        .map_err(|e| anyhow!("flush csv: {}", e.into_error()))
}

/// Render first, then replace `path` in one write so a failed run leaves no partial file.
pub fn write_csv(path: &Path, table: &Table) -> anyhow::Result<()> {
    let bytes = render_csv(table)?;
    fs::write(path, bytes).with_context(|| format!("write csv {}", path.display()))
}
