//! Output encoders for aggregated tables.

pub mod csv;

pub use self::csv::write_csv;

use crate::model::Table;

/// Rows as JSON, for echoing to stdout.
pub fn render_json(table: &Table) -> anyhow::Result<String> {
    Ok(serde_json::to_string(table)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_header_and_rows() {
        let table = Table {
            header: None,
            rows: vec![vec!["zipf".to_string(), "16".to_string()]],
        };
        assert_eq!(
            render_json(&table).unwrap(),
            r#"{"header":null,"rows":[["zipf","16"]]}"#
        );
    }
}
