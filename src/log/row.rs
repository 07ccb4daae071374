use crate::error::ParseError;
use crate::log::FileName;

/// One `key: value` pair read from a result line. Both sides are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub key: String,
    pub value: String,
}

/// A parsed result file, in line order.
#[derive(Debug, Clone)]
pub struct ResultFile {
    pub file_name: String,
    pub name: FileName,
    pub measurements: Vec<Measurement>,
}

impl ResultFile {
    /// Last value recorded for `key`; a repeated key overwrites earlier lines.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.measurements
            .iter()
            .rev()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }

    pub fn require(&self, key: &str) -> Result<&str, ParseError> {
        self.get(key).ok_or_else(|| ParseError::MissingMeasurement {
            file: self.file_name.clone(),
            key: key.to_string(),
        })
    }

    /// Values in line order, as the passthrough tables emit them.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.measurements.iter().map(|m| m.value.as_str())
    }
}
