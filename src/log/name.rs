use crate::error::ParseError;

/// Metadata encoded in a result file name.
///
/// Examples:
/// run_zipf.1.txt     =>  trace "zipf"
/// res_gcc.rate_64    =>  trace "gcc", refresh rate "64"
/// A.8.OPT            =>  group "A.trace"
///
/// Empty tokens are kept as values; only the refresh rate can be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    /// Everything before the first '.'.
    pub stem: String,
    /// Last '_' token of the stem.
    pub trace: String,
    /// Last '_' token of the second '.' segment, if there is one.
    pub refresh_rate: Option<String>,
}

impl FileName {
    pub fn parse(file_name: &str) -> Self {
        let (stem, rest) = match file_name.split_once('.') {
            Some((stem, rest)) => (stem, Some(rest)),
            None => (file_name, None),
        };

        let refresh_rate = rest.map(|rest| {
            let second = rest.split_once('.').map_or(rest, |(s, _)| s);
            last_token(second).to_string()
        });

        Self {
            stem: stem.to_string(),
            trace: last_token(stem).to_string(),
            refresh_rate,
        }
    }

    /// Name the multi-algorithm table groups rows under.
    pub fn group_name(&self) -> String {
        format!("{}.trace", self.stem)
    }

    pub fn require_refresh_rate(&self, file_name: &str) -> Result<&str, ParseError> {
        self.refresh_rate
            .as_deref()
            .ok_or_else(|| ParseError::MissingRefreshRate {
                file: file_name.to_string(),
            })
    }
}

fn last_token(segment: &str) -> &str {
    segment.rsplit('_').next().unwrap_or(segment)
}
