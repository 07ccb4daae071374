use crate::Result;
use crate::error::ParseError;
use crate::log::{FileName, Measurement, ResultFile};
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;
use std::path::Path;

// Only the trailing `key: value` pair is read.
// Capture:
// 1) key: text after the last ' ' of the second-to-last ':' segment (may be empty)
// 2) value: the last ':' segment
const MEASUREMENT_RE: &str = r#"^(?:.*:)?(?:[^:]* )?(?P<key>[^: ]*):(?P<value>[^:]*)$"#;

/// Parse every regular file in `dir`, in file-name order.
///
/// Sorting the listing makes row order independent of the filesystem.
pub fn parse_dir(dir: &Path) -> Result<Vec<ResultFile>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read result dir {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list result dir {}", dir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => bail!("non-UTF-8 file name in {}: {:?}", dir.display(), raw),
        }
    }
    names.sort();

    let re = Regex::new(MEASUREMENT_RE)?;
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(&name);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("read result file {}", path.display()))?;
        let file = parse_with(&re, &name, &text)?;
        tracing::debug!(
            file = %name,
            measurements = file.measurements.len(),
            "parsed result file"
        );
        out.push(file);
    }

    Ok(out)
}

#[cfg(test)]
pub fn parse_result_text(file_name: &str, text: &str) -> Result<ResultFile> {
    let re = Regex::new(MEASUREMENT_RE)?;
    Ok(parse_with(&re, file_name, text)?)
}

/// Parse one result file's name and contents.
///
/// Expected lines:
/// <prefix> <key>: <value>
///
/// Example:
/// Total page faults: 12    =>  ("faults", "12")
fn parse_with(
    re: &Regex,
    file_name: &str,
    text: &str,
) -> std::result::Result<ResultFile, ParseError> {
    let name = FileName::parse(file_name);

    let mut measurements = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let caps = re
            .captures(line)
            .ok_or_else(|| ParseError::UnparseableLine {
                file: file_name.to_string(),
                line_no: lineno + 1,
                line: line.to_string(),
            })?;

        measurements.push(Measurement {
            key: caps["key"].trim().to_string(),
            value: caps["value"].trim().to_string(),
        });
    }

    Ok(ResultFile {
        file_name: file_name.to_string(),
        name,
        measurements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(file: &ResultFile) -> Vec<(&str, &str)> {
        file.measurements
            .iter()
            .map(|m| (m.key.as_str(), m.value.as_str()))
            .collect()
    }

    #[test]
    fn key_is_last_token_before_final_colon() {
        let file = parse_result_text(
            "run_zipf.1.txt",
            "x: frames: 16\ny: disk: 3\nz: faults: 7\n",
        )
        .unwrap();
        assert_eq!(pairs(&file), vec![("frames", "16"), ("disk", "3"), ("faults", "7")]);
        assert_eq!(file.values().collect::<Vec<_>>(), vec!["16", "3", "7"]);
    }

    #[test]
    fn prefix_text_is_ignored() {
        let file = parse_result_text(
            "A.8.OPT",
            "Number of frames: 8\nSelected Algorithm: OPT\nTotal writes to disk: 5\nTotal page faults: 12\n",
        )
        .unwrap();
        assert_eq!(
            pairs(&file),
            vec![("frames", "8"), ("Algorithm", "OPT"), ("disk", "5"), ("faults", "12")]
        );
    }

    #[test]
    fn extra_colons_in_prefix() {
        let file = parse_result_text("t.1", "a:b c: d: 5\r\n").unwrap();
        assert_eq!(pairs(&file), vec![("d", "5")]);
    }

    #[test]
    fn blank_line_is_fatal() {
        let err = parse_result_text("run_zipf.1", "frames: 8\n\ndisk: 3\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::UnparseableLine {
                file: "run_zipf.1".to_string(),
                line_no: 2,
                line: String::new(),
            })
        );

        let err = parse_result_text("t.1", "   \n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::UnparseableLine { line_no: 1, .. })
        ));
    }

    #[test]
    fn final_newline_is_not_a_blank_line() {
        let file = parse_result_text("t.1", "frames: 8\n").unwrap();
        assert_eq!(pairs(&file), vec![("frames", "8")]);
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let file = parse_result_text("t.1", "disk: 1\ndisk: 2\n").unwrap();
        assert_eq!(file.get("disk"), Some("2"));
        assert_eq!(file.values().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn line_without_colon_is_fatal() {
        let err = parse_result_text("t.1", "frames: 8\nno colon here\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::UnparseableLine {
                file: "t.1".to_string(),
                line_no: 2,
                line: "no colon here".to_string(),
            })
        );
    }

    #[test]
    fn empty_key_is_kept() {
        let file = parse_result_text("t.1", ": 5\n").unwrap();
        assert_eq!(pairs(&file), vec![("", "5")]);
        assert_eq!(file.values().collect::<Vec<_>>(), vec!["5"]);
    }

    #[test]
    fn space_before_colon_gives_empty_key() {
        let file = parse_result_text("t.1", "frames :8\n").unwrap();
        assert_eq!(pairs(&file), vec![("", "8")]);
        assert_eq!(file.get("frames"), None);
    }

    #[test]
    fn key_token_split_on_spaces_only() {
        let file = parse_result_text("t.1", "Total\tfaults: 3\nx:: 4\n").unwrap();
        assert_eq!(pairs(&file), vec![("Total\tfaults", "3"), ("", "4")]);
    }

    #[test]
    fn missing_key_lookup() {
        let file = parse_result_text("t.1", "frames: 8\n").unwrap();
        assert_eq!(
            file.require("disk"),
            Err(ParseError::MissingMeasurement {
                file: "t.1".to_string(),
                key: "disk".to_string(),
            })
        );
    }

    #[test]
    fn dir_listing_is_sorted_and_skips_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_two.1"), "frames: 2\n").unwrap();
        fs::write(dir.path().join("a_one.1"), "frames: 1\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = parse_dir(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a_one.1", "b_two.1"]);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_dir(&dir.path().join("absent")).unwrap_err();
        assert!(err.to_string().contains("read result dir"));
    }
}
