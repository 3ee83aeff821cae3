//! Reading and writing record files.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ije_model::DeathRecord;
use serde::Deserialize;

/// One IJE record from an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IjeLine {
    /// 1-based line number in the input.
    pub number: usize,
    pub text: String,
}

/// JSON input: a single record or an array of records.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordInput {
    Many(Vec<DeathRecord>),
    One(Box<DeathRecord>),
}

/// Non-empty lines of an IJE file, without line terminators.
pub fn read_ije_lines(path: &Path) -> Result<Vec<IjeLine>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read IJE file {}", path.display()))?;
    Ok(parse_ije_lines(&text))
}

pub fn parse_ije_lines(text: &str) -> Vec<IjeLine> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| IjeLine {
            number: index + 1,
            text: line.trim_end_matches('\r').to_string(),
        })
        .collect()
}

/// Records from a JSON file holding one record or an array.
pub fn read_json_records(path: &Path) -> Result<Vec<DeathRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read JSON file {}", path.display()))?;
    parse_json_records(&text).with_context(|| format!("parse death records in {}", path.display()))
}

pub fn parse_json_records(text: &str) -> Result<Vec<DeathRecord>> {
    let input: RecordInput = serde_json::from_str(text)?;
    Ok(match input {
        RecordInput::Many(records) => records,
        RecordInput::One(record) => vec![*record],
    })
}

pub fn records_to_json(records: &[DeathRecord], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(records)?
    } else {
        serde_json::to_string_pretty(records)?
    };
    Ok(json)
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes()).context("write to stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped_and_numbered() {
        let lines = parse_ije_lines("first\r\n\n   \nsecond\n");
        assert_eq!(
            lines,
            vec![
                IjeLine {
                    number: 1,
                    text: "first".to_string(),
                },
                IjeLine {
                    number: 4,
                    text: "second".to_string(),
                },
            ]
        );
    }

    #[test]
    fn json_accepts_object_or_array() {
        let one = parse_json_records(r#"{"familyName": "SMITH"}"#).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].family_name.as_deref(), Some("SMITH"));

        let many = parse_json_records(r#"[{"familyName": "SMITH"}, {}]"#).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1], DeathRecord::new());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_json_records("[1, 2]").is_err());
        assert!(parse_json_records("not json").is_err());
    }
}
