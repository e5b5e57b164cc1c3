//! Line parser for tower descriptions.
//!
//! One record per line:
//!
//! ```text
//! pbga (66)
//! fwft (72) -> ktlj, cntj, xhth
//! ```

use regex::Regex;
use thiserror::Error;
use tracing::instrument;

use crate::domain::Record;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: malformed record: '{text}'")]
    MalformedRecord { line: usize, text: String },

    #[error("line {line}: weight '{weight}' out of range")]
    InvalidWeight { line: usize, weight: String },
}

/// Parses the `name (weight) -> children` line format.
pub struct RecordParser {
    line_regex: Regex,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser {
    pub fn new() -> Self {
        Self {
            line_regex: Regex::new(r"^(\w+) \((\d+)\)(?: -> (.+))?$").unwrap(),
        }
    }

    /// Parse a whole description, skipping blank lines. Line numbers in
    /// errors are 1-based.
    #[instrument(level = "debug", skip(self, input))]
    pub fn parse(&self, input: &str) -> Result<Vec<Record>, ParseError> {
        let mut records = Vec::new();
        for (idx, line) in input.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() {
                continue;
            }
            records.push(self.parse_line(line, idx + 1)?);
        }
        Ok(records)
    }

    fn parse_line(&self, line: &str, line_no: usize) -> Result<Record, ParseError> {
        let caps = self
            .line_regex
            .captures(line)
            .ok_or_else(|| ParseError::MalformedRecord {
                line: line_no,
                text: line.to_string(),
            })?;

        let name = caps[1].to_string();
        let weight: i64 = caps[2].parse().map_err(|_| ParseError::InvalidWeight {
            line: line_no,
            weight: caps[2].to_string(),
        })?;

        let children = match caps.get(3) {
            None => Vec::new(),
            Some(list) => {
                let mut children = Vec::new();
                for child in list.as_str().split(',') {
                    let child = child.trim();
                    if child.is_empty() || !child.chars().all(|c| c.is_alphanumeric() || c == '_')
                    {
                        return Err(ParseError::MalformedRecord {
                            line: line_no,
                            text: line.to_string(),
                        });
                    }
                    children.push(child.to_string());
                }
                children
            }
        };

        Ok(Record {
            name,
            weight,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_leaf_line() {
        let records = RecordParser::new().parse("pbga (66)").unwrap();
        assert_eq!(records, vec![Record::new("pbga", 66, vec![])]);
    }

    #[test]
    fn test_parse_line_with_children() {
        let records = RecordParser::new()
            .parse("fwft (72) -> ktlj, cntj, xhth")
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "fwft");
        assert_eq!(records[0].weight, 72);
        assert_eq!(records[0].children, vec!["ktlj", "cntj", "xhth"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = RecordParser::new()
            .parse("pbga (66)\n\nxhth (57)\n")
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[rstest]
    #[case("pbga")]
    #[case("pbga ()")]
    #[case("pbga (sixty)")]
    #[case("pbga (66) ->")]
    #[case("pbga (66) -> a,, b")]
    #[case("(66) -> a")]
    fn test_malformed_lines_are_rejected(#[case] line: &str) {
        let err = RecordParser::new().parse(line).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_weight_overflow_is_rejected() {
        let line = "pbga (99999999999999999999999)";
        let err = RecordParser::new().parse(line).unwrap_err();
        assert!(matches!(err, ParseError::InvalidWeight { line: 1, .. }));
    }
}
