//! CSV Parsing
//!
//! Header-driven CSV parsing with automatic scalar type inference.

use super::error::{DatasetError, DatasetResult, RowError, RowErrorKind};
use super::types::{Row, Scalar};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Numbers at or beyond this magnitude stay text
const FLOAT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

fn float_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?\s*$")
            .expect("float pattern is valid")
    })
}

/// Infer the scalar type of a raw cell
pub fn infer_scalar(raw: &str) -> Scalar {
    match raw {
        "" => return Scalar::Null,
        "true" | "TRUE" => return Scalar::Bool(true),
        "false" | "FALSE" => return Scalar::Bool(false),
        _ => {}
    }

    if float_pattern().is_match(raw) {
        if let Ok(value) = raw.trim().parse::<f64>() {
            if value > -FLOAT_LIMIT && value < FLOAT_LIMIT {
                return Scalar::Number(value);
            }
        }
    }

    Scalar::Text(raw.to_string())
}

/// Rename repeated header names to `name_1`, `name_2`, ... so no column is lost
fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let raw: Vec<&str> = raw.collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(raw.len());

    for (i, &name) in raw.iter().enumerate() {
        let mut header = name.to_string();
        if seen.contains(&header) {
            let count = counts.entry(name).or_insert(0);
            loop {
                *count += 1;
                let candidate = format!("{}_{}", name, count);
                // Skip suffixes already taken by this or a later original column
                if !seen.contains(&candidate) && !raw[i + 1..].contains(&candidate.as_str()) {
                    header = candidate;
                    break;
                }
            }
        }
        seen.insert(header.clone());
        headers.push(header);
    }
    headers
}

/// CSV parser with configurable delimiter and typing
#[derive(Debug, Clone)]
pub struct CsvParser {
    delimiter: char,
    dynamic_typing: bool,
}

/// Result of parsing one CSV file
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    /// Column names from the header row
    pub headers: Vec<String>,
    /// Parsed records in file order
    pub rows: Vec<Row>,
    /// Per-record problems that did not abort the parse
    pub errors: Vec<RowError>,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvParser {
    /// Comma-delimited, dynamic typing on
    pub fn new() -> Self {
        Self {
            delimiter: ',',
            dynamic_typing: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// When disabled every cell is kept as text
    pub fn with_dynamic_typing(mut self, enabled: bool) -> Self {
        self.dynamic_typing = enabled;
        self
    }

    fn convert(&self, raw: &str) -> Scalar {
        if self.dynamic_typing {
            infer_scalar(raw)
        } else {
            Scalar::Text(raw.to_string())
        }
    }

    /// Parse a CSV document held in memory
    pub fn parse_bytes(&self, bytes: &[u8]) -> DatasetResult<ParsedCsv> {
        if !self.delimiter.is_ascii() {
            return Err(DatasetError::InvalidDelimiter(self.delimiter));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter as u8)
            .from_reader(bytes);

        let headers = dedupe_headers(reader.headers()?.iter());

        let mut rows = Vec::new();
        let mut errors = Vec::new();

        for result in reader.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    errors.push(RowError {
                        line,
                        kind: RowErrorKind::Malformed(e.to_string()),
                    });
                    continue;
                }
            };

            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let expected = headers.len();
            let found = record.len();

            if found < expected {
                errors.push(RowError {
                    line,
                    kind: RowErrorKind::TooFewFields { expected, found },
                });
            } else if found > expected {
                errors.push(RowError {
                    line,
                    kind: RowErrorKind::TooManyFields { expected, found },
                });
            }

            let mut row = Row::with_capacity(expected.min(found));
            for (column, raw) in headers.iter().zip(record.iter()) {
                row.insert(column.clone(), self.convert(raw));
            }
            rows.push(row);
        }

        Ok(ParsedCsv {
            headers,
            rows,
            errors,
        })
    }

    /// Parse a CSV document from a string (useful for testing)
    pub fn parse_str(&self, csv_data: &str) -> DatasetResult<ParsedCsv> {
        self.parse_bytes(csv_data.as_bytes())
    }
}
