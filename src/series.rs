//! Row Processing
//!
//! Splits parsed rows into the bar-chart series and the table view.
//! A row is charted only when both its `Label` and `Value` cells are truthy
//! and the value is numeric; every row stays in the table.

use serde::Serialize;

use crate::dataset::{Row, Scalar};

/// Column holding the bar label
pub const LABEL_COLUMN: &str = "Label";
/// Column holding the bar height
pub const VALUE_COLUMN: &str = "Value";

/// Parallel labels/values feeding the bar chart
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bar. Labels and values only grow together.
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Smallest and largest value, if any
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.values.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Output of the row processor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedRows {
    pub series: ChartSeries,
    /// All rows, untouched and in source order
    pub table: Vec<Row>,
}

/// Label and value of a row that qualifies for the chart
pub fn chart_point(row: &Row) -> Option<(String, f64)> {
    let label = row.get(LABEL_COLUMN).filter(|s| s.is_truthy())?;
    let value = row
        .get(VALUE_COLUMN)
        .filter(|s| s.is_truthy())
        .and_then(Scalar::as_number)?;
    Some((label.to_string(), value))
}

/// Build the chart series from rows, preserving row order
pub fn chart_series(rows: &[Row]) -> ChartSeries {
    let mut series = ChartSeries::new();
    for (label, value) in rows.iter().filter_map(chart_point) {
        series.push(label, value);
    }
    series
}

/// Process rows into chart series plus table rows
pub fn process_rows(rows: Vec<Row>) -> ProcessedRows {
    ProcessedRows {
        series: chart_series(&rows),
        table: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: impl Into<Scalar>, value: impl Into<Scalar>) -> Row {
        Row::new().field(LABEL_COLUMN, label).field(VALUE_COLUMN, value)
    }

    #[test]
    fn test_chart_series_filters_rows() {
        let rows = vec![
            row("a", 1.0),
            row("", 2.0),
            row("c", 0.0),
            Row::new().field(LABEL_COLUMN, "d"),
            row(Scalar::Null, 5.0),
            row("f", "not a number"),
            row("g", " 7 "),
            row(3.0, 4.5),
        ];

        let processed = process_rows(rows.clone());

        assert_eq!(processed.series.labels(), &["a", "g", "3"]);
        assert_eq!(processed.series.values(), &[1.0, 7.0, 4.5]);
        assert_eq!(processed.table, rows);
    }

    #[test]
    fn test_series_lengths_match() {
        let rows: Vec<Row> = (0..20)
            .map(|i| {
                if i % 3 == 0 {
                    Row::new().field("Other", i as f64)
                } else {
                    row(format!("r{}", i), i as f64)
                }
            })
            .collect();

        let series = chart_series(&rows);
        assert_eq!(series.labels().len(), series.values().len());
        assert_eq!(series.len(), 13);
    }

    #[test]
    fn test_rows_without_chart_columns() {
        let rows = vec![Row::new().field("Name", "x").field("Count", 3.0)];
        let processed = process_rows(rows);

        assert!(processed.series.is_empty());
        assert_eq!(processed.table.len(), 1);
    }

    #[test]
    fn test_bool_value_counts_as_one() {
        let series = chart_series(&[row("yes", true), row("no", false)]);
        assert_eq!(series.values(), &[1.0]);
    }

    #[test]
    fn test_value_range() {
        let mut series = ChartSeries::new();
        assert_eq!(series.value_range(), None);
        series.push("a", 3.0);
        series.push("b", -1.0);
        series.push("c", 8.0);
        assert_eq!(series.value_range(), Some((-1.0, 8.0)));
    }
}
