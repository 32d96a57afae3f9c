//! Structured index/value tables.
//!
//! Builders here compute everything about a table (alignment width, padding,
//! column agreement, centered cells) without producing any terminal text.
//! [`super::render`] turns a [`Table`] into lines.

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::parser::{parse_token, HexDigitString};

/// Narrowest cell width.
pub const MIN_ALIGNMENT_WIDTH: usize = 2;

/// Width shared by every cell of a table with `column_count` columns.
pub fn alignment_width(column_count: usize) -> usize {
    let highest_index = column_count.saturating_sub(1);
    highest_index.to_string().len().max(MIN_ALIGNMENT_WIDTH)
}

/// Centers `text` in `width` columns; odd padding goes to the right.
pub fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// One flag per column, true where every row has the same digit.
///
/// Rows must already be padded to the same length.
pub fn column_agreement(rows: &[HexDigitString]) -> Vec<bool> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    (0..first.digit_count())
        .map(|i| {
            let digit = first.digit_at(i);
            rows.iter().all(|row| row.digit_at(i) == digit)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Index,
    Value,
}

/// A centered cell and whether its column is highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kind: RowKind,
    pub cells: Vec<Cell>,
}

impl Row {
    fn build<I>(kind: RowKind, texts: I, width: usize, highlight: &[bool]) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let cells = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Cell {
                text: center(&text.to_string(), width),
                highlighted: highlight.get(i).copied().unwrap_or(false),
            })
            .collect();

        Self { kind, cells }
    }

    /// Cell texts without highlighting.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

/// A header row of column indices followed by one value row per number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub width: usize,
    /// The digit strings shown, after padding.
    pub digits: Vec<HexDigitString>,
    /// Column agreement; only present for comparisons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement: Option<Vec<bool>>,
    pub header: Row,
    pub rows: Vec<Row>,
}

impl Table {
    /// Table for a single number. Nothing is highlighted.
    pub fn single(digits: &HexDigitString) -> Self {
        let columns = digits.digit_count();
        let width = alignment_width(columns);
        debug!("Single table: {} columns, width {}", columns, width);

        let header = Row::build(RowKind::Index, 0..columns, width, &[]);
        let row = Row::build(RowKind::Value, digits.digits(), width, &[]);

        Self {
            width,
            digits: vec![digits.clone()],
            agreement: None,
            header,
            rows: vec![row],
        }
    }

    /// Table comparing several numbers column by column.
    ///
    /// Shorter strings are left-padded with zeros to the longest one and the
    /// agreement is computed on the padded strings.
    pub fn compare(numbers: &[HexDigitString]) -> Result<Self> {
        let max_len = numbers
            .iter()
            .map(HexDigitString::digit_count)
            .max()
            .ok_or(Error::EmptyInput)?;

        let padded: Vec<HexDigitString> = numbers.iter().map(|n| n.zero_padded(max_len)).collect();
        let width = alignment_width(max_len);
        let agreement = column_agreement(&padded);
        debug!(
            "Comparison table: {} rows, {} columns, width {}, {} agreeing",
            padded.len(),
            max_len,
            width,
            agreement.iter().filter(|&&a| a).count()
        );

        let header = Row::build(RowKind::Index, 0..max_len, width, &agreement);
        let rows = padded
            .iter()
            .map(|digits| Row::build(RowKind::Value, digits.digits(), width, &agreement))
            .collect();

        Ok(Self {
            width,
            digits: padded,
            agreement: Some(agreement),
            header,
            rows,
        })
    }

    /// Parses every line and compares them. The first bad line aborts.
    pub fn compare_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let numbers = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let line = line.as_ref();
                parse_token(line).map_err(|e| Error::InvalidLine {
                    line: i + 1,
                    input: line.to_string(),
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::compare(&numbers)
    }

    pub fn column_count(&self) -> usize {
        self.header.cells.len()
    }
}
