//! JSON Lines row input

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use scribe_csv::CsvWriter;

/// Copy JSON Lines rows into `writer`, returning the number of rows written.
///
/// Each non-blank line must be a JSON array of strings and nulls.
pub fn copy_rows<R: BufRead, W: Write>(input: R, writer: &mut CsvWriter<W>) -> Result<usize> {
    let mut rows = 0;
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read input line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<Option<String>> = serde_json::from_str(&line).with_context(|| {
            format!("Line {line_no}: expected a JSON array of strings or nulls")
        })?;

        writer
            .write_line(&fields)
            .with_context(|| format!("Failed to write row from line {line_no}"))?;
        rows += 1;
    }
    Ok(rows)
}
