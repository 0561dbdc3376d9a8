use log::{debug, info, warn};
use std::io::BufRead;

use crate::{
    error::{MatrixError, RowError},
    row::PositionCounts,
    table::CountTable,
};

/// A line starting with this token opens the matrix. Everything before it is
/// aligner log output.
pub const HEADER_MARKER: &str = "POS";

/// How fields are split within a body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// Runs of spaces or tabs, as written by the aligner.
    #[default]
    Whitespace,
    /// Comma separated, as written by the table writer. Fields are trimmed.
    Comma,
}

impl Separator {
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Separator::Whitespace => line.split_whitespace().collect(),
            Separator::Comma => line.split(',').map(str::trim).collect(),
        }
    }
}

/// What happened to the lines of one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// 1-based line number of the header.
    pub header_line: usize,
    pub rows_kept: usize,
    /// Header lines in the body, including the opening one.
    pub header_lines_skipped: usize,
    /// Rows with POS = 0.
    pub sentinel_rows: usize,
    /// Lines without exactly six fields.
    pub ragged_lines: usize,
    /// Six-field lines where POS, REF or a count could not be coerced.
    pub coercion_failures: usize,
}

impl LoadReport {
    pub fn rows_dropped(&self) -> usize {
        self.ragged_lines + self.coercion_failures
    }
}

/// Turns raw aligner output into a [`CountTable`].
#[derive(Debug, Clone, Default)]
pub struct TableLoader {
    separator: Separator,
}

impl TableLoader {
    pub fn new(separator: Separator) -> Self {
        Self { separator }
    }

    pub fn load_str(&self, raw: &str) -> Result<(CountTable, LoadReport), MatrixError> {
        self.load_reader(raw.as_bytes())
    }

    /// Reads until the first line starting with `POS`, then parses every
    /// following line into a row.
    ///
    /// Lines are decoded lossily, so a stray non-UTF8 byte only spoils the row
    /// it sits in.
    ///
    /// # Errors
    /// - `MatrixError::HeaderNotFound` if no line starts with `POS`.
    /// - `MatrixError::Io` if the reader fails.
    pub fn load_reader<R: BufRead>(
        &self,
        mut reader: R,
    ) -> Result<(CountTable, LoadReport), MatrixError> {
        let mut report = LoadReport::default();
        let mut rows = Vec::new();

        let mut buf = Vec::new();
        let mut line_number = 0;
        let mut header_found = false;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            if !header_found {
                if !line.starts_with(HEADER_MARKER) {
                    continue;
                }
                debug!("Found header at line {}: '{}'", line_number, line);
                header_found = true;
                report.header_line = line_number;
            }

            if let Some(row) = self.accept_line(line, line_number, &mut report) {
                rows.push(row);
            }
        }

        if !header_found {
            return Err(MatrixError::HeaderNotFound);
        }

        report.rows_kept = rows.len();
        info!(
            "Loaded {} rows from matrix starting at line {}",
            report.rows_kept, report.header_line
        );
        if report.rows_dropped() > 0 {
            warn!(
                "Dropped {} malformed lines ({} with wrong field count, {} failing numeric coercion)",
                report.rows_dropped(),
                report.ragged_lines,
                report.coercion_failures
            );
        }

        Ok((CountTable::new(rows), report))
    }

    fn accept_line(
        &self,
        line: &str,
        line_number: usize,
        report: &mut LoadReport,
    ) -> Option<PositionCounts> {
        if line.trim().is_empty() {
            return None;
        }

        let fields = self.separator.split(line);
        if fields.first() == Some(&HEADER_MARKER) {
            report.header_lines_skipped += 1;
            return None;
        }

        match PositionCounts::from_fields(&fields) {
            Ok(row) if row.position == 0 => {
                report.sentinel_rows += 1;
                None
            }
            Ok(row) => Some(row),
            Err(e @ RowError::FieldCount(_)) => {
                debug!("Dropping line {}: {}", line_number, e);
                report.ragged_lines += 1;
                None
            }
            Err(e) => {
                debug!("Dropping line {}: {}", line_number, e);
                report.coercion_failures += 1;
                None
            }
        }
    }
}

/// Loads whitespace-separated aligner output with the default loader.
///
/// # Examples
/// ```
/// use methylome::{load, Base};
///
/// let raw = "aligner log\nPOS REF A C G T\n10 C 1 5 0 2\n";
/// let table = load(raw).unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.rows()[0].reference, Base::C);
/// ```
pub fn load(raw: &str) -> Result<CountTable, MatrixError> {
    TableLoader::default()
        .load_str(raw)
        .map(|(table, _report)| table)
}
