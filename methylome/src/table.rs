use std::fmt::{self, Display};

use crate::row::{PositionCounts, COLUMNS};

/// Rows shown from each end of a table before the listing is abbreviated.
const DISPLAY_EDGE_ROWS: usize = 5;

/// Ordered, immutable collection of alignment rows.
///
/// Row order is the order of the source file after filtering. Positions are
/// expected to increase but this is not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    rows: Vec<PositionCounts>,
}

impl CountTable {
    pub fn new(rows: Vec<PositionCounts>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PositionCounts] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionCounts> {
        self.rows.iter()
    }

    /// Smallest and largest position in the table, or `None` when empty.
    pub fn position_range(&self) -> Option<(u64, u64)> {
        let min = self.rows.iter().map(|r| r.position).min()?;
        let max = self.rows.iter().map(|r| r.position).max()?;
        Some((min, max))
    }

    /// Largest single nucleotide count in any row.
    pub fn max_count(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|r| [r.a, r.c, r.g, r.t])
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<PositionCounts> for CountTable {
    fn from_iter<I: IntoIterator<Item = PositionCounts>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CountTable {
    type Item = &'a PositionCounts;
    type IntoIter = std::slice::Iter<'a, PositionCounts>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn cells(row: &PositionCounts) -> [String; 6] {
    [
        row.position.to_string(),
        row.reference.to_string(),
        row.a.to_string(),
        row.c.to_string(),
        row.g.to_string(),
        row.t.to_string(),
    ]
}

/// Right-aligned listing in the style of a dataframe print. Tables longer than
/// ten rows show the first and last five rows around a `...` line.
impl Display for CountTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbreviated = self.rows.len() > 2 * DISPLAY_EDGE_ROWS;
        let shown: Vec<&PositionCounts> = if abbreviated {
            self.rows[..DISPLAY_EDGE_ROWS]
                .iter()
                .chain(&self.rows[self.rows.len() - DISPLAY_EDGE_ROWS..])
                .collect()
        } else {
            self.rows.iter().collect()
        };
        let shown: Vec<[String; 6]> = shown.into_iter().map(cells).collect();

        let mut widths = COLUMNS.map(str::len);
        for row in &shown {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let write_line = |f: &mut fmt::Formatter<'_>, values: &[&str]| -> fmt::Result {
            let line: Vec<String> = values
                .iter()
                .zip(widths)
                .map(|(value, width)| format!("{value:>width$}"))
                .collect();
            writeln!(f, "{}", line.join("  "))
        };

        write_line(f, &COLUMNS)?;
        for (i, row) in shown.iter().enumerate() {
            if abbreviated && i == DISPLAY_EDGE_ROWS {
                write_line(f, &["..."; 6])?;
            }
            let values: Vec<&str> = row.iter().map(String::as_str).collect();
            write_line(f, &values)?;
        }
        write!(f, "[{} rows x {} columns]", self.rows.len(), COLUMNS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Base;

    fn table_of(n: u64) -> CountTable {
        (1..=n)
            .map(|pos| PositionCounts::new(pos, Base::A, pos, 0, 0, 1))
            .collect()
    }

    #[test]
    fn test_position_range_and_max_count() {
        let table = CountTable::new(vec![
            PositionCounts::new(7, Base::C, 1, 12, 0, 2),
            PositionCounts::new(3, Base::G, 0, 1, 9, 0),
        ]);
        assert_eq!(table.position_range(), Some((3, 7)));
        assert_eq!(table.max_count(), 12);

        let empty = CountTable::default();
        assert_eq!(empty.position_range(), None);
        assert_eq!(empty.max_count(), 0);
    }

    #[test]
    fn test_display_short_table() {
        let table = CountTable::new(vec![PositionCounts::new(10, Base::C, 1, 5, 0, 2)]);
        let expected = "POS  REF  A  C  G  T\n 10    C  1  5  0  2\n[1 rows x 6 columns]";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_display_abbreviates_long_table() {
        let printed = table_of(12).to_string();
        let lines: Vec<&str> = printed.lines().collect();

        // header + 5 + ellipsis + 5 + footer
        assert_eq!(lines.len(), 13);
        assert!(lines[6].trim_start().starts_with("..."));
        assert!(lines[7].trim_start().starts_with("8 "));
        assert_eq!(lines[12], "[12 rows x 6 columns]");
    }

    #[test]
    fn test_display_empty_table() {
        let printed = CountTable::default().to_string();
        assert_eq!(printed, "POS  REF  A  C  G  T\n[0 rows x 6 columns]");
    }
}
