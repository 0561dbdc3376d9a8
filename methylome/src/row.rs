use serde::{Deserialize, Serialize};

use crate::{base::Base, error::RowError};

/// Column names of the alignment matrix, in file order.
pub const COLUMNS: [&str; 6] = ["POS", "REF", "A", "C", "G", "T"];

/// Nucleotide counts observed at one alignment position.
///
/// Serializes with the matrix column names, so a `csv::Writer` emits the
/// `POS,REF,A,C,G,T` header on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCounts {
    #[serde(rename = "POS")]
    pub position: u64,

    #[serde(rename = "REF")]
    pub reference: Base,

    #[serde(rename = "A")]
    pub a: u64,

    #[serde(rename = "C")]
    pub c: u64,

    #[serde(rename = "G")]
    pub g: u64,

    #[serde(rename = "T")]
    pub t: u64,
}

impl PositionCounts {
    pub fn new(position: u64, reference: Base, a: u64, c: u64, g: u64, t: u64) -> Self {
        Self {
            position,
            reference,
            a,
            c,
            g,
            t,
        }
    }

    /// Coerces the six fields of a body line into a row.
    ///
    /// # Errors
    /// - `RowError::FieldCount` if there are not exactly six fields.
    /// - `RowError::NotAnInteger` if POS or one of the counts is not an unsigned integer.
    /// - `RowError::InvalidReference` if REF is not a single character.
    pub fn from_fields(fields: &[&str]) -> Result<Self, RowError> {
        if fields.len() != COLUMNS.len() {
            return Err(RowError::FieldCount(fields.len()));
        }

        let position = parse_integer(COLUMNS[0], fields[0])?;
        let reference = fields[1].parse::<Base>()?;
        let a = parse_integer(COLUMNS[2], fields[2])?;
        let c = parse_integer(COLUMNS[3], fields[3])?;
        let g = parse_integer(COLUMNS[4], fields[4])?;
        let t = parse_integer(COLUMNS[5], fields[5])?;

        Ok(Self::new(position, reference, a, c, g, t))
    }

    /// Count for one of the four nucleotides. `Base::Other` has no column and counts zero.
    pub fn count(&self, base: Base) -> u64 {
        match base {
            Base::A => self.a,
            Base::C => self.c,
            Base::G => self.g,
            Base::T => self.t,
            Base::Other(_) => 0,
        }
    }
}

fn parse_integer(column: &'static str, value: &str) -> Result<u64, RowError> {
    value.parse::<u64>().map_err(|_| RowError::NotAnInteger {
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields() {
        let row = PositionCounts::from_fields(&["10", "C", "1", "5", "0", "2"]).unwrap();
        assert_eq!(row, PositionCounts::new(10, Base::C, 1, 5, 0, 2));
        assert_eq!(row.count(Base::C), 5);
        assert_eq!(row.count(Base::Other('N')), 0);
    }

    #[test]
    fn test_wrong_field_count() {
        let result = PositionCounts::from_fields(&["10", "C", "1", "5", "0"]);
        assert_eq!(result, Err(RowError::FieldCount(5)));

        let result = PositionCounts::from_fields(&["10", "C", "1", "5", "0", "2", "7"]);
        assert_eq!(result, Err(RowError::FieldCount(7)));
    }

    #[test]
    fn test_non_numeric_count() {
        let result = PositionCounts::from_fields(&["10", "C", "1", "x", "0", "2"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "C value 'x' is not a non-negative integer"
        );
    }

    #[test]
    fn test_negative_and_fractional_values_rejected() {
        assert!(PositionCounts::from_fields(&["-3", "A", "1", "1", "0", "2"]).is_err());
        assert!(PositionCounts::from_fields(&["3", "A", "1.5", "1", "0", "2"]).is_err());
        assert!(PositionCounts::from_fields(&["NaN", "A", "1", "1", "0", "2"]).is_err());
    }

    #[test]
    fn test_csv_header_from_serde() -> anyhow::Result<()> {
        let mut buf = Vec::new();
        {
            let mut wtr = csv::Writer::from_writer(&mut buf);
            wtr.serialize(PositionCounts::new(12, Base::A, 3, 0, 0, 1))?;
            wtr.flush()?;
        }
        let written = String::from_utf8(buf)?;

        assert_eq!(written, "POS,REF,A,C,G,T\n12,A,3,0,0,1\n");
        Ok(())
    }
}
