use std::fmt::Display;

use crate::{base::Base, error::MatrixError, row::PositionCounts, table::CountTable};

/// Column sums of the four nucleotide counts.
///
/// Sums are `u128` so that any number of rows with counts up to `u64::MAX`
/// add up without overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseTotals {
    pub a: u128,
    pub c: u128,
    pub g: u128,
    pub t: u128,
}

impl BaseTotals {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a PositionCounts>,
    {
        rows.into_iter().fold(Self::default(), |acc, row| Self {
            a: acc.a + u128::from(row.a),
            c: acc.c + u128::from(row.c),
            g: acc.g + u128::from(row.g),
            t: acc.t + u128::from(row.t),
        })
    }

    pub fn get(&self, base: Base) -> u128 {
        match base {
            Base::A => self.a,
            Base::C => self.c,
            Base::G => self.g,
            Base::T => self.t,
            Base::Other(_) => 0,
        }
    }

    pub fn total(&self) -> u128 {
        Base::NUCLEOTIDES.iter().map(|&base| self.get(base)).sum()
    }
}

/// Share of C and T among all counted nucleotides, in percent.
///
/// After bisulfite conversion unmethylated C reads as T, so the pair is a
/// rough methylation proxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageSummary {
    pub percent_c: f64,
    pub percent_t: f64,
    pub totals: BaseTotals,
}

impl Display for PercentageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C: {:.2}%, T: {:.2}%", self.percent_c, self.percent_t)
    }
}

/// Computes C and T percentages over every row of `table`.
///
/// # Errors
/// - `MatrixError::EmptyTable` if the table has no rows.
/// - `MatrixError::NoCoverage` if the rows hold no counts at all.
///
/// # Examples
/// ```
/// use methylome::{load, summarize};
///
/// let table = load("POS REF A C G T\n10 C 1 5 0 2\n11 G 0 1 6 0\n12 A 3 0 0 1\n").unwrap();
/// let summary = summarize(&table).unwrap();
/// assert!((summary.percent_c - 31.578947).abs() < 1e-4);
/// assert!((summary.percent_t - 15.789473).abs() < 1e-4);
/// ```
pub fn summarize(table: &CountTable) -> Result<PercentageSummary, MatrixError> {
    if table.is_empty() {
        return Err(MatrixError::EmptyTable);
    }

    let totals = BaseTotals::from_rows(table);
    let total = totals.total();
    if total == 0 {
        return Err(MatrixError::NoCoverage { rows: table.len() });
    }

    let percent = |count: u128| count as f64 / total as f64 * 100.0;

    Ok(PercentageSummary {
        percent_c: percent(totals.c),
        percent_t: percent(totals.t),
        totals,
    })
}
