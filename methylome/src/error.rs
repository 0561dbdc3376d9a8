use thiserror::Error;

/// Errors surfaced to callers of the loader and the summary functions.
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Headers (POS, REF, A, C, G, T) not found: no line starts with 'POS'")]
    HeaderNotFound,

    #[error("Cannot calculate percentages for an empty table")]
    EmptyTable,

    #[error("Cannot calculate percentages: total nucleotide count over {rows} rows is zero")]
    NoCoverage { rows: usize },

    #[error("Failed to read alignment matrix: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason a single body line could not be turned into a row.
///
/// The loader recovers from these by dropping the line and counting it in the
/// [`LoadReport`](crate::LoadReport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),

    #[error("{column} value '{value}' is not a non-negative integer")]
    NotAnInteger { column: &'static str, value: String },

    #[error("REF value '{0}' is not a single character")]
    InvalidReference(String),
}
