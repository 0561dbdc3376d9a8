//! Parsing and CpG filtering of per-position nucleotide count matrices.
//!
//! The typical flow is [`load`] (or a configured [`TableLoader`]) to get a
//! [`CountTable`], [`extract_cpg`] to keep only the C of every CpG site, and
//! [`summarize`] on either table to get the C/T percentages.

mod base;
mod cpg;
mod error;
mod loader;
mod row;
mod summary;
mod table;

pub use base::Base;
pub use cpg::{extract_cpg, is_cpg_pair};
pub use error::{MatrixError, RowError};
pub use loader::{load, LoadReport, Separator, TableLoader, HEADER_MARKER};
pub use row::{PositionCounts, COLUMNS};
pub use summary::{summarize, BaseTotals, PercentageSummary};
pub use table::CountTable;
