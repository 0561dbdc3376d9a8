use anyhow::{Context, Result};
use log::info;
use methylome::{CountTable, COLUMNS};
use std::path::Path;

pub const FULL_TABLE_FILE: &str = "matrix.csv";
pub const CPG_TABLE_FILE: &str = "matrix_ref_c.csv";

/// Writes `table` as comma separated values with a `POS,REF,A,C,G,T` header.
/// An empty table still gets its header line.
pub fn write_table<P: AsRef<Path>>(table: &CountTable, path: P) -> Result<()> {
    let path = path.as_ref();

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create file at: {:?}", path))?;

    if table.is_empty() {
        writer.write_record(COLUMNS)?;
    }
    for row in table {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row at POS {} to {:?}", row.position, path))?;
    }
    writer.flush()?;

    info!("Table saved to {:?}", path);
    Ok(())
}
