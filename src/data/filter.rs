use anyhow::{Result, bail};

use super::model::Table;

// ---------------------------------------------------------------------------
// Boolean mask over a table's rows
// ---------------------------------------------------------------------------

/// One entry per row of the table the mask was computed from.
pub type Mask = Vec<bool>;

/// Build a mask selecting rows whose `column` cell equals `needle` exactly.
///
/// Matching is case-sensitive string equality; null, missing, and
/// non-string cells never match. A table without the column fails with a
/// lookup error.
pub fn equals_mask(table: &Table, column: &str, needle: &str) -> Result<Mask> {
    if !table.has_column(column) {
        bail!("no column named '{column}'");
    }
    Ok(table
        .rows
        .iter()
        .map(|row| row.get(column).and_then(|v| v.as_str()) == Some(needle))
        .collect())
}

/// Keep the rows where the mask is `true`.
///
/// The mask may come from a different table; lengths must line up or the
/// selection is rejected, the way an unalignable boolean indexer is.
pub fn apply_mask(table: &Table, mask: &Mask) -> Result<Table> {
    if mask.len() != table.len() {
        bail!(
            "mask has {} entries but table has {} rows",
            mask.len(),
            table.len()
        );
    }
    let rows = table
        .rows
        .iter()
        .zip(mask.iter())
        .filter(|(_, keep)| **keep)
        .map(|(row, _)| row.clone())
        .collect();

    Ok(Table::new(table.columns.clone(), rows))
}
