use anyhow::{Result, bail};

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Row ordering by a single column
// ---------------------------------------------------------------------------

/// Reorder rows ascending by the named column.
///
/// The sort is stable: rows with equal cells keep their original relative
/// order. Rows without the cell sort as null, first. A table without the
/// column fails with a lookup error.
pub fn sort_by(table: &Table, column: &str) -> Result<Table> {
    if !table.has_column(column) {
        bail!("no column named '{column}'");
    }

    static NULL_CELL: CellValue = CellValue::Null;

    let mut rows = table.rows.clone();
    // slice::sort_by is stable, so ties keep file order.
    rows.sort_by(|a, b| {
        let ka = a.get(column).unwrap_or(&NULL_CELL);
        let kb = b.get(column).unwrap_or(&NULL_CELL);
        ka.cmp(kb)
    });

    Ok(Table::new(table.columns.clone(), rows))
}
