use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Table → pretty-printed text grid
// ---------------------------------------------------------------------------

/// Render a table as an aligned text grid for standard output.
///
/// The table is lowered to an Arrow `RecordBatch` and formatted with
/// Arrow's pretty printer. A table with zero rows renders its header only.
pub fn render(table: &Table) -> Result<String> {
    if table.columns.is_empty() {
        // A RecordBatch needs at least one column.
        return Ok("(empty table)".to_string());
    }
    let batch = to_record_batch(table)?;
    let formatted = pretty_format_batches(&[batch]).context("formatting table")?;
    Ok(formatted.to_string())
}

/// Per-column Arrow type, inferred from the cells that are present.
#[derive(Clone, Copy, PartialEq)]
enum ColumnKind {
    Empty,
    Integer,
    Float,
    Bool,
    Text,
}

fn column_kind(table: &Table, column: &str) -> ColumnKind {
    use ColumnKind::*;
    let mut kind = Empty;
    for row in &table.rows {
        let cell = match row.get(column) {
            None | Some(CellValue::Null) => continue,
            Some(c) => c,
        };
        let observed = match cell {
            CellValue::Integer(_) => Integer,
            CellValue::Float(_) => Float,
            CellValue::Bool(_) => Bool,
            CellValue::String(_) => Text,
            CellValue::Null => unreachable!(),
        };
        kind = match (kind, observed) {
            (Empty, k) => k,
            (Integer, Float) | (Float, Integer) => Float,
            (a, b) if a == b => a,
            _ => Text,
        };
    }
    kind
}

/// Lower a [`Table`] to a `RecordBatch` for formatting.
fn to_record_batch(table: &Table) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(table.columns.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(table.columns.len());

    for column in &table.columns {
        let (data_type, array) = build_column(table, column);
        fields.push(Field::new(column, data_type, true));
        arrays.push(array);
    }

    let schema = Arc::new(Schema::new(fields));
    RecordBatch::try_new(schema, arrays).context("assembling record batch")
}

fn build_column(table: &Table, column: &str) -> (DataType, ArrayRef) {
    match column_kind(table, column) {
        ColumnKind::Integer => {
            let values: Vec<Option<i64>> = table
                .rows
                .iter()
                .map(|row| match row.get(column) {
                    Some(CellValue::Integer(i)) => Some(*i),
                    _ => None,
                })
                .collect();
            (DataType::Int64, Arc::new(Int64Array::from(values)) as ArrayRef)
        }
        ColumnKind::Float => {
            let values: Vec<Option<f64>> = table
                .rows
                .iter()
                .map(|row| row.get(column).and_then(|c| c.as_f64()))
                .collect();
            (DataType::Float64, Arc::new(Float64Array::from(values)) as ArrayRef)
        }
        ColumnKind::Bool => {
            let values: Vec<Option<bool>> = table
                .rows
                .iter()
                .map(|row| match row.get(column) {
                    Some(CellValue::Bool(b)) => Some(*b),
                    _ => None,
                })
                .collect();
            (DataType::Boolean, Arc::new(BooleanArray::from(values)) as ArrayRef)
        }
        // Mixed and all-null columns fall back to text.
        ColumnKind::Text | ColumnKind::Empty => {
            let values: Vec<Option<String>> = table
                .rows
                .iter()
                .map(|row| match row.get(column) {
                    None | Some(CellValue::Null) => None,
                    Some(cell) => Some(cell.to_string()),
                })
                .collect();
            (DataType::Utf8, Arc::new(StringArray::from(values)) as ArrayRef)
        }
    }
}
