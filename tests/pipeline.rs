use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use yamhill_check::data::model::{CellValue, Row, Table};
use yamhill_check::data::{filter, loader, render, sort};

fn _row(var: &str, value: f64) -> Row {
    let mut cells = BTreeMap::new();
    cells.insert("var".to_string(), CellValue::String(var.to_string()));
    cells.insert("value".to_string(), CellValue::Float(value));
    Row { cells }
}

fn _table(rows: Vec<Row>) -> Table {
    Table::new(vec!["var".to_string(), "value".to_string()], rows)
}

/// load → filter → sort, the way the driver runs one file.
fn _run_pipeline(table: &Table) -> Table {
    let mask = filter::equals_mask(table, "var", "childcare").unwrap();
    let filtered = filter::apply_mask(table, &mask).unwrap();
    sort::sort_by(&filtered, "value").unwrap()
}

fn _values(table: &Table) -> Vec<f64> {
    table
        .rows
        .iter()
        .map(|r| r.get("value").unwrap().as_f64().unwrap())
        .collect()
}

fn _write_parquet(path: &Path, rows: &[(&str, f64)]) {
    let var_array = StringArray::from(rows.iter().map(|(v, _)| *v).collect::<Vec<_>>());
    let value_array = Float64Array::from(rows.iter().map(|(_, v)| *v).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("var", DataType::Utf8, false),
        Field::new("value", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(schema.clone(), vec![Arc::new(var_array), Arc::new(value_array)])
        .unwrap();

    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

#[test]
fn end_to_end_filter_then_sort() {
    let table = _table(vec![
        _row("childcare", 5.0),
        _row("other", 1.0),
        _row("childcare", 2.0),
    ]);

    let result = _run_pipeline(&table);

    assert_eq!(result.len(), 2);
    assert_eq!(_values(&result), vec![2.0, 5.0]);
    assert!(result
        .rows
        .iter()
        .all(|r| r.get("var").unwrap().as_str() == Some("childcare")));
}

#[test]
fn non_matching_rows_never_appear() {
    let table = _table(vec![
        _row("grocery", 1.0),
        _row("childcare", 9.0),
        _row("pharmacy", 3.0),
        _row("childcare", 4.0),
        _row("transit", 7.0),
    ]);

    let result = _run_pipeline(&table);

    assert_eq!(result.len(), 2);
    for row in &result.rows {
        assert_eq!(row.get("var").unwrap().as_str(), Some("childcare"));
    }
}

#[test]
fn output_is_sorted_pairwise() {
    let table = _table(vec![
        _row("childcare", 8.5),
        _row("childcare", 0.25),
        _row("childcare", 3.0),
        _row("childcare", 3.0),
        _row("childcare", 12.75),
        _row("childcare", 1.5),
    ]);

    let values = _values(&_run_pipeline(&table));
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn empty_table_flows_through_without_error() {
    let table = _table(Vec::new());
    let result = _run_pipeline(&table);

    assert!(result.is_empty());
    // Header-only rendering, no error
    let text = render::render(&result).unwrap();
    assert!(text.contains("var"));
}

#[test]
fn missing_value_column_fails_before_output() {
    let mut cells = BTreeMap::new();
    cells.insert("var".to_string(), CellValue::String("childcare".to_string()));
    let table = Table::new(vec!["var".to_string()], vec![Row { cells }]);

    let mask = filter::equals_mask(&table, "var", "childcare").unwrap();
    let filtered = filter::apply_mask(&table, &mask).unwrap();
    assert!(sort::sort_by(&filtered, "value").is_err());
}

#[test]
fn missing_var_column_fails_before_output() {
    let mut cells = BTreeMap::new();
    cells.insert("value".to_string(), CellValue::Float(1.0));
    let table = Table::new(vec!["value".to_string()], vec![Row { cells }]);

    assert!(filter::equals_mask(&table, "var", "childcare").is_err());
}

#[test]
fn first_mask_reused_on_shorter_second_table_is_an_alignment_error() {
    let first = _table(vec![
        _row("childcare", 5.0),
        _row("other", 1.0),
        _row("childcare", 2.0),
    ]);
    let second = _table(vec![_row("childcare", 3.0)]);

    let mask = filter::equals_mask(&first, "var", "childcare").unwrap();
    assert!(filter::apply_mask(&second, &mask).is_err());
}

#[test]
fn parquet_round_trip_through_the_whole_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yamhill.parquet");
    _write_parquet(
        &path,
        &[
            ("childcare", 5.0),
            ("other", 1.0),
            ("childcare", 2.0),
        ],
    );

    let table = loader::load_file(&path).unwrap();
    assert_eq!(table.columns, vec!["var".to_string(), "value".to_string()]);
    assert_eq!(table.len(), 3);

    let result = _run_pipeline(&table);
    assert_eq!(_values(&result), vec![2.0, 5.0]);

    let text = render::render(&result).unwrap();
    assert!(text.contains("childcare"));
    assert!(!text.contains("other"));
}

#[test]
fn csv_loads_with_sniffed_cell_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yamhill.csv");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "var,value").unwrap();
    writeln!(file, "childcare,5.5").unwrap();
    writeln!(file, "other,1").unwrap();
    drop(file);

    let table = loader::load_file(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.rows[0].get("value").unwrap(),
        &CellValue::Float(5.5)
    );
    assert_eq!(table.rows[1].get("value").unwrap(), &CellValue::Integer(1));
}

#[test]
fn json_records_load_and_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yamhill.json");
    std::fs::write(
        &path,
        r#"[{"var": "childcare", "value": 2.0}, {"var": "other", "value": 1.0}]"#,
    )
    .unwrap();

    let table = loader::load_file(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.rows[0].get("var").unwrap().as_str(),
        Some("childcare")
    );

    let result = _run_pipeline(&table);
    assert_eq!(result.len(), 1);
}
