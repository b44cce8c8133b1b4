/// Data layer: core types, loading, filtering, sorting, and rendering.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  columns in file order, Vec<Row>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  boolean mask over one column → filtered Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  sort     │  stable ascending reorder by one column
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  render   │  Table → aligned text grid
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod render;
pub mod sort;
