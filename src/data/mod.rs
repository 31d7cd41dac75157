/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  HTTP GET / .json file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch / read → parse → validate
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  base temperature + Vec<VarianceRecord>
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
