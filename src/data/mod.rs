/// Data layer: fetching, parsing, and filtering the four datasets.
///
/// Architecture:
/// ```text
///   remote CSV (or local file)
///        │
///        ▼
///   ┌──────────┐
///   │  fetch    │  Fetch trait + SourceCache (one fetch per resource)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + coerce types + drop invalid rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  typed immutable datasets
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year/state selectors → row indices
///   └──────────┘
/// ```

pub mod fetch;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sources;
