/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  crop_production.csv ──(missing)──► synthetic
///        │                               │
///        ▼                               ▼
///   ┌─────────────────────────────────────────┐
///   │  loader   normalize headers → CropDataset│  memoized by DataProvider
///   └─────────────────────────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year / state / crop → record indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────────┐
///   │ metrics / aggregate  │  totals, group-by sums for the charts
///   └──────────────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod synthetic;
