//! Data layer: segment types, loading, and window filtering.
//!
//! Architecture:
//! ```text
//!  <repo root>/Dec23_ER-DQstudies_seg.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → SegmentTable (start, end)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ SegmentTable  │  row-wise pairing → Vec<SegmentPair>
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  apply Window → kept pairs, file order
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
