//! Locate the enclosing git working tree and load its data-quality segment
//! file as `[start, end]` pairs.
//!
//! ```no_run
//! use dq_segments::{load_segments, Window};
//!
//! let segments = load_segments(false, Window::DEC23_ANALYSIS)?;
//! println!("{} segments", segments.len());
//! # Ok::<(), dq_segments::SegmentError>(())
//! ```

pub mod data;
pub mod error;
pub mod repo;

pub use data::loader::{load_segments, LoadOptions, SegmentLoader, SEGMENT_FILE};
pub use data::model::{SegmentPair, SegmentTable, Window};
pub use error::{Result, SegmentError};
