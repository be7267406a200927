use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SegmentPair – one [start, end] interval
// ---------------------------------------------------------------------------

/// A single time interval taken from one row of the segment file.
///
/// Serializes as a two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct SegmentPair {
    pub start: f64,
    pub end: f64,
}

impl SegmentPair {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Whether `start <= end`. The loader does not enforce this.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Length of the interval (`end - start`); negative for inverted rows.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl From<SegmentPair> for [f64; 2] {
    fn from(pair: SegmentPair) -> Self {
        [pair.start, pair.end]
    }
}

impl From<[f64; 2]> for SegmentPair {
    fn from([start, end]: [f64; 2]) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for SegmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Window – which segments to keep
// ---------------------------------------------------------------------------

/// Range policy applied to loaded segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Window {
    /// Keep every row.
    Unbounded,
    /// Keep a row iff `start > min && end < max`. Both bounds are exclusive.
    Bounded { min: f64, max: f64 },
}

impl Window {
    /// Lower bound of the December 2023 ER data-quality window (Unix seconds).
    pub const DEC23_ANALYSIS_MIN: f64 = 1_387_468_818.0;
    /// Upper bound of the same window.
    pub const DEC23_ANALYSIS_MAX: f64 = 1_387_612_818.0;

    /// The December 2023 ER data-quality analysis window.
    pub const DEC23_ANALYSIS: Window = Window::Bounded {
        min: Self::DEC23_ANALYSIS_MIN,
        max: Self::DEC23_ANALYSIS_MAX,
    };

    /// Whether `pair` falls inside this window.
    pub fn contains(&self, pair: &SegmentPair) -> bool {
        match *self {
            Window::Unbounded => true,
            Window::Bounded { min, max } => pair.start > min && pair.end < max,
        }
    }
}

// ---------------------------------------------------------------------------
// SegmentTable – the parsed `start` / `end` columns
// ---------------------------------------------------------------------------

/// The two numeric columns of the segment file, index-aligned by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentTable {
    pub start: Vec<f64>,
    pub end: Vec<f64>,
}

impl SegmentTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.start.len()
    }

    /// Whether the file had a header and no data rows.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }

    /// One pair per row, in file order.
    pub fn pairs(&self) -> Vec<SegmentPair> {
        self.start
            .iter()
            .zip(&self.end)
            .map(|(&start, &end)| SegmentPair { start, end })
            .collect()
    }
}
