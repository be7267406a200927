use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SegmentError};
use crate::repo;

use super::filter::apply_window;
use super::model::{SegmentPair, SegmentTable, Window};

/// Name of the segment file, relative to the repository root.
pub const SEGMENT_FILE: &str = "Dec23_ER-DQstudies_seg.csv";

/// How many leading values of each column the verbose preview shows.
const PREVIEW_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Load options
// ---------------------------------------------------------------------------

/// Per-call settings for [`SegmentLoader::load`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Print the first few raw `start` / `end` values before filtering.
    pub verbose: bool,
    /// Which segments to return.
    pub window: Window,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            window: Window::DEC23_ANALYSIS,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Loads the segment file from a repository root.
#[derive(Debug, Clone)]
pub struct SegmentLoader {
    root: PathBuf,
}

impl SegmentLoader {
    /// Use the working tree enclosing the current directory.
    pub fn from_repo() -> Result<Self> {
        let root = repo::locate().ok_or(SegmentError::RepositoryRootNotFound)?;
        log::info!("repository root: {}", root.display());
        Ok(Self { root })
    }

    /// Use an explicit root directory.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the segment file.
    pub fn path(&self) -> PathBuf {
        self.root.join(SEGMENT_FILE)
    }

    /// Parse the segment file into its `start` / `end` columns.
    pub fn read_table(&self) -> Result<SegmentTable> {
        let path = self.path();
        let file = File::open(&path).map_err(|source| SegmentError::Io {
            path: path.clone(),
            source,
        })?;
        let table = parse_table(file)?;
        log::debug!("parsed {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Load segments, writing the verbose preview (if any) to stdout.
    pub fn load(&self, opts: &LoadOptions) -> Result<Vec<SegmentPair>> {
        self.load_to(opts, &mut io::stdout())
    }

    /// Load segments, writing the verbose preview (if any) to `out`.
    ///
    /// The preview always reflects the raw columns, not the returned
    /// (possibly filtered) pairs.
    pub fn load_to<W: Write>(&self, opts: &LoadOptions, out: &mut W) -> Result<Vec<SegmentPair>> {
        let table = self.read_table()?;

        let pairs = table.pairs();
        let inverted = pairs.iter().filter(|p| p.start > p.end).count();
        if inverted > 0 {
            log::warn!("{inverted} segment(s) in {SEGMENT_FILE} have start > end");
        }

        let kept = apply_window(pairs, opts.window);

        if opts.verbose {
            write_preview(&table, out).map_err(SegmentError::Preview)?;
        }

        log::info!("loaded {} of {} segments", kept.len(), table.len());
        Ok(kept)
    }

    /// Load every segment, without a window.
    pub fn load_all(&self, verbose: bool) -> Result<Vec<SegmentPair>> {
        self.load(&LoadOptions {
            verbose,
            window: Window::Unbounded,
        })
    }
}

/// Resolve the repository root and load its segments in one call.
pub fn load_segments(verbose: bool, window: Window) -> Result<Vec<SegmentPair>> {
    SegmentLoader::from_repo()?.load(&LoadOptions { verbose, window })
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Read delimited text with a header row and extract `start` / `end`.
/// Any other columns are ignored. An empty cell reads as NaN and keeps its
/// row; a NaN never passes a bounded window.
pub fn parse_table<R: Read>(input: R) -> Result<SegmentTable> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    let start_idx = column_index(&headers, "start")?;
    let end_idx = column_index(&headers, "end")?;

    let mut table = SegmentTable::default();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        table.start.push(parse_cell(&record, start_idx, row_no, "start")?);
        table.end.push(parse_cell(&record, end_idx, row_no, "end")?);
    }
    Ok(table)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(SegmentError::MissingColumn(name))
}

fn parse_cell(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("");
    let text = raw.trim();
    if text.is_empty() {
        return Ok(f64::NAN);
    }
    text.parse::<f64>()
        .map_err(|_| SegmentError::InvalidNumber {
            row,
            column,
            value: raw.to_string(),
        })
}

// -- Preview --

fn write_preview<W: Write>(table: &SegmentTable, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", format_head(&table.start))?;
    writeln!(out, "{}", format_head(&table.end))
}

/// `[a, b, c]` rendering of the first few values of a column.
fn format_head(values: &[f64]) -> String {
    let head: Vec<String> = values
        .iter()
        .take(PREVIEW_LEN)
        .map(|v| v.to_string())
        .collect();
    format!("[{}]", head.join(", "))
}
