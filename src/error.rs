use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading segments.
///
/// A missing working-tree root is only an error once a caller needs a path
/// out of it; [`crate::repo::locate`] itself reports it as `None`.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// No enclosing working tree could be resolved.
    #[error("could not determine the repository root (not inside a git working tree?)")]
    RepositoryRootNotFound,

    /// The segment file could not be opened or read.
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The verbose preview could not be written.
    #[error("writing segment preview: {0}")]
    Preview(#[source] io::Error),

    /// The file is not well-formed delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("segment file is missing the '{0}' column")]
    MissingColumn(&'static str),

    /// A cell in a numeric column could not be parsed.
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, SegmentError>;
