use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an analysis run. Every variant is terminal: the
/// orchestrated call returns no partial results.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The source path could not be opened.
    #[error("cannot open source `{}`: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read failure after the source was opened.
    #[error("io error while reading source: {0}")]
    Io(#[from] io::Error),

    /// A data line's field count does not match the header.
    #[error("malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A field expected to be numeric did not parse as an integer.
    #[error("malformed field `{field}`: `{value}` is not an integer")]
    MalformedField { field: String, value: String },

    /// A query referenced a field name the header does not declare.
    #[error("field `{field}` not present in header")]
    MissingField { field: String },
}
