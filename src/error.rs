use std::fmt;
use std::path::PathBuf;

/// Failure taxonomy for a generation run.
///
/// A run is a single-pass batch transform: the first unrecoverable error
/// aborts everything, with enough context (source, file key, or path) to
/// locate the cause. Recoverable schema oddities never surface here — the
/// type converter degrades them to the untyped marker instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The source document could not be read (file, network, or stream).
    SpecAcquisition { source: String, reason: String },
    /// The document structure is malformed, including a `required` marker
    /// that is neither a boolean nor a sequence of property names.
    SpecParse { reason: String },
    /// Missing mandatory inputs, or a target language with no registered
    /// adapter. Raised before any model building.
    Configuration { reason: String },
    /// A manifest key has no registered template, or rendering failed.
    /// Aborts the remaining manifest.
    Template { key: String, reason: String },
    /// The destination directory or a generated file could not be written.
    Output { path: PathBuf, reason: String },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::SpecAcquisition { source, reason } => {
                write!(f, "failed to acquire spec from '{source}': {reason}")
            }
            GenerateError::SpecParse { reason } => {
                write!(f, "failed to parse spec: {reason}")
            }
            GenerateError::Configuration { reason } => {
                write!(f, "configuration error: {reason}")
            }
            GenerateError::Template { key, reason } => {
                write!(f, "template error for '{key}': {reason}")
            }
            GenerateError::Output { path, reason } => {
                write!(f, "failed to write output at {path:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for GenerateError {}
