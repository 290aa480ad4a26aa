//! Error taxonomy for the transform pipeline.
//!
//! Every variant names the offending path (and index, where one exists) and
//! embeds the underlying cause in its message, so the operator report is
//! self-contained. All errors are terminal for the run.

use std::path::PathBuf;

/// Coarse classification: input-side data problems vs output-side io.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Data,
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("error reading input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error parsing json from {path}: {source}")]
    InputParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("expected a json array at the top level of {path}")]
    NotAnArray { path: PathBuf },
    #[error("element {index} of {path} is not a json object")]
    NotAnObject { path: PathBuf, index: usize },
    #[error("error serializing output: {0}")]
    Serialize(serde_json::Error),
    #[error("error writing output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BuildError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputRead { .. }
            | Self::InputParse { .. }
            | Self::NotAnArray { .. }
            | Self::NotAnObject { .. } => ErrorKind::Data,
            Self::Serialize(_) | Self::OutputWrite { .. } => ErrorKind::Io,
        }
    }
}
