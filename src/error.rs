//! Error types for level parsing and level file I/O.
//!
//! [`FormatError`] describes what is wrong with a single line, [`LevelError`]
//! is what whole load/save operations return. A missing texture is not an
//! error: it is logged and reported through the session's load report.

use std::{io, num::ParseFloatError, path::PathBuf};

use thiserror::Error;

/// A single level line that does not match
/// `<sprite> <x> <y> <z> <xRot> <yRot> <zRot> <width> <height> <depth>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 10 whitespace separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("field `{field}` is not a number: {value:?}")]
    NotANumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("sprite identifier is empty")]
    EmptySprite,
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `line` is 1-based.
    #[error("invalid block on line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
}

impl LevelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LevelError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the level file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LevelError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
