//! Cipher definition errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a cipher definition.
///
/// Once a [`CipherTables`](crate::CipherTables) value exists, encode and
/// decode never fail; every failure mode lives here, at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read cipher file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cipher definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("alphabet key {0:?} must be a single character")]
    AlphabetKey(String),

    #[error("alphabet entry for {0:?} has an empty glyph sequence")]
    EmptySequence(char),

    #[error("glyph sequence {sequence:?} for {letter:?} contains reserved glyph {glyph:?}")]
    ReservedGlyph {
        letter: char,
        sequence: String,
        glyph: char,
    },

    #[error("glyph sequence {sequence:?} maps to both {first:?} and {second:?}")]
    DuplicateSequence {
        sequence: String,
        first: char,
        second: char,
    },

    #[error("symbol key {0:?} must be a single character")]
    SymbolKey(String),

    #[error("symbol {0:?} has an empty Represents value")]
    EmptyRepresents(char),

    #[error("character {represented:?} is represented by both {first:?} and {second:?}")]
    DuplicateRepresents {
        represented: char,
        first: char,
        second: char,
    },
}
