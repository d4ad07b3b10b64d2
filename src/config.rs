//! Cipher definition loading (JSON)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// One auxiliary symbol entry: the character it stands for plus
/// descriptive metadata. `Type` is informational only; the codec
/// never reads it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    #[serde(rename = "Represents")]
    pub represents: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
}

/// Parsed cipher definition, straight from the JSON artifact.
///
/// `alphabet` maps single uppercase letters to glyph-sequence strings
/// (e.g. `"A" -> "□■"`); `symbols` maps single auxiliary glyphs to the
/// character they represent. `BTreeMap` keeps iteration deterministic,
/// so table construction and duplicate detection always behave the same
/// for a given file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    #[serde(rename = "Alphabet")]
    pub alphabet: BTreeMap<String, String>,
    #[serde(rename = "Symbols")]
    pub symbols: BTreeMap<String, SymbolEntry>,
}

impl CipherConfig {
    /// Parse a cipher definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load a cipher definition from a file.
pub fn load_cipher(path: impl AsRef<Path>) -> Result<CipherConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CipherConfig::from_json(&content)
}
