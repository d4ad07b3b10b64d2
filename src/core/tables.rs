//! Lookup table construction from a cipher definition

use std::collections::{BTreeMap, BTreeSet};

use crate::config::CipherConfig;
use crate::core::glyphs::is_reserved;
use crate::error::ConfigError;

/// The four lookup structures derived from a cipher definition, plus the
/// set of letter-shape glyphs. Built once, read-only afterwards; safe to
/// share across any number of encode/decode calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherTables {
    /// Uppercase letter -> glyph sequence
    forward: BTreeMap<char, String>,
    /// Glyph sequence -> uppercase letter
    reverse: BTreeMap<String, char>,
    /// Represented character -> symbol glyph (single-character
    /// `Represents` values only; longer ones are decode-only)
    symbols: BTreeMap<char, char>,
    /// Symbol glyph -> represented string
    reverse_symbols: BTreeMap<char, String>,
    /// Every character occurring in an alphabet glyph sequence. These
    /// are the marks the decoder accumulates into `pending`.
    shapes: BTreeSet<char>,
}

/// Require a map key to be exactly one character.
fn single_char(key: &str, err: impl FnOnce(String) -> ConfigError) -> Result<char, ConfigError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(err(key.to_string())),
    }
}

impl CipherTables {
    /// Build all lookup structures from a parsed cipher definition.
    ///
    /// Rejects definitions that would lose data: duplicate glyph
    /// sequences, duplicate represented characters, empty sequences, and
    /// sequences containing structural glyphs. A symbol glyph shadowed by
    /// a letter-shape glyph is accepted but unreachable on decode, and is
    /// reported at warn level.
    pub fn build(config: &CipherConfig) -> Result<Self, ConfigError> {
        let mut forward = BTreeMap::new();
        let mut reverse: BTreeMap<String, char> = BTreeMap::new();
        let mut shapes = BTreeSet::new();

        for (key, sequence) in &config.alphabet {
            let letter = single_char(key, ConfigError::AlphabetKey)?;
            let letter = letter.to_uppercase().next().unwrap_or(letter);

            if sequence.is_empty() {
                return Err(ConfigError::EmptySequence(letter));
            }
            if let Some(glyph) = sequence.chars().find(|&c| is_reserved(c)) {
                return Err(ConfigError::ReservedGlyph {
                    letter,
                    sequence: sequence.clone(),
                    glyph,
                });
            }
            if let Some(&first) = reverse.get(sequence) {
                return Err(ConfigError::DuplicateSequence {
                    sequence: sequence.clone(),
                    first,
                    second: letter,
                });
            }

            shapes.extend(sequence.chars());
            forward.insert(letter, sequence.clone());
            reverse.insert(sequence.clone(), letter);
        }

        let mut symbols: BTreeMap<char, char> = BTreeMap::new();
        let mut reverse_symbols = BTreeMap::new();

        for (key, entry) in &config.symbols {
            let glyph = single_char(key, ConfigError::SymbolKey)?;
            if entry.represents.is_empty() {
                return Err(ConfigError::EmptyRepresents(glyph));
            }
            if is_reserved(glyph) || shapes.contains(&glyph) {
                log::warn!(
                    "symbol {:?} collides with a structural or letter-shape glyph; \
                     it will never be reached during decode",
                    glyph
                );
            }

            // Only single-character representations can be encoded; a
            // multi-character one is still emitted verbatim on decode.
            let mut rep_chars = entry.represents.chars();
            match (rep_chars.next(), rep_chars.next()) {
                (Some(rep), None) => {
                    if let Some(&first) = symbols.get(&rep) {
                        return Err(ConfigError::DuplicateRepresents {
                            represented: rep,
                            first,
                            second: glyph,
                        });
                    }
                    symbols.insert(rep, glyph);
                }
                _ => {
                    log::debug!(
                        "symbol {:?} represents multi-character {:?}; decode-only",
                        glyph,
                        entry.represents
                    );
                }
            }

            reverse_symbols.insert(glyph, entry.represents.clone());
        }

        Ok(Self {
            forward,
            reverse,
            symbols,
            reverse_symbols,
            shapes,
        })
    }

    /// Glyph sequence for an uppercase letter.
    pub fn sequence_for(&self, letter: char) -> Option<&str> {
        self.forward.get(&letter).map(String::as_str)
    }

    /// Uppercase letter for a complete glyph sequence.
    pub fn letter_for(&self, sequence: &str) -> Option<char> {
        self.reverse.get(sequence).copied()
    }

    /// Symbol glyph for a represented character.
    pub fn glyph_for(&self, represented: char) -> Option<char> {
        self.symbols.get(&represented).copied()
    }

    /// Represented string for a symbol glyph.
    pub fn represented_by(&self, glyph: char) -> Option<&str> {
        self.reverse_symbols.get(&glyph).map(String::as_str)
    }

    /// Whether `c` is a letter-shape glyph (appears in some sequence).
    pub fn is_shape(&self, c: char) -> bool {
        self.shapes.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CipherConfig;

    fn config(json: &str) -> CipherConfig {
        CipherConfig::from_json(json).unwrap()
    }

    #[test]
    fn test_forward_and_reverse() {
        let tables = CipherTables::build(&config(
            r#"{"Alphabet": {"A": "□■", "B": "■□"}, "Symbols": {}}"#,
        ))
        .unwrap();
        assert_eq!(tables.sequence_for('A'), Some("□■"));
        assert_eq!(tables.sequence_for('B'), Some("■□"));
        assert_eq!(tables.letter_for("□■"), Some('A'));
        assert_eq!(tables.letter_for("■□"), Some('B'));
        assert_eq!(tables.letter_for("□□"), None);
    }

    #[test]
    fn test_symbol_maps() {
        let tables = CipherTables::build(&config(
            r#"{"Alphabet": {}, "Symbols": {"▲": {"Represents": "1", "Type": "digit"}}}"#,
        ))
        .unwrap();
        assert_eq!(tables.glyph_for('1'), Some('▲'));
        assert_eq!(tables.represented_by('▲'), Some("1"));
        assert_eq!(tables.glyph_for('2'), None);
    }

    #[test]
    fn test_shape_set_derived_from_sequences() {
        let tables = CipherTables::build(&config(
            r#"{"Alphabet": {"A": "□■", "B": "▣"}, "Symbols": {}}"#,
        ))
        .unwrap();
        assert!(tables.is_shape('□'));
        assert!(tables.is_shape('■'));
        assert!(tables.is_shape('▣'));
        assert!(!tables.is_shape('●'));
        assert!(!tables.is_shape('x'));
    }

    #[test]
    fn test_lowercase_alphabet_key_upcased() {
        let tables =
            CipherTables::build(&config(r#"{"Alphabet": {"a": "□"}, "Symbols": {}}"#)).unwrap();
        assert_eq!(tables.sequence_for('A'), Some("□"));
        assert_eq!(tables.sequence_for('a'), None);
    }

    #[test]
    fn test_idempotent_construction() {
        let config = config(
            r#"{
                "Alphabet": {"A": "□■", "B": "■□", "C": "□□■"},
                "Symbols": {"▲": {"Represents": "1", "Type": "digit"}}
            }"#,
        );
        let first = CipherTables::build(&config).unwrap();
        let second = CipherTables::build(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_multichar_alphabet_key_rejected() {
        let err = CipherTables::build(&config(r#"{"Alphabet": {"AB": "□"}, "Symbols": {}}"#))
            .unwrap_err();
        assert!(matches!(err, ConfigError::AlphabetKey(k) if k == "AB"));
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err =
            CipherTables::build(&config(r#"{"Alphabet": {"A": ""}, "Symbols": {}}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySequence('A')));
    }

    #[test]
    fn test_reserved_glyph_in_sequence_rejected() {
        let err = CipherTables::build(&config(r#"{"Alphabet": {"A": "□●"}, "Symbols": {}}"#))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReservedGlyph { glyph: '●', .. }));
    }

    #[test]
    fn test_duplicate_sequence_rejected() {
        let err = CipherTables::build(&config(
            r#"{"Alphabet": {"A": "□■", "B": "□■"}, "Symbols": {}}"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateSequence {
                first: 'A',
                second: 'B',
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_represents_rejected() {
        let err = CipherTables::build(&config(
            r#"{
                "Alphabet": {},
                "Symbols": {
                    "▲": {"Represents": "1", "Type": "digit"},
                    "△": {"Represents": "1", "Type": "digit"}
                }
            }"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateRepresents {
                represented: '1',
                ..
            }
        ));
    }

    #[test]
    fn test_multichar_represents_is_decode_only() {
        let tables = CipherTables::build(&config(
            r#"{"Alphabet": {}, "Symbols": {"▲": {"Represents": "10", "Type": "number"}}}"#,
        ))
        .unwrap();
        assert_eq!(tables.represented_by('▲'), Some("10"));
        assert_eq!(tables.glyph_for('1'), None);
        assert_eq!(tables.glyph_for('0'), None);
    }
}
