//! Text -> glyph encoding

use crate::core::glyphs::{
    is_punctuation, LETTER_TERMINATOR, PUNCTUATION_GLYPH, UNKNOWN_MARKER, WORD_TERMINATOR,
};
use crate::core::tables::CipherTables;

/// Encode text into a ChronoPulse glyph string.
///
/// Character by character, left to right, no lookahead. Precedence per
/// character: alphabet (case-insensitive) -> space -> fixed punctuation
/// -> symbol table (exact case) -> `?`. Total over any input; unknown
/// characters degrade to `?` instead of failing.
pub fn encode(text: &str, tables: &CipherTables) -> String {
    let mut output = String::new();

    for c in text.chars() {
        let upper = c.to_uppercase().next().unwrap_or(c);
        if let Some(sequence) = tables.sequence_for(upper) {
            output.push_str(sequence);
            output.push(LETTER_TERMINATOR);
        } else if c == ' ' {
            output.push(WORD_TERMINATOR);
        } else if is_punctuation(c) {
            output.push(PUNCTUATION_GLYPH);
        } else if let Some(glyph) = tables.glyph_for(c) {
            output.push(glyph);
        } else {
            log::debug!("no encoding for {:?}", c);
            output.push(UNKNOWN_MARKER);
        }
    }

    output
}
