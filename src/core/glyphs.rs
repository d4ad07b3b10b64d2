//! Structural glyphs of the ChronoPulse wire format

/// Marks the end of a letter's glyph sequence.
pub const LETTER_TERMINATOR: char = '●';

/// Stands for a single space between words.
pub const WORD_TERMINATOR: char = '○';

/// Stands for any character of the fixed punctuation set.
pub const PUNCTUATION_GLYPH: char = '•';

/// Emitted (in both directions) for input the cipher cannot represent.
pub const UNKNOWN_MARKER: char = '?';

/// Punctuation characters that collapse into [`PUNCTUATION_GLYPH`] on
/// encode. Checked before the symbol table, so a cipher definition that
/// also lists one of these as a `Represents` value never sees it.
pub const PUNCTUATION_SET: [char; 4] = [',', '.', ';', ':'];

/// Whether `c` belongs to the fixed punctuation set.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION_SET.contains(&c)
}

/// Whether `c` is one of the structural glyphs (terminators, punctuation
/// glyph, unknown marker). Alphabet sequences must not contain these.
pub fn is_reserved(c: char) -> bool {
    matches!(
        c,
        LETTER_TERMINATOR | WORD_TERMINATOR | PUNCTUATION_GLYPH | UNKNOWN_MARKER
    )
}
