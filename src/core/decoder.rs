//! Glyph -> text decoding state machine

use crate::core::glyphs::{LETTER_TERMINATOR, PUNCTUATION_GLYPH, UNKNOWN_MARKER, WORD_TERMINATOR};
use crate::core::tables::CipherTables;

/// Accumulator state machine for decoding.
///
/// Letter glyph sequences are variable-length and delimited only by the
/// terminator glyph, so letter-shape glyphs collect in `pending` until a
/// boundary is reached. Both terminators and the punctuation glyph are
/// reset points: whatever is pending is resolved (or discarded) there,
/// never carried across the boundary.
pub struct DecodeFsm<'a> {
    tables: &'a CipherTables,
    /// In-progress glyph sequence, not yet terminated
    pending: String,
    /// Output buffer
    output: String,
}

impl<'a> DecodeFsm<'a> {
    /// New FSM over the given tables.
    pub fn new(tables: &'a CipherTables) -> Self {
        Self {
            tables,
            pending: String::new(),
            output: String::new(),
        }
    }

    /// Consume one glyph and transition.
    pub fn feed(&mut self, glyph: char) {
        if self.tables.is_shape(glyph) {
            self.pending.push(glyph);
        } else if glyph == LETTER_TERMINATOR {
            self.flush_pending();
        } else if glyph == WORD_TERMINATOR {
            self.pending.clear();
            self.output.push(' ');
        } else if glyph == PUNCTUATION_GLYPH {
            self.pending.clear();
            self.output.push_str(", ");
        } else if let Some(represented) = self.tables.represented_by(glyph) {
            self.output.push_str(represented);
        } else {
            log::debug!("no decoding for {:?}", glyph);
            self.output.push(UNKNOWN_MARKER);
        }
    }

    /// Resolve the pending sequence: emit the mapped letter, or `?` when
    /// the sequence (including an empty one, from a stray terminator) is
    /// not in the reverse table.
    fn flush_pending(&mut self) {
        match self.tables.letter_for(&self.pending) {
            Some(letter) => self.output.push(letter),
            None => {
                log::debug!("unknown glyph sequence {:?}", self.pending);
                self.output.push(UNKNOWN_MARKER);
            }
        }
        self.pending.clear();
    }

    /// Finish decoding: resolve a trailing unterminated sequence, then
    /// return the output with leading/trailing spaces trimmed. Interior
    /// space runs are preserved.
    pub fn finish(mut self) -> String {
        if !self.pending.is_empty() {
            self.flush_pending();
        }
        self.output.trim_matches(' ').to_string()
    }
}

/// Decode a ChronoPulse glyph string back into text.
///
/// Total over any input; unrecognized glyphs and unknown sequences
/// degrade to `?` instead of failing.
pub fn decode(code: &str, tables: &CipherTables) -> String {
    let mut fsm = DecodeFsm::new(tables);
    for glyph in code.chars() {
        fsm.feed(glyph);
    }
    fsm.finish()
}
