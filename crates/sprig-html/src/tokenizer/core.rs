use super::recognizers::{Match, RECOGNIZERS, RawTextClose, find_raw_text_close};

/// Cursor over an HTML string.
///
/// The original input is kept intact for error reporting; the unconsumed
/// suffix only ever shrinks.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    input: String,
    /// Byte offset of the first unconsumed character.
    current_pos: usize,
}

impl Tokenizer {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            current_pos: 0,
        }
    }

    /// The full, untouched input.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.input
    }

    /// The unconsumed suffix of the input.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.input[self.current_pos..]
    }

    /// Whether everything has been consumed.
    #[must_use]
    pub fn is_eos(&self) -> bool {
        self.current_pos >= self.input.len()
    }

    /// Number of characters consumed so far.
    #[must_use]
    pub fn consumed_chars(&self) -> usize {
        self.input[..self.current_pos].chars().count()
    }

    /// Run the recognizers against the remaining input in priority order
    /// and return the first match. Nothing is consumed.
    #[must_use]
    pub fn next_token(&self) -> Option<Match> {
        let rest = self.remaining();
        RECOGNIZERS.iter().find_map(|recognize| recognize(rest))
    }

    /// Locate the end tag closing a raw-text element named `name`.
    #[must_use]
    pub fn raw_text_close(&self, name: &str) -> Option<RawTextClose> {
        find_raw_text_close(self.remaining(), name)
    }

    /// Consume `len` bytes.
    ///
    /// `len` must come from a [`Match`] or [`RawTextClose`] against the
    /// current remaining input; it is clamped to the end of input.
    pub fn skip(&mut self, len: usize) {
        self.current_pos = (self.current_pos + len).min(self.input.len());
    }
}
