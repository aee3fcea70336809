//! Tokenizer: the input cursor and the ordered token recognizers.

/// Input cursor over the original string.
pub mod core;
/// Ordered recognizers for comments, tags and text.
pub mod recognizers;
/// Character-level scanning helpers shared with the attribute grammar.
pub(crate) mod scan;
/// Token types produced by the recognizers.
pub mod token;

pub use self::core::Tokenizer;
pub use recognizers::{Match, RECOGNIZERS, RawTextClose, Recognizer, find_raw_text_close};
pub use token::{Token, TokenKind};
