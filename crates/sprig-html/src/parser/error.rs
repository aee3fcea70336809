use thiserror::Error;

/// Characters shown on each side of the failure offset.
const CONTEXT_RADIUS: usize = 20;
/// Marks the failure offset inside the context window.
const CARET: char = '\u{2038}';
/// Marks a side of the context window that was cut short.
const ELLIPSIS: char = '\u{2026}';

/// A fatal parse failure.
///
/// `Display` gives `<cause> Near: <context>`, where the context is a window
/// of the original input around the failure offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An end tag appeared while no element was open.
    #[error("No end tag for <{name}>. Near: {context}")]
    UnmatchedEndTag {
        /// The end tag's name as written.
        name: String,
        /// Characters consumed before the end tag.
        offset: usize,
        /// Rendered context window.
        context: String,
    },

    /// A raw-text element was never closed.
    #[error("No ending {name} tag. Near: {context}")]
    UnterminatedRawText {
        /// The lower-cased element name.
        name: String,
        /// Characters consumed, including the start tag.
        offset: usize,
        /// Rendered context window.
        context: String,
    },

    /// The remaining input starts with nothing the tokenizer recognizes.
    #[error("Parsing error. Near: {context}")]
    Unrecognized {
        /// Characters consumed before the unrecognized input.
        offset: usize,
        /// Rendered context window.
        context: String,
    },
}

impl ParseError {
    pub(crate) fn unmatched_end_tag(name: &str, original: &str, offset: usize) -> Self {
        Self::UnmatchedEndTag {
            name: name.to_string(),
            offset,
            context: context_window(original, offset),
        }
    }

    pub(crate) fn unterminated_raw_text(name: &str, original: &str, offset: usize) -> Self {
        Self::UnterminatedRawText {
            name: name.to_string(),
            offset,
            context: context_window(original, offset),
        }
    }

    pub(crate) fn unrecognized(original: &str, offset: usize) -> Self {
        Self::Unrecognized {
            offset,
            context: context_window(original, offset),
        }
    }

    /// Characters of input consumed before the failure.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnmatchedEndTag { offset, .. }
            | Self::UnterminatedRawText { offset, .. }
            | Self::Unrecognized { offset, .. } => *offset,
        }
    }

    /// The rendered context window.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::UnmatchedEndTag { context, .. }
            | Self::UnterminatedRawText { context, .. }
            | Self::Unrecognized { context, .. } => context,
        }
    }
}

/// Render up to 20 characters of `original` on each side of the character
/// offset `offset`, with a caret (U+2038) at the offset and an ellipsis
/// (U+2026) on each side where the window stops short of the input's ends.
#[must_use]
pub fn context_window(original: &str, offset: usize) -> String {
    let chars: Vec<char> = original.chars().collect();
    let offset = offset.min(chars.len());
    let start = offset.saturating_sub(CONTEXT_RADIUS);
    let end = (offset + CONTEXT_RADIUS).min(chars.len());

    let mut out = String::with_capacity(end - start + 3);
    if start > 0 {
        out.push(ELLIPSIS);
    }
    out.extend(&chars[start..offset]);
    out.push(CARET);
    out.extend(&chars[offset..end]);
    if end < chars.len() {
        out.push(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_start() {
        assert_eq!(context_window("</div>", 0), "\u{2038}</div>");
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(context_window("abc", 3), "abc\u{2038}");
    }

    #[test]
    fn test_window_truncated_both_sides() {
        let input = "a".repeat(25) + &"b".repeat(25);
        let expected = format!(
            "\u{2026}{}\u{2038}{}\u{2026}",
            "a".repeat(20),
            "b".repeat(20)
        );
        assert_eq!(context_window(&input, 25), expected);
    }

    #[test]
    fn test_window_exactly_radius_is_not_truncated() {
        let input = "x".repeat(40);
        let expected = format!("{}\u{2038}{}", "x".repeat(20), "x".repeat(20));
        assert_eq!(context_window(&input, 20), expected);
    }

    #[test]
    fn test_window_counts_characters() {
        assert_eq!(context_window("é<", 1), "é\u{2038}<");
    }

    #[test]
    fn test_display() {
        let err = ParseError::unmatched_end_tag("div", "</div>", 0);
        assert_eq!(err.to_string(), "No end tag for <div>. Near: \u{2038}</div>");
        assert_eq!(err.offset(), 0);
        assert_eq!(err.context(), "\u{2038}</div>");
    }
}
