use sprig_dom::AttributesMap;
use strum_macros::{Display, EnumIter};

/// The outcome of one parser step.
///
/// `Display` renders the lower-case, hyphenated name (`start-tag`, `eos`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenKind {
    /// The input is exhausted.
    Eos,
    /// A `<!-- ... -->` comment.
    Comment,
    /// A `</name>` end tag.
    EndTag,
    /// A `<name ...>` start tag, including a captured raw-text body.
    StartTag,
    /// A run of character data.
    Text,
    /// Parsing stopped on an error.
    Error,
}

/// A recognized piece of markup with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Comment data between `<!--` and `-->`.
    Comment {
        /// Everything between the delimiters, verbatim.
        data: String,
    },

    /// An end tag. Anything after the name is ignored.
    EndTag {
        /// The name as written.
        name: String,
    },

    /// A start tag.
    StartTag {
        /// The name, lower-cased.
        name: String,
        /// Parsed attribute list.
        attributes: AttributesMap,
        /// Whether the tag ended in `/>`. Informational only.
        self_closing: bool,
    },

    /// Character data up to the next `<`.
    Text {
        /// The run, verbatim.
        data: String,
    },
}

impl Token {
    /// The [`TokenKind`] reported when this token is consumed.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Comment { .. } => TokenKind::Comment,
            Self::EndTag { .. } => TokenKind::EndTag,
            Self::StartTag { .. } => TokenKind::StartTag,
            Self::Text { .. } => TokenKind::Text,
        }
    }
}
