//! Lenient HTML tokenizer and tree builder for the Sprig parser.
//!
//! # Scope
//!
//! Parsing is a single pass over the input. At each step the tokenizer
//! tries, in order:
//! - a comment (`<!-- ... -->`)
//! - an end tag, which closes the innermost open element
//! - a start tag, which opens an element unless it is void or raw text
//! - a text run up to the next `<`
//!
//! The first input that fits none of these, an end tag with nothing open,
//! or a raw-text element without its end tag stops parsing with a
//! [`ParseError`].
//!
//! # Not Implemented
//!
//! - Encoding detection
//! - HTML5 insertion modes and implied end tags
//! - DOCTYPE, CDATA and processing instructions
//! - Character references and whitespace normalization
//!
//! # Example
//!
//! ```
//! let tree = sprig_html::parse("<p class=x>hi</p>").unwrap();
//! let p = tree.roots()[0];
//! assert_eq!(tree.as_element(p).unwrap().tag_name, "P");
//! assert_eq!(tree.text_content(p), "hi");
//! ```

/// Attribute-list grammar.
pub mod attributes;
/// Tree construction, errors and tracing.
pub mod parser;
/// Void, raw-text and boolean-attribute tables.
pub mod tables;
/// Input cursor and token recognizers.
pub mod tokenizer;

pub use attributes::parse_attributes;
pub use parser::{
    ParseError, Parser, TraceEvent, Tracer, context_window, format_tree, print_forest, print_tree,
};
pub use tables::ParserConfig;
pub use tokenizer::{Token, TokenKind, Tokenizer};

use sprig_dom::DomTree;

/// Parse `html` with a fresh [`Parser`] and the default tables.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse(html: &str) -> Result<DomTree, ParseError> {
    Parser::new(html).parse()
}
