use sprig_dom::{AttributesMap, DomTree, ElementData, Node, NodeId};

use super::error::ParseError;
use super::trace::{TraceEvent, Tracer};
use crate::tables::ParserConfig;
use crate::tokenizer::{Match, Token, TokenKind, Tokenizer};

/// Single-pass parser turning an HTML string into a [`DomTree`].
///
/// Each call to [`advance`](Self::advance) recognizes one token (comment,
/// end tag, start tag or text, in that priority) and links the resulting
/// node into the tree. The first error is terminal.
///
/// A parser owns its input and mutates its cursor in place: use one
/// instance per input.
///
/// End tags are not matched by name: any end tag closes the innermost open
/// element. When the names differ the parser records the mismatch (see
/// [`mismatched_end_tags`](Self::mismatched_end_tags)) and reports it to the
/// tracer as [`TraceEvent::MismatchedEndTag`].
pub struct Parser {
    tokenizer: Tokenizer,

    /// Nodes recognized so far; the top-level list is the target when no
    /// element is open.
    tree: DomTree,

    /// The insertion point: new nodes become its children.
    parent: Option<NodeId>,

    /// Set by the first failure; no further tokens are recognized.
    error: Option<ParseError>,

    /// Every value returned by `advance`, in order.
    tokens: Vec<TokenKind>,

    /// `(open, close)` name pairs of end tags that closed a differently
    /// named element.
    mismatches: Vec<(String, String)>,

    config: ParserConfig,

    tracer: Option<Tracer>,
}

impl Parser {
    /// Create a parser over `html` using the default tables.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            tokenizer: Tokenizer::new(html),
            tree: DomTree::new(),
            parent: None,
            error: None,
            tokens: Vec::new(),
            mismatches: Vec::new(),
            config: ParserConfig::default(),
            tracer: None,
        }
    }

    /// Use `config` instead of the default element tables.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Report every recognized token to `tracer`.
    #[must_use]
    pub fn with_tracer(mut self, tracer: impl FnMut(&TraceEvent<'_>) + Send + 'static) -> Self {
        self.tracer = Some(Box::new(tracer));
        self
    }

    /// The kinds returned by `advance` so far.
    #[must_use]
    pub fn token_history(&self) -> &[TokenKind] {
        &self.tokens
    }

    /// End tags so far that closed an element of another name, as
    /// `(open, close)` pairs: the element's lower-cased name and the end
    /// tag's name as written.
    #[must_use]
    pub fn mismatched_end_tags(&self) -> &[(String, String)] {
        &self.mismatches
    }

    /// The error that stopped parsing, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Drive `advance` until the end of input or the first error.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`]; the partially built tree is dropped.
    pub fn parse(mut self) -> Result<DomTree, ParseError> {
        while self.error.is_none() && self.advance() != TokenKind::Eos {}
        self.into_result()
    }

    /// Finish parsing: the tree built so far, or the error that stopped it.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] recorded by `advance`, if any.
    pub fn into_result(self) -> Result<DomTree, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tree),
        }
    }

    /// Recognize and consume the next token.
    ///
    /// Returns [`TokenKind::Eos`] at the end of input and
    /// [`TokenKind::Error`] once parsing has failed; both are sticky.
    pub fn advance(&mut self) -> TokenKind {
        let kind = self.step();
        self.tokens.push(kind);
        kind
    }

    fn step(&mut self) -> TokenKind {
        if self.error.is_some() {
            return TokenKind::Error;
        }
        if self.tokenizer.is_eos() {
            return TokenKind::Eos;
        }
        let Some(Match { len, token }) = self.tokenizer.next_token() else {
            let err = ParseError::unrecognized(self.tokenizer.original(), self.offset());
            return self.fail(err);
        };

        match token {
            Token::Comment { data } => {
                self.tokenizer.skip(len);
                self.trace(&TraceEvent::Comment(&data));
                let node = self.tree.alloc(Node::comment(data, self.parent));
                self.connect(node);
                TokenKind::Comment
            }
            Token::EndTag { name } => self.end_tag(len, &name),
            Token::StartTag {
                name, attributes, ..
            } => self.start_tag(len, &name, attributes),
            Token::Text { data } => {
                self.tokenizer.skip(len);
                self.trace(&TraceEvent::Text(&data));
                let node = self.tree.alloc(Node::text(data, self.parent));
                self.connect(node);
                TokenKind::Text
            }
        }
    }

    /// Close the innermost open element, whatever its name.
    fn end_tag(&mut self, len: usize, name: &str) -> TokenKind {
        let Some(open) = self.parent else {
            let err =
                ParseError::unmatched_end_tag(name, self.tokenizer.original(), self.offset());
            return self.fail(err);
        };
        self.tokenizer.skip(len);
        self.trace(&TraceEvent::EndTag(name));

        if let Some(open_name) = self
            .tree
            .as_element(open)
            .map(ElementData::local_name)
            .filter(|open_name| !open_name.eq_ignore_ascii_case(name))
        {
            self.trace(&TraceEvent::MismatchedEndTag {
                open: &open_name,
                close: name,
            });
            self.mismatches.push((open_name, name.to_string()));
        }

        self.parent = self.tree.parent(open);
        TokenKind::EndTag
    }

    fn start_tag(&mut self, len: usize, name: &str, attributes: AttributesMap) -> TokenKind {
        self.tokenizer.skip(len);
        self.trace(&TraceEvent::StartTag(name));

        let node = self.tree.alloc(Node::element(name, attributes, self.parent));
        self.connect(node);

        if self.config.is_raw_text(name) {
            return self.special(node, name);
        }
        if !self.config.is_void(name) {
            self.parent = Some(node);
        }
        TokenKind::StartTag
    }

    /// Capture everything up to `</name ...>` as the element's only child.
    /// The insertion point stays where it was.
    fn special(&mut self, element: NodeId, name: &str) -> TokenKind {
        let Some(close) = self.tokenizer.raw_text_close(name) else {
            let err =
                ParseError::unterminated_raw_text(name, self.tokenizer.original(), self.offset());
            return self.fail(err);
        };

        let text = self.tokenizer.remaining()[..close.start].to_string();
        let text_node = self.tree.alloc(Node::text(text, Some(element)));
        self.tree.append_child(Some(element), text_node);

        self.tokenizer.skip(close.end);
        TokenKind::StartTag
    }

    /// Append `node` to the current target list and link it to its previous
    /// sibling.
    fn connect(&mut self, node: NodeId) {
        self.tree.append_child(self.parent, node);
    }

    fn offset(&self) -> usize {
        self.tokenizer.consumed_chars()
    }

    fn fail(&mut self, err: ParseError) -> TokenKind {
        self.error = Some(err);
        TokenKind::Error
    }

    fn trace(&mut self, event: &TraceEvent<'_>) {
        if let Some(tracer) = self.tracer.as_mut() {
            tracer(event);
        }
    }
}
