use std::fmt;

/// A token boundary reported to a [`Tracer`].
///
/// Events borrow from the parser and are only valid for the duration of
/// the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// Comment data.
    Comment(&'a str),
    /// Lower-cased start tag name.
    StartTag(&'a str),
    /// End tag name as written.
    EndTag(&'a str),
    /// A text run.
    Text(&'a str),
    /// An end tag closed an element with a different name. Reported right
    /// after the [`EndTag`](Self::EndTag) event.
    MismatchedEndTag {
        /// Lower-cased name of the element that was closed.
        open: &'a str,
        /// End tag name as written.
        close: &'a str,
    },
}

impl fmt::Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(data) => write!(f, "<!-- {data} -->"),
            Self::StartTag(name) => write!(f, "<{name}>"),
            Self::EndTag(name) => write!(f, "</{name}>"),
            Self::Text(data) => f.write_str(data),
            Self::MismatchedEndTag { open, close } => {
                write!(f, "</{close}> closed the open <{open}> element")
            }
        }
    }
}

/// Callback invoked once per recognized token, plus once per mismatched end
/// tag. It cannot influence parsing.
pub type Tracer = Box<dyn FnMut(&TraceEvent<'_>) + Send>;
