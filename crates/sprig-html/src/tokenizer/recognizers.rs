//! Each recognizer looks at the start of the remaining input and either
//! declines or reports how many bytes it matched together with the token.
//! Recognizers never consume; the caller advances the cursor.

use super::scan::{Scan, is_name_char, is_space};
use super::token::Token;
use crate::attributes::parse_attributes;

/// A successful recognition: the token and the byte length of the full match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Bytes of input covered by the token.
    pub len: usize,
    /// The recognized token.
    pub token: Token,
}

/// Signature shared by all recognizers.
pub type Recognizer = fn(&str) -> Option<Match>;

/// Recognizers in priority order. The first one that matches wins.
pub const RECOGNIZERS: [Recognizer; 4] = [comment, end_tag, start_tag, text];

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// `<!--` up to the first following `-->`.
#[must_use]
pub fn comment(input: &str) -> Option<Match> {
    let body = input.strip_prefix(COMMENT_OPEN)?;
    let end = body.find(COMMENT_CLOSE)?;
    Some(Match {
        len: COMMENT_OPEN.len() + end + COMMENT_CLOSE.len(),
        token: Token::Comment {
            data: body[..end].to_string(),
        },
    })
}

/// `</name`, then anything up to and including the next `>`.
#[must_use]
pub fn end_tag(input: &str) -> Option<Match> {
    let mut s = Scan::new(input);
    if !(s.eat('<') && s.eat('/')) {
        return None;
    }
    let name = s.eat_while(is_name_char);
    if name.is_empty() {
        return None;
    }
    let _ignored = s.eat_until('>')?;
    Some(Match {
        len: s.pos,
        token: Token::EndTag {
            name: name.to_string(),
        },
    })
}

/// `<name` followed by attributes, optional whitespace, an optional `/`
/// and `>`.
///
/// An attribute is whitespace, a name and optionally `=` with a value.
/// When `=` is not followed by a usable value the attribute ends at its
/// name and the rest must still fit the grammar.
///
/// Tag and attribute names are runs of ASCII letters, digits, `_` and
/// `-`. The hyphen goes beyond plain word characters so that `data-*` and
/// `aria-*` attributes are recognized instead of failing the whole tag.
#[must_use]
pub fn start_tag(input: &str) -> Option<Match> {
    let mut s = Scan::new(input);
    if !s.eat('<') {
        return None;
    }
    let name = s.eat_while(is_name_char);
    if name.is_empty() {
        return None;
    }

    let attrs_start = s.pos;
    loop {
        let before = s.pos;
        if s.eat_while(is_space).is_empty() || s.eat_while(is_name_char).is_empty() {
            s.pos = before;
            break;
        }
        let after_name = s.pos;
        let _ = s.eat_while(is_space);
        let has_value = s.eat('=') && {
            let _ = s.eat_while(is_space);
            tag_value(&mut s)
        };
        if !has_value {
            s.pos = after_name;
        }
    }
    let attrs_end = s.pos;

    let _ = s.eat_while(is_space);
    let self_closing = s.eat('/');
    if !s.eat('>') {
        return None;
    }

    Some(Match {
        len: s.pos,
        token: Token::StartTag {
            name: name.to_ascii_lowercase(),
            attributes: parse_attributes(&input[attrs_start..attrs_end]),
            self_closing,
        },
    })
}

/// A quoted value without escapes, or a bare run of anything but
/// whitespace and `>`. A quoted value only counts when the tag can go on
/// after it; otherwise the quote is read as part of a bare value.
fn tag_value(s: &mut Scan<'_>) -> bool {
    let start = s.pos;
    for quote in ['"', '\''] {
        if s.eat(quote) {
            if s.eat_until(quote).is_some() && continues_tag(s.rest()) {
                return true;
            }
            s.pos = start;
            break;
        }
    }
    !s.eat_while(|c| c != '>' && !is_space(c)).is_empty()
}

fn continues_tag(rest: &str) -> bool {
    rest.starts_with(is_space) || rest.starts_with('>') || rest.starts_with("/>")
}

/// One or more characters up to the next `<` or the end of input.
#[must_use]
pub fn text(input: &str) -> Option<Match> {
    let len = input.find('<').unwrap_or(input.len());
    if len == 0 {
        return None;
    }
    Some(Match {
        len,
        token: Token::Text {
            data: input[..len].to_string(),
        },
    })
}

/// Location of the tag that ends a raw-text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTextClose {
    /// Byte offset where `</name` starts; the raw text is everything before it.
    pub start: usize,
    /// Byte offset just past the closing `>`.
    pub end: usize,
}

/// Find the first `</name` (ASCII case-insensitive) that is followed, at
/// any distance, by `>`.
#[must_use]
pub fn find_raw_text_close(input: &str, name: &str) -> Option<RawTextClose> {
    let bytes = input.as_bytes();
    let start = input.match_indices("</").map(|(i, _)| i).find(|&i| {
        bytes
            .get(i + 2..i + 2 + name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name.as_bytes()))
    })?;
    let after_name = start + 2 + name.len();
    let gt = input[after_name..].find('>')?;
    Some(RawTextClose {
        start,
        end: after_name + gt + 1,
    })
}
