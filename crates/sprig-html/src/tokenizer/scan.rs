//! A byte-position cursor over a `&str` with the character classes of the
//! tag grammar.

/// Characters allowed in tag and attribute names: `[-A-Za-z0-9_]`.
pub(crate) const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Forward-only scanner. `pos` is a byte offset that always sits on a
/// character boundary, so it can be saved and restored freely.
pub(crate) struct Scan<'a> {
    src: &'a str,
    pub(crate) pos: usize,
}

impl<'a> Scan<'a> {
    pub(crate) const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is next.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the longest run of characters satisfying `pred`.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &self.src[start..self.pos]
    }

    /// Consume up to and including the next `c`, returning what came before it.
    pub(crate) fn eat_until(&mut self, c: char) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(c)?;
        self.pos += idx + c.len_utf8();
        Some(&rest[..idx])
    }

    /// Consume a `quote`-delimited body in which a backslash pairs with the
    /// character after it. Returns the body without the quotes.
    pub(crate) fn eat_quoted_with_escapes(&mut self, quote: char) -> Option<&'a str> {
        let start = self.pos;
        if !self.eat(quote) {
            return None;
        }
        let body_start = self.pos;
        while let Some(c) = self.bump() {
            if c == quote {
                return Some(&self.src[body_start..self.pos - quote.len_utf8()]);
            }
            if c == '\\' {
                let _ = self.bump();
            }
        }
        // An escaped closing quote may still close the value when read literally.
        self.pos = body_start;
        if let Some(body) = self.eat_until(quote) {
            return Some(body);
        }
        self.pos = start;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_while_stops_at_first_mismatch() {
        let mut s = Scan::new("div id");
        assert_eq!(s.eat_while(is_name_char), "div");
        assert_eq!(s.rest(), " id");
        assert_eq!(s.eat_while(is_name_char), "");
    }

    #[test]
    fn test_quoted_with_escapes() {
        let mut s = Scan::new(r#""a\"b" rest"#);
        assert_eq!(s.eat_quoted_with_escapes('"'), Some(r#"a\"b"#));
        assert_eq!(s.rest(), " rest");

        let mut s = Scan::new(r#""a\""#);
        assert_eq!(s.eat_quoted_with_escapes('"'), Some("a\\"));
        assert!(s.at_end());

        let mut s = Scan::new("\"open");
        assert_eq!(s.eat_quoted_with_escapes('"'), None);
        assert_eq!(s.pos, 0);
    }
}
