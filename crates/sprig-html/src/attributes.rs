//! Attribute-list grammar.
//!
//! The input is the raw text between a start tag's name and its closing
//! `>` or `/>`. Every `name[=value]` occurrence is collected; characters
//! that cannot start a name are skipped.

use sprig_dom::AttributesMap;

use crate::tables::is_boolean_attribute;
use crate::tokenizer::scan::{Scan, is_name_char, is_space};

/// Parse an attribute list into a map.
///
/// Values come from a double-quoted, single-quoted or bare form, tried in
/// that order. Quoted values keep backslash sequences verbatim. An
/// attribute without a value is filled with its own name when it is a
/// [boolean attribute](crate::tables::BOOLEAN_ATTRIBUTES), and with the
/// empty string otherwise. A repeated name keeps its last value.
#[must_use]
pub fn parse_attributes(src: &str) -> AttributesMap {
    let mut attrs = AttributesMap::new();
    let mut s = Scan::new(src);

    while !s.at_end() {
        let name = s.eat_while(is_name_char);
        if name.is_empty() {
            let _ = s.bump();
            continue;
        }
        let value = match attribute_value(&mut s) {
            Some(value) => value.to_string(),
            None if is_boolean_attribute(name) => name.to_string(),
            None => String::new(),
        };
        let _ = attrs.insert(name.to_string(), value);
    }

    attrs
}

/// `ws* = ws*` followed by a value. Restores the position and returns
/// `None` when there is no value part.
fn attribute_value<'a>(s: &mut Scan<'a>) -> Option<&'a str> {
    let start = s.pos;
    let _ = s.eat_while(is_space);
    if s.eat('=') {
        let _ = s.eat_while(is_space);
        if let Some(value) = s
            .eat_quoted_with_escapes('"')
            .or_else(|| s.eat_quoted_with_escapes('\''))
        {
            return Some(value);
        }
        let bare = s.eat_while(|c| c != '>' && !is_space(c));
        if !bare.is_empty() {
            return Some(bare);
        }
    }
    s.pos = start;
    None
}
