//! Integration tests for the tokenizer cursor and recognizer order.

use sprig_html::tokenizer::{RECOGNIZERS, Token, Tokenizer};
use strum::IntoEnumIterator;

use sprig_html::TokenKind;

/// Helper to tokenize a string with the cursor alone (no tree building),
/// stopping at the end of input or at the first unrecognized position.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    while let Some(m) = tokenizer.next_token() {
        tokenizer.skip(m.len);
        tokens.push(m.token);
    }
    tokens
}

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(
        tokens,
        vec![Token::Text {
            data: "Hello".to_string()
        }]
    );
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 1);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "div");
            assert!(!self_closing);
            assert!(attributes.is_empty());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_start_tag_with_attributes() {
    let tokens = tokenize(r#"<input type="checkbox" checked/>"#);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "input");
            assert!(self_closing);
            assert_eq!(attributes.get("type").map(String::as_str), Some("checkbox"));
            assert_eq!(attributes.get("checked").map(String::as_str), Some("checked"));
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_end_tag_keeps_written_case() {
    let tokens = tokenize("</DIV>");
    assert_eq!(
        tokens,
        vec![Token::EndTag {
            name: "DIV".to_string()
        }]
    );
}

#[test]
fn test_mixed_sequence_kinds() {
    let kinds: Vec<TokenKind> = tokenize("<p>a<!--b--></p>c")
        .iter()
        .map(Token::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::StartTag,
            TokenKind::Text,
            TokenKind::Comment,
            TokenKind::EndTag,
            TokenKind::Text,
        ]
    );
}

#[test]
fn test_comment_takes_priority_over_tags() {
    // `<!--` could never be a start tag, but the comment must win even when
    // its body looks like markup.
    let tokens = tokenize("<!--</p>-->");
    assert_eq!(
        tokens,
        vec![Token::Comment {
            data: "</p>".to_string()
        }]
    );
}

#[test]
fn test_stops_at_unrecognized_input() {
    let mut tokenizer = Tokenizer::new("ok<?xml?>");
    let m = tokenizer.next_token().unwrap();
    tokenizer.skip(m.len);
    assert_eq!(tokenizer.remaining(), "<?xml?>");
    assert!(tokenizer.next_token().is_none());
    assert_eq!(tokenizer.consumed_chars(), 2);
    assert_eq!(tokenizer.original(), "ok<?xml?>");
}

#[test]
fn test_consumed_chars_counts_characters() {
    let mut tokenizer = Tokenizer::new("héllo<b>");
    let m = tokenizer.next_token().unwrap();
    assert_eq!(m.len, 6);
    tokenizer.skip(m.len);
    assert_eq!(tokenizer.consumed_chars(), 5);
    assert!(!tokenizer.is_eos());
}

#[test]
fn test_raw_text_close_from_cursor() {
    let mut tokenizer = Tokenizer::new("<style>a{}</style>");
    let m = tokenizer.next_token().unwrap();
    tokenizer.skip(m.len);
    let close = tokenizer.raw_text_close("style").unwrap();
    assert_eq!(&tokenizer.remaining()[..close.start], "a{}");
    tokenizer.skip(close.end);
    assert!(tokenizer.is_eos());
}

#[test]
fn test_recognizer_order() {
    let [comment, end_tag, start_tag, text] = RECOGNIZERS;
    assert!(comment("<!--x-->").is_some());
    assert!(end_tag("</x>").is_some());
    assert!(start_tag("<x>").is_some());
    assert!(text("x").is_some());
}

#[test]
fn test_every_kind_has_a_name() {
    let names: Vec<String> = TokenKind::iter().map(|k| k.to_string()).collect();
    assert_eq!(
        names,
        vec!["eos", "comment", "end-tag", "start-tag", "text", "error"]
    );
}
