use pretty_assertions::assert_eq;

use crate::{Latin1, Scanner, TokenKind, Utf16, Utf8};

// === skip_non_visible ===

#[test]
fn whitespace_only_buffer_skips_to_end() {
    let mut scanner = Scanner::from_text("  \t\t   ");
    scanner.skip_non_visible(false);
    assert!(scanner.at_end());
}

#[test]
fn skip_stops_at_first_visible() {
    let mut scanner = Scanner::from_text(" \t\r\n x");
    scanner.skip_non_visible(false);
    assert_eq!(scanner.peek().value, u32::from('x'));
}

#[test]
fn skip_consumes_control_characters() {
    let mut scanner = Scanner::from_text("\u{01}\u{02}x");
    scanner.skip_non_visible(false);
    assert_eq!(scanner.peek().value, u32::from('x'));
}

#[test]
fn skip_consumes_nbsp() {
    let mut scanner = Scanner::from_text("\u{A0}x");
    scanner.skip_non_visible(false);
    assert_eq!(scanner.peek().value, u32::from('x'));
}

#[test]
fn direct_skip_is_a_no_op() {
    let mut scanner = Scanner::from_text("   x");
    scanner.skip_non_visible(true);
    assert_eq!(scanner.pos(), 0);
}

// === Construction ===

#[test]
fn with_offset_clamps() {
    let scanner = Scanner::<Utf8>::with_offset(b"abc", 99);
    assert!(scanner.at_end());
}

#[test]
fn from_str_conversion() {
    let mut scanner: Scanner<'_, Utf8> = "42".into();
    let tok = scanner.parse_token(false);
    assert_eq!(tok.map(|t| t.kind()), Some(TokenKind::Numeric));
}

#[test]
fn copies_share_the_buffer_not_the_position() {
    let mut a = Scanner::from_text("one two");
    let mut b = a;
    let first = a.parse_token(false);
    assert_eq!(first.map(|t| t.to_text()), Some("one".to_owned()));
    // The copy still sits at offset 0.
    assert_eq!(b.pos(), 0);
    let again = b.parse_token(false);
    assert_eq!(again.map(|t| t.to_text()), Some("one".to_owned()));
}

// === Token iteration ===

#[test]
fn tokens_partition_is_deterministic() {
    let text = "obj  =\t{ pos 1.5, -2 }\nname \u{442}\u{435}\u{441}\u{442}";
    let first: Vec<(TokenKind, String)> = Scanner::from_text(text)
        .tokens()
        .map(|t| (t.kind(), t.to_text()))
        .collect();
    let second: Vec<(TokenKind, String)> = Scanner::from_text(text)
        .tokens()
        .map(|t| (t.kind(), t.to_text()))
        .collect();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn tokens_end_to_end_foo_equals_42() {
    let mut scanner = Scanner::from_text("foo = 42");

    let tok = scanner.parse_token(false);
    assert_eq!(
        tok.map(|t| (t.kind(), t.to_text())),
        Some((TokenKind::Name, "foo".to_owned()))
    );

    let tok = scanner.parse_token(false);
    assert_eq!(
        tok.map(|t| (t.kind(), t.to_text())),
        Some((TokenKind::Single, "=".to_owned()))
    );

    let tok = scanner.parse_token(false);
    assert_eq!(
        tok.map(|t| (t.kind(), t.to_text())),
        Some((TokenKind::Numeric, "42".to_owned()))
    );

    assert!(scanner.parse_token(false).is_none());
    assert!(scanner.at_end());
}

// === Other encodings ===

#[test]
fn utf16_scanner_tokenizes_the_same_text() {
    let units: Vec<u16> = "foo = 42".encode_utf16().collect();
    let scanner = Scanner::<Utf16>::new(&units);

    let kinds: Vec<TokenKind> = scanner.tokens().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Name, TokenKind::Single, TokenKind::Numeric]
    );
    // `tokens()` took a copy; the original scanner has not moved.
    assert_eq!(scanner.pos(), 0);
}

#[test]
fn latin1_accented_bytes_are_names() {
    // "grün = 1" in Latin-1: 'ü' is the single byte 0xFC.
    let units = [b'g', b'r', 0xFC, b'n', b' ', b'=', b' ', b'1'];
    let tokens: Vec<(TokenKind, usize)> = Scanner::<Latin1>::new(&units)
        .tokens()
        .map(|t| (t.kind(), t.len()))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Name, 4),
            (TokenKind::Single, 1),
            (TokenKind::Numeric, 1),
        ]
    );
}
