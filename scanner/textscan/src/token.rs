//! Zero-copy token spans.
//!
//! A [`Token`] borrows the scanner's buffer directly — the lifetime
//! parameter is the *buffer's*, not the scanner's, since scanners are
//! `Copy` and several may point at one buffer. No token survives the
//! buffer it aliases; the borrow checker enforces what the original
//! pointer-arithmetic spans left to convention.

use textscan_core::{classify, Decoded, Encoding};

use crate::error::ScanError;

/// Classification of a parsed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of name/digit codepoints starting with a name codepoint
    /// (or with a digit, via the digit-leading-identifier fallback).
    Name,
    /// A numeric literal: optional sign, digits, optional fraction.
    Numeric,
    /// A single codepoint that fits no other class.
    Single,
}

/// A classified, contiguous span of the scanned buffer.
pub struct Token<'a, E: Encoding> {
    units: &'a [E::Unit],
    kind: TokenKind,
}

// Manual impls: tokens are Copy for every encoding.
impl<E: Encoding> Clone for Token<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<E: Encoding> Copy for Token<'_, E> {}

impl<E: Encoding> std::fmt::Debug for Token<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind)
            .field("text", &self.to_text())
            .finish()
    }
}

impl<'a, E: Encoding> Token<'a, E> {
    pub(crate) fn new(units: &'a [E::Unit], kind: TokenKind) -> Self {
        Self { units, kind }
    }

    /// The token's classification.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The raw span, in the buffer's storage units.
    pub fn units(&self) -> &'a [E::Unit] {
        self.units
    }

    /// Span length in storage units (not codepoints).
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` for a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate the token's codepoints, decoding on demand.
    pub fn codepoints(&self) -> Codepoints<'a, E> {
        Codepoints { units: self.units }
    }

    /// Decode the token into an owned string.
    ///
    /// Codepoints with no scalar value (lenient decodes of malformed
    /// input) render as U+FFFD.
    pub fn to_text(&self) -> String {
        self.codepoints()
            .map(|cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// Compare the token against `expected`, codepoint by codepoint.
    pub fn matches(&self, expected: &str, case_sensitive: bool) -> bool {
        self.matches_codepoints(expected.chars().map(u32::from), case_sensitive)
    }

    pub(crate) fn matches_codepoints(
        &self,
        other: impl Iterator<Item = u32>,
        case_sensitive: bool,
    ) -> bool {
        let mut mine = self.codepoints();
        let mut theirs = other;
        loop {
            match (mine.next(), theirs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if eq_fold(a, b, case_sensitive) => {}
                _ => return false,
            }
        }
    }

    /// Convert the span to a signed integer.
    pub fn to_i64(&self) -> Result<i64, ScanError> {
        let text = self.numeric_text();
        text.parse()
            .map_err(|_| ScanError::BadFormat { text })
    }

    /// Convert the span to an unsigned integer.
    pub fn to_u64(&self) -> Result<u64, ScanError> {
        let text = self.numeric_text();
        text.parse()
            .map_err(|_| ScanError::BadFormat { text })
    }

    /// Convert the span to a floating-point number.
    pub fn to_f64(&self) -> Result<f64, ScanError> {
        let text = self.numeric_text();
        text.parse()
            .map_err(|_| ScanError::BadFormat { text })
    }

    /// Token text with the sign-gap quirk normalized away: the number
    /// grammar permits whitespace between a leading `-` and its digits,
    /// so a numeric span may read `- 12`. Conversions close that gap;
    /// nothing else is altered.
    fn numeric_text(&self) -> String {
        let text = self.to_text();
        match text.strip_prefix('-') {
            Some(rest) => {
                let digits = rest.trim_start_matches(|c: char| {
                    let cp = u32::from(c);
                    classify::is_whitespace(cp) || !classify::is_renderable(cp)
                });
                format!("-{digits}")
            }
            None => text,
        }
    }
}

/// Case-folding codepoint comparison used by every token match.
pub(crate) fn eq_fold(a: u32, b: u32, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        fold(a) == fold(b)
    }
}

fn fold(cp: u32) -> u32 {
    match char::from_u32(cp) {
        Some(c) => c.to_lowercase().next().map_or(cp, u32::from),
        None => cp,
    }
}

/// Decoding iterator over a token span.
pub struct Codepoints<'a, E: Encoding> {
    units: &'a [E::Unit],
}

impl<E: Encoding> Iterator for Codepoints<'_, E> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let d: Decoded = E::decode(self.units);
        if d.is_end() {
            return None;
        }
        self.units = &self.units[d.width..];
        Some(d.value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use textscan_core::Utf8;

    use super::*;

    fn token(text: &str, kind: TokenKind) -> Token<'_, Utf8> {
        Token::new(text.as_bytes(), kind)
    }

    #[test]
    fn codepoints_decode_multibyte() {
        let tok = token("grün", TokenKind::Name);
        let cps: Vec<u32> = tok.codepoints().collect();
        assert_eq!(cps, vec![0x67, 0x72, 0xFC, 0x6E]);
        assert_eq!(tok.len(), 5); // 'ü' is two units
    }

    #[test]
    fn matches_case_sensitive() {
        let tok = token("Model", TokenKind::Name);
        assert!(tok.matches("Model", true));
        assert!(!tok.matches("model", true));
        assert!(tok.matches("MODEL", false));
    }

    #[test]
    fn matches_rejects_prefixes_both_ways() {
        let tok = token("mod", TokenKind::Name);
        assert!(!tok.matches("model", false));
        assert!(!tok.matches("mo", false));
    }

    #[test]
    fn case_folding_handles_non_ascii() {
        let tok = token("GRÜN", TokenKind::Name);
        assert!(tok.matches("grün", false));
    }

    #[test]
    fn to_i64_and_u64() {
        assert_eq!(token("42", TokenKind::Numeric).to_i64(), Ok(42));
        assert_eq!(token("-7", TokenKind::Numeric).to_i64(), Ok(-7));
        assert_eq!(token("42", TokenKind::Numeric).to_u64(), Ok(42));
    }

    #[test]
    fn to_f64() {
        let tok = token("-12.5", TokenKind::Numeric);
        assert_eq!(tok.to_f64(), Ok(-12.5));
    }

    #[test]
    fn sign_gap_quirk_normalized_in_conversions() {
        // The number grammar admits "- 12"; the conversion closes the gap.
        assert_eq!(token("- 12", TokenKind::Numeric).to_i64(), Ok(-12));
        assert_eq!(token("-\t12.5", TokenKind::Numeric).to_f64(), Ok(-12.5));
    }

    #[test]
    fn conversion_failures_are_bad_format() {
        let tok = token("abc", TokenKind::Name);
        assert_eq!(
            tok.to_i64(),
            Err(ScanError::BadFormat { text: "abc".to_owned() })
        );
        let empty = token("", TokenKind::Name);
        assert!(empty.to_f64().is_err());
    }

    #[test]
    fn negative_to_u64_is_bad_format() {
        assert!(token("-3", TokenKind::Numeric).to_u64().is_err());
    }
}
