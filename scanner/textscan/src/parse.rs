//! Parse-discipline operations: token extraction and speculative matching.
//!
//! Every operation here either succeeds with the cursor one-past the
//! consumed text, or fails having restored the cursor to the entry offset.
//! Failure is `None`/`false` — never an error — except for
//! [`expect_token`](Scanner::expect_token), which is the one place the
//! grammar is unconditional.

use textscan_core::{classify, Encoding, Utf8};

use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl<'a, E: Encoding> Scanner<'a, E> {
    /// Extract and classify the next token.
    ///
    /// 1. Skip non-visible characters (unless `direct`).
    /// 2. Nothing visible at the cursor → `None` (full rollback).
    /// 3. Name-class start → maximal name-or-digit run → [`TokenKind::Name`].
    /// 4. Digit, `-`, or `.` start → try [`parse_number`](Self::parse_number);
    ///    if the numeric attempt fails and the lead was a digit, re-parse as
    ///    a name (`7abc` is one Name token). The attempt order is a policy
    ///    choice kept for compatibility.
    /// 5. Otherwise the single codepoint is the token → [`TokenKind::Single`].
    pub fn parse_token(&mut self, direct: bool) -> Option<Token<'a, E>> {
        let entry = self.cursor.pos();
        self.skip_non_visible(direct);

        let next = self.cursor.peek();
        if next.is_end() || classify::is_whitespace(next.value) || classify::is_newline(next.value)
        {
            // Whitespace here is only reachable in direct mode.
            self.cursor.set_pos(entry);
            return None;
        }

        if classify::is_name(next.value) {
            return Some(self.parse_name());
        }

        if classify::is_digit(next.value)
            || next.value == u32::from('-')
            || next.value == u32::from('.')
        {
            if let Some(tok) = self.parse_number() {
                return Some(tok);
            }
            if classify::is_digit(next.value) {
                return Some(self.parse_name());
            }
            // A `-` or `.` lead that is not a number falls through to Single.
        }

        let start = self.cursor.pos();
        self.cursor.read_next();
        Some(Token::new(self.cursor.slice_from(start), TokenKind::Single))
    }

    /// Consume a maximal run of name-or-digit codepoints from the current
    /// offset. Does not skip anything first — the caller has positioned
    /// the cursor — and may return an empty span.
    pub fn parse_name(&mut self) -> Token<'a, E> {
        let start = self.cursor.pos();
        loop {
            let d = self.cursor.read_next();
            if d.is_end() {
                break;
            }
            if !classify::is_name(d.value) && !classify::is_digit(d.value) {
                self.cursor.rewind(d.width);
                break;
            }
        }
        Token::new(self.cursor.slice_from(start), TokenKind::Name)
    }

    /// Consume a numeric literal: optional `-`, then digits with an
    /// optional `.` fraction.
    ///
    /// Two deliberate quirks, preserved for compatibility:
    /// - whitespace is permitted between the sign and the digits;
    /// - a numeric run immediately followed by a name-class codepoint is
    ///   rejected whole (`123abc` is not the number `123`), with full
    ///   rollback.
    pub fn parse_number(&mut self) -> Option<Token<'a, E>> {
        let entry = self.cursor.pos();
        let mut digits = 0usize;

        // The END sentinel decodes as value 0, so these comparisons are
        // safely false at end of buffer.
        if self.cursor.peek().value == u32::from('-') {
            self.cursor.read_next();
            self.skip_non_visible(false);
        }

        self.eat_digits(&mut digits);
        if self.cursor.peek().value == u32::from('.') {
            self.cursor.read_next();
            self.eat_digits(&mut digits);
        }

        if digits == 0 {
            self.cursor.set_pos(entry);
            return None;
        }

        let after = self.cursor.peek();
        if !after.is_end() && classify::is_name(after.value) {
            self.cursor.set_pos(entry);
            return None;
        }

        Some(Token::new(
            self.cursor.slice(entry, self.cursor.pos()),
            TokenKind::Numeric,
        ))
    }

    fn eat_digits(&mut self, digits: &mut usize) {
        loop {
            let d = self.cursor.peek();
            if d.is_end() || !classify::is_digit(d.value) {
                break;
            }
            self.cursor.read_next();
            *digits += 1;
        }
    }

    /// Consume a maximal run of codepoints drawn from `allowed`, or — when
    /// no alphabet is given — any non-whitespace, non-newline run.
    ///
    /// A caller-defined alternative to the built-in classification; the
    /// returned token reports [`TokenKind::Name`].
    pub fn parse_custom_token(
        &mut self,
        allowed: Option<&str>,
        case_sensitive: bool,
        direct: bool,
    ) -> Option<Token<'a, E>> {
        let entry = self.cursor.pos();
        self.skip_non_visible(direct);

        let start = self.cursor.pos();
        loop {
            let d = self.cursor.peek();
            if d.is_end() {
                break;
            }
            let accepted = match allowed {
                Some(set) => set
                    .chars()
                    .any(|c| crate::token::eq_fold(d.value, u32::from(c), case_sensitive)),
                None => !classify::is_whitespace(d.value) && !classify::is_newline(d.value),
            };
            if !accepted {
                break;
            }
            self.cursor.read_next();
        }

        if self.cursor.pos() == start {
            self.cursor.set_pos(entry);
            return None;
        }
        Some(Token::new(self.cursor.slice_from(start), TokenKind::Name))
    }

    /// Parse one token and keep it only if its kind matches.
    pub fn parse_token_of_type(&mut self, kind: TokenKind, direct: bool) -> Option<Token<'a, E>> {
        let entry = self.cursor.pos();
        match self.parse_token(direct) {
            Some(tok) if tok.kind() == kind => Some(tok),
            _ => {
                self.cursor.set_pos(entry);
                None
            }
        }
    }

    /// Speculatively match one token of the given kind.
    pub fn has_token_of_type(&mut self, kind: TokenKind, direct: bool) -> bool {
        self.parse_token_of_type(kind, direct).is_some()
    }

    /// Speculatively match one token against `expected`.
    ///
    /// On mismatch the cursor is restored — unless `advance_anyway`, in
    /// which case it stays one-past whatever token was parsed.
    pub fn has_token(
        &mut self,
        expected: &str,
        direct: bool,
        case_sensitive: bool,
        advance_anyway: bool,
    ) -> bool {
        let entry = self.cursor.pos();
        let matched = match self.parse_token(direct) {
            Some(tok) => tok.matches(expected, case_sensitive),
            None => false,
        };
        if !matched && !advance_anyway {
            self.cursor.set_pos(entry);
        }
        matched
    }

    /// Speculatively match a whitespace-separated sequence of tokens.
    ///
    /// `expected` is itself tokenized, so `"model id"` matches the two
    /// tokens `model` and `id` regardless of how much whitespace separates
    /// them in the input. With `concat`, the input tokens must be adjacent
    /// (no intervening non-visible characters). Any mismatch restores the
    /// cursor to before the whole attempt.
    pub fn has_token_sequence(
        &mut self,
        expected: &str,
        direct: bool,
        case_sensitive: bool,
        concat: bool,
    ) -> bool {
        let entry = self.cursor.pos();
        let mut wanted = Scanner::<Utf8>::from_text(expected);
        let mut first = true;
        while let Some(want) = wanted.parse_token(false) {
            let d = if first { direct } else { concat };
            first = false;
            let matched = match self.parse_token(d) {
                Some(got) => got.matches_codepoints(want.codepoints(), case_sensitive),
                None => false,
            };
            if !matched {
                self.cursor.set_pos(entry);
                return false;
            }
        }
        true
    }

    /// Demand a specific token; a mismatch is a hard
    /// [`ScanError::Syntax`], not a rollback-and-report-nothing.
    ///
    /// The comparison is case-sensitive. The cursor is restored on
    /// failure so the caller can report against the attempted offset.
    pub fn expect_token(&mut self, expected: &str) -> Result<(), ScanError> {
        let entry = self.cursor.pos();
        match self.parse_token(false) {
            Some(tok) if tok.matches(expected, true) => Ok(()),
            Some(tok) => {
                let found = tok.to_text();
                self.cursor.set_pos(entry);
                Err(ScanError::Syntax {
                    expected: expected.to_owned(),
                    found,
                    offset: entry,
                })
            }
            None => {
                self.cursor.set_pos(entry);
                Err(ScanError::Syntax {
                    expected: expected.to_owned(),
                    found: String::new(),
                    offset: entry,
                })
            }
        }
    }
}
