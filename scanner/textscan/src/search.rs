//! Scan-discipline operations: forward search and line helpers.
//!
//! Scan operations consume the buffer looking for their target. On
//! success the cursor stops one-past the match and the match's start
//! offset is returned; on failure the cursor is left at the end of the
//! buffer — it was consumed by a search that never matched. Callers who
//! need the original offset save and restore it explicitly.

use textscan_core::Encoding;

use crate::scanner::Scanner;
use crate::token::eq_fold;

impl<'a, E: Encoding> Scanner<'a, E> {
    /// Search forward for a single codepoint.
    ///
    /// ASCII needles hit the encoding's byte-search fast path.
    pub fn scan_character(&mut self, c: char) -> Option<usize> {
        match E::find_codepoint(self.cursor.rest(), u32::from(c)) {
            Some(idx) => {
                let found = self.cursor.pos() + idx;
                self.cursor.set_pos(found);
                self.cursor.read_next();
                Some(found)
            }
            None => {
                self.cursor.set_pos(self.cursor.len());
                None
            }
        }
    }

    /// Literal codepoint-sequence search, independent of token boundaries.
    ///
    /// Useful for finding raw markers anywhere in text. An empty needle
    /// matches at the current offset without moving the cursor.
    pub fn scan_string(&mut self, needle: &str, case_sensitive: bool) -> Option<usize> {
        let needle: Vec<u32> = needle.chars().map(u32::from).collect();
        let Some(&head) = needle.first() else {
            return Some(self.cursor.pos());
        };

        loop {
            if self.cursor.at_end() {
                return None;
            }
            if case_sensitive {
                // Jump straight to the next candidate head.
                let Some(idx) = E::find_codepoint(self.cursor.rest(), head) else {
                    self.cursor.set_pos(self.cursor.len());
                    return None;
                };
                let candidate = self.cursor.pos() + idx;
                self.cursor.set_pos(candidate);
            }
            let start = self.cursor.pos();
            if self.match_needle(&needle, case_sensitive) {
                return Some(start);
            }
            self.cursor.set_pos(start);
            self.cursor.read_next();
        }
    }

    /// Decode-and-compare the needle at the cursor. Leaves the cursor
    /// one-past the needle on success; position is unspecified on failure
    /// (the caller restores).
    fn match_needle(&mut self, needle: &[u32], case_sensitive: bool) -> bool {
        for &want in needle {
            let d = self.cursor.read_next();
            if d.is_end() || !eq_fold(d.value, want, case_sensitive) {
                return false;
            }
        }
        true
    }

    /// Search forward for a whole token equal to `expected`.
    ///
    /// Token-boundary aware: `scan_token("id")` does not match inside
    /// `"grid"`. Returns the matched token's start offset.
    pub fn scan_token(&mut self, expected: &str, case_sensitive: bool) -> Option<usize> {
        loop {
            let Some(tok) = self.parse_token(false) else {
                self.cursor.set_pos(self.cursor.len());
                return None;
            };
            if tok.matches(expected, case_sensitive) {
                return Some(self.cursor.pos() - tok.len());
            }
        }
    }

    /// Search forward for the first token equal to any candidate.
    ///
    /// Returns `(candidate index, token start offset)`.
    pub fn scan_token_any(
        &mut self,
        candidates: &[&str],
        case_sensitive: bool,
    ) -> Option<(usize, usize)> {
        loop {
            let Some(tok) = self.parse_token(false) else {
                self.cursor.set_pos(self.cursor.len());
                return None;
            };
            if let Some(index) = candidates
                .iter()
                .position(|c| tok.matches(c, case_sensitive))
            {
                return Some((index, self.cursor.pos() - tok.len()));
            }
        }
    }

    /// Search forward for a whitespace-separated token sequence.
    ///
    /// Anchors at successive token starts and retries
    /// [`has_token_sequence`](Self::has_token_sequence) at each; `direct`
    /// is forwarded to the anchored attempt. Returns the offset of the
    /// sequence's first token.
    pub fn scan_token_sequence(
        &mut self,
        expected: &str,
        direct: bool,
        case_sensitive: bool,
    ) -> Option<usize> {
        loop {
            let Some(first) = self.parse_token(false) else {
                self.cursor.set_pos(self.cursor.len());
                return None;
            };
            let start = self.cursor.pos() - first.len();
            self.cursor.set_pos(start);
            if self.has_token_sequence(expected, direct, case_sensitive, false) {
                return Some(start);
            }
            // No match anchored here — step past this token and keep looking.
            self.cursor.set_pos(start);
            let _ = self.parse_token(true);
        }
    }

    // ─── Line helpers ───────────────────────────────────────────────────

    /// Advance to the next CR or LF, or to the end of the buffer.
    /// The newline itself is not consumed.
    pub fn goto_newline(&mut self) {
        match E::find_newline(self.cursor.rest()) {
            Some(idx) => {
                let target = self.cursor.pos() + idx;
                self.cursor.set_pos(target);
            }
            None => self.cursor.set_pos(self.cursor.len()),
        }
    }

    /// Consume and return the span up to (not including) the next CR/LF.
    pub fn read_until_newline(&mut self) -> &'a [E::Unit] {
        let start = self.cursor.pos();
        self.goto_newline();
        self.cursor.slice(start, self.cursor.pos())
    }

    /// Consume the rest of the line including its terminator, treating
    /// CRLF as a single terminator.
    pub fn skip_line(&mut self) {
        self.goto_newline();
        let d = self.cursor.read_next();
        if d.value == u32::from('\r') && self.cursor.peek().value == u32::from('\n') {
            self.cursor.read_next();
        }
    }
}
