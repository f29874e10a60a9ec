//! The scanner: a shared cursor plus the whitespace-skipping prefix step.
//!
//! Token and search operations live in the `parse` and `search` modules;
//! this module holds the type itself, cursor delegation, and
//! [`skip_non_visible`](Scanner::skip_non_visible), which nearly every
//! parser uses as its first step.

use textscan_core::{classify, Cursor, Decoded, Encoding, Utf8};

use crate::token::Token;

/// Cursor-based reader over an immutable unit buffer.
///
/// `Copy`: duplicating a scanner duplicates the read position, not the
/// buffer, so a snapshot is free. One scanner is meant to be owned by one
/// parsing call stack; every operation mutates the shared cursor.
pub struct Scanner<'a, E: Encoding> {
    pub(crate) cursor: Cursor<'a, E>,
}

impl<E: Encoding> Clone for Scanner<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<E: Encoding> Copy for Scanner<'_, E> {}

impl<E: Encoding> std::fmt::Debug for Scanner<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner").field("cursor", &self.cursor).finish()
    }
}

impl<'a, E: Encoding> Scanner<'a, E> {
    /// Create a scanner at offset 0 over a borrowed unit buffer.
    pub fn new(units: &'a [E::Unit]) -> Self {
        Self {
            cursor: Cursor::new(units),
        }
    }

    /// Create a scanner at `offset`, clamped into `[0, len]`.
    pub fn with_offset(units: &'a [E::Unit], offset: usize) -> Self {
        Self {
            cursor: Cursor::with_pos(units, offset),
        }
    }

    // ─── Cursor delegation ───────────────────────────────────────────────

    /// Returns `true` once the whole buffer has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    /// Current offset in storage units. Save this before a compound
    /// attempt; restore with [`set_pos`](Self::set_pos) to backtrack.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Restore (or jump) the offset, clamped into `[0, len]`.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.cursor.set_pos(pos);
    }

    /// Move the offset by `delta` units, clamping at both ends.
    pub fn seek(&mut self, delta: isize) {
        self.cursor.seek(delta);
    }

    /// Undo one decode by its width. See [`Cursor::rewind`].
    pub fn rewind(&mut self, width: usize) {
        self.cursor.rewind(width);
    }

    /// Buffer length in storage units.
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Returns `true` for an empty buffer.
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Decode the codepoint at the cursor without advancing.
    #[inline]
    pub fn peek(&self) -> Decoded {
        self.cursor.peek()
    }

    /// Decode the codepoint at the cursor and advance past it.
    #[inline]
    pub fn read_next(&mut self) -> Decoded {
        self.cursor.read_next()
    }

    /// The unconsumed remainder of the buffer.
    pub fn rest(&self) -> &'a [E::Unit] {
        self.cursor.rest()
    }

    // ─── Whitespace ─────────────────────────────────────────────────────

    /// Advance past whitespace and control characters (including CR/LF)
    /// until a visible codepoint or the end of the buffer.
    ///
    /// With `direct` set, the cursor is not moved at all: the caller wants
    /// to inspect exactly the codepoint under the cursor.
    pub fn skip_non_visible(&mut self, direct: bool) {
        if direct {
            return;
        }
        loop {
            let d = self.cursor.peek();
            if d.is_end() {
                break;
            }
            if classify::is_whitespace(d.value) || !classify::is_renderable(d.value) {
                self.cursor.read_next();
            } else {
                break;
            }
        }
    }

    /// Iterate the buffer's token partition from the current offset.
    ///
    /// Repeatedly calls [`parse_token(false)`](Self::parse_token); the
    /// partition is deterministic, so re-scanning the same buffer yields
    /// the same sequence.
    pub fn tokens(self) -> Tokens<'a, E> {
        Tokens { scanner: self }
    }
}

impl<'a> Scanner<'a, Utf8> {
    /// Convenience constructor for UTF-8 text.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'a> From<&'a str> for Scanner<'a, Utf8> {
    fn from(text: &'a str) -> Self {
        Self::from_text(text)
    }
}

/// Token iterator returned by [`Scanner::tokens`].
pub struct Tokens<'a, E: Encoding> {
    scanner: Scanner<'a, E>,
}

impl<'a, E: Encoding> Iterator for Tokens<'a, E> {
    type Item = Token<'a, E>;

    fn next(&mut self) -> Option<Token<'a, E>> {
        self.scanner.parse_token(false)
    }
}

/// Size assertion: a scanner is exactly its cursor.
const _: () = assert!(std::mem::size_of::<Scanner<'static, Utf8>>() <= 24);

#[cfg(test)]
mod tests;
