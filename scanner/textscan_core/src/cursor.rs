//! Copy cursor over a borrowed unit buffer.
//!
//! The cursor owns nothing: it is a slice reference plus a read position,
//! with the invariant `0 <= pos <= len` maintained by every mutator.
//! Because it is [`Copy`] for every encoding, a snapshot of the position
//! (or of the whole cursor) is the entire backtracking mechanism — there
//! is no transaction log.
//!
//! # One-step undo
//!
//! [`rewind`](Cursor::rewind) undoes exactly one decode by stepping back
//! the width the decode just returned. Callers must only pass a width they
//! obtained from the immediately preceding [`read_next`](Cursor::read_next);
//! the cursor does not validate that an arbitrary rewind lands on a
//! codepoint boundary.

use std::marker::PhantomData;

use crate::encoding::{Decoded, Encoding};

/// Read cursor over a borrowed slice of storage units.
///
/// Tokens sliced out of the cursor borrow the *buffer* (`'a`), not the
/// cursor, so they remain valid while cursors are copied around.
pub struct Cursor<'a, E: Encoding> {
    units: &'a [E::Unit],
    pos: usize,
    _encoding: PhantomData<fn() -> E>,
}

// Manual impls: the cursor is Copy for every encoding, including ones
// that are not themselves Copy.
impl<E: Encoding> Clone for Cursor<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<E: Encoding> Copy for Cursor<'_, E> {}

impl<E: Encoding> std::fmt::Debug for Cursor<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.units.len())
            .finish()
    }
}

impl<'a, E: Encoding> Cursor<'a, E> {
    /// Create a cursor at position 0.
    pub fn new(units: &'a [E::Unit]) -> Self {
        Self {
            units,
            pos: 0,
            _encoding: PhantomData,
        }
    }

    /// Create a cursor at `pos`, clamped into `[0, len]`.
    pub fn with_pos(units: &'a [E::Unit], pos: usize) -> Self {
        Self {
            units,
            pos: pos.min(units.len()),
            _encoding: PhantomData,
        }
    }

    /// Returns `true` if the cursor has consumed the whole buffer.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.units.len()
    }

    /// Current read position, in storage units.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Set the read position, clamped into `[0, len]`.
    ///
    /// This is the restore half of the save/restore pair every
    /// backtracking operation is built from.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.units.len());
    }

    /// Move the position by `delta` units, clamping into `[0, len]`.
    /// Out-of-range seeks clamp silently; they never error.
    pub fn seek(&mut self, delta: isize) {
        let mag = delta.unsigned_abs();
        let target = if delta < 0 {
            self.pos.saturating_sub(mag)
        } else {
            self.pos.saturating_add(mag)
        };
        self.pos = target.min(self.units.len());
    }

    /// Step back by the width of one previously decoded codepoint.
    ///
    /// # Contract
    ///
    /// `width` must come from the decode that just advanced the cursor;
    /// the rewind is not validated against codepoint boundaries.
    #[inline]
    pub fn rewind(&mut self, width: usize) {
        self.pos = self.pos.saturating_sub(width);
    }

    /// Decode the codepoint at the current position without advancing.
    ///
    /// Returns [`Decoded::END`] at end of buffer.
    #[inline]
    pub fn peek(&self) -> Decoded {
        E::decode(&self.units[self.pos..])
    }

    /// Decode the codepoint at the current position and advance past it.
    ///
    /// Returns [`Decoded::END`] (and does not move) at end of buffer.
    #[inline]
    pub fn read_next(&mut self) -> Decoded {
        let d = E::decode(&self.units[self.pos..]);
        self.pos += d.width;
        d
    }

    /// Total buffer length in storage units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The whole underlying buffer.
    pub fn units(&self) -> &'a [E::Unit] {
        self.units
    }

    /// The unconsumed remainder of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a [E::Unit] {
        &self.units[self.pos..]
    }

    /// Extract a span of the buffer.
    ///
    /// `start..end` must come from positions the cursor has actually
    /// visited, so the range falls on codepoint boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'a [E::Unit] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.units.len(),
            "slice end {end} exceeds buffer length {}",
            self.units.len()
        );
        &self.units[start..end]
    }

    /// Extract the span from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [E::Unit] {
        self.slice(start, self.pos)
    }
}

/// Size assertion: the cursor is a fat pointer plus a position.
const _: () = assert!(std::mem::size_of::<Cursor<'static, crate::Utf8>>() <= 24);
