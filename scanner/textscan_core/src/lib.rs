//! Low-level scanning primitives: encodings, cursor, character classes.
//!
//! This crate is the encoding-aware floor of the scanning engine. It knows
//! how to decode one codepoint at a time out of a borrowed unit buffer and
//! how to classify codepoints; it knows nothing about tokens, grammars, or
//! file formats. The higher-level operations live in `textscan`.
//!
//! # Layers
//!
//! - [`Encoding`] — strategy trait mapping raw storage units to codepoints.
//!   Shipped strategies: [`Utf8`], [`Latin1`], [`Utf16`].
//! - [`Cursor`] — a `Copy` read position over a borrowed unit slice. All
//!   backtracking above this layer is a save/restore pair around
//!   [`Cursor::pos`], not a transaction log.
//! - [`classify`] — pure codepoint predicates used to decide token
//!   boundaries. Never moves a cursor.

pub mod classify;
mod cursor;
mod encoding;

pub use cursor::Cursor;
pub use encoding::{Decoded, Encoding, Latin1, Utf16, Utf8};
