//! Caller-facing failure kinds.
//!
//! Exactly two operations construct a [`ScanError`]: `expect_token` (the
//! grammar demanded a token and the input did not provide it) and the
//! numeric conversions on `Token` (the span does not parse as a number).
//! Every speculative operation reports absence by rollback and a negative
//! return instead — consumers build entire optional-grammar branches on
//! that no-error path.

use thiserror::Error;

/// A hard scanning failure, propagated to the format reader.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A mandatory token was absent or mismatched.
    #[error("expected `{expected}` at offset {offset}, found `{found}`")]
    Syntax {
        /// The token text the grammar demanded.
        expected: String,
        /// What the input provided instead (empty at end of buffer).
        found: String,
        /// Offset the match was attempted at, in storage units.
        offset: usize,
    },

    /// A token span could not be converted to the requested numeric type.
    #[error("`{text}` is not a valid number")]
    BadFormat {
        /// The offending token text.
        text: String,
    },
}
