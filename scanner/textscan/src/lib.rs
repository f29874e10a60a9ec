//! Backtracking token and search operations over encoding-agnostic buffers.
//!
//! A [`Scanner`] is a shared cursor over an immutable unit buffer, driven
//! by higher-level format readers (CSV rows, key/value sections, object
//! lists). Every operation reads forward from the current offset and obeys
//! one of two disciplines:
//!
//! - **Parse discipline** (`parse_*`, `has_*`, `expect_token`): on success
//!   the cursor stops one-past the consumed text; on failure it is restored
//!   to the entry offset exactly — the call is a no-op.
//! - **Scan discipline** (`scan_*`): a forward search. On success the
//!   cursor stops one-past the match; on failure it is left at the end of
//!   the buffer. Callers who need the old position save and restore it
//!   themselves.
//!
//! Speculative operations never raise an error: absence of a match is a
//! rollback plus a negative return. [`ScanError`] is reserved for the two
//! caller-facing contracts — [`expect_token`](Scanner::expect_token) and
//! the numeric conversions on [`Token`].
//!
//! ```
//! use textscan::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::from_text("foo = 42");
//! let name = scanner.parse_token(false).unwrap();
//! assert_eq!(name.kind(), TokenKind::Name);
//! assert!(scanner.has_token("=", false, true, false));
//! let value = scanner.parse_token(false).unwrap();
//! assert_eq!(value.to_i64().unwrap(), 42);
//! ```

mod error;
mod parse;
mod scanner;
mod search;
mod token;

pub use error::ScanError;
pub use scanner::{Scanner, Tokens};
pub use token::{Token, TokenKind};

pub use textscan_core::{classify, Cursor, Decoded, Encoding, Latin1, Utf16, Utf8};
