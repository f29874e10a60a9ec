//! Codepoint decoding strategies.
//!
//! An [`Encoding`] maps a slice of raw storage units (`u8` for byte
//! encodings, `u16` for wide encodings) to one decoded codepoint plus the
//! number of units it occupied. Everything above this module is written
//! purely in terms of `(codepoint, width)` pairs and never inspects units
//! directly, other than slicing spans for token output.
//!
//! # Leniency
//!
//! Decoders never fail. A malformed sequence (stray UTF-8 continuation
//! byte, truncated multi-byte sequence, unpaired UTF-16 surrogate) decodes
//! as the raw unit value with width 1, so a scan always makes progress.
//! Error *reporting* on malformed input is a consumer concern.

use crate::classify;

/// One decoded codepoint and the number of storage units it consumed.
///
/// The end-of-buffer sentinel is `Decoded { value: 0, width: 0 }` — the
/// only situation in which `width` is zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The codepoint value.
    pub value: u32,
    /// Width of the codepoint in storage units. Zero only at end of input.
    pub width: usize,
}

impl Decoded {
    /// The end-of-buffer sentinel.
    pub const END: Decoded = Decoded { value: 0, width: 0 };

    /// Returns `true` if this is the end-of-buffer sentinel.
    #[inline]
    pub fn is_end(self) -> bool {
        self.width == 0
    }
}

/// A codepoint decoding strategy.
///
/// Implementations are stateless marker types; all methods are associated
/// functions over unit slices. The scanner is generic over this trait, so
/// classification and parsing logic is written once and instantiated per
/// encoding at compile time.
pub trait Encoding {
    /// The raw storage unit of this encoding.
    type Unit: Copy + Eq + std::fmt::Debug + 'static;

    /// Decode the codepoint at the start of `units`.
    ///
    /// Returns [`Decoded::END`] for an empty slice. Never returns a zero
    /// width for a non-empty slice.
    fn decode(units: &[Self::Unit]) -> Decoded;

    /// Index (in units) of the first codepoint equal to `cp`, or `None`.
    fn find_codepoint(units: &[Self::Unit], cp: u32) -> Option<usize>
    where
        Self: Sized,
    {
        decode_find::<Self>(units, |v| v == cp)
    }

    /// Index (in units) of the first CR or LF codepoint, or `None`.
    fn find_newline(units: &[Self::Unit]) -> Option<usize>
    where
        Self: Sized,
    {
        decode_find::<Self>(units, classify::is_newline)
    }
}

/// Shared decode-loop search: the semantic definition behind the
/// `find_*` methods. Encodings may override with byte-level fast paths
/// but must match this behavior.
fn decode_find<E: Encoding>(units: &[E::Unit], pred: impl Fn(u32) -> bool) -> Option<usize> {
    let mut idx = 0;
    while idx < units.len() {
        let d = E::decode(&units[idx..]);
        if d.is_end() {
            return None;
        }
        if pred(d.value) {
            return Some(idx);
        }
        idx += d.width;
    }
    None
}

/// UTF-8: one to four `u8` units per codepoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Utf8;

impl Encoding for Utf8 {
    type Unit = u8;

    fn decode(units: &[u8]) -> Decoded {
        let Some(&lead) = units.first() else {
            return Decoded::END;
        };
        let (width, bits) = match lead {
            0x00..=0x7F => {
                return Decoded {
                    value: u32::from(lead),
                    width: 1,
                }
            }
            0xC0..=0xDF => (2, u32::from(lead & 0x1F)),
            0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
            0xF0..=0xF7 => (4, u32::from(lead & 0x07)),
            // Stray continuation byte or invalid lead: lenient single unit.
            _ => {
                return Decoded {
                    value: u32::from(lead),
                    width: 1,
                }
            }
        };
        let mut value = bits;
        for i in 1..width {
            match units.get(i) {
                Some(&b) if b & 0xC0 == 0x80 => {
                    value = (value << 6) | u32::from(b & 0x3F);
                }
                // Truncated or malformed sequence: lenient single unit.
                _ => {
                    return Decoded {
                        value: u32::from(lead),
                        width: 1,
                    }
                }
            }
        }
        Decoded { value, width }
    }

    fn find_codepoint(units: &[u8], cp: u32) -> Option<usize> {
        // ASCII needles hit the SIMD path; multi-byte needles take the
        // decode loop.
        if cp < 0x80 {
            if let Ok(b) = u8::try_from(cp) {
                return memchr::memchr(b, units);
            }
        }
        decode_find::<Utf8>(units, |v| v == cp)
    }

    fn find_newline(units: &[u8]) -> Option<usize> {
        // CR and LF are ASCII; they never appear as UTF-8 continuation
        // bytes, so a raw byte search cannot produce a false hit.
        memchr::memchr2(b'\r', b'\n', units)
    }
}

/// Latin-1 (ISO 8859-1): every `u8` unit is its own codepoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latin1;

impl Encoding for Latin1 {
    type Unit = u8;

    fn decode(units: &[u8]) -> Decoded {
        match units.first() {
            Some(&b) => Decoded {
                value: u32::from(b),
                width: 1,
            },
            None => Decoded::END,
        }
    }

    fn find_codepoint(units: &[u8], cp: u32) -> Option<usize> {
        match u8::try_from(cp) {
            Ok(b) => memchr::memchr(b, units),
            // Codepoints above 0xFF cannot occur in Latin-1 input.
            Err(_) => None,
        }
    }

    fn find_newline(units: &[u8]) -> Option<usize> {
        memchr::memchr2(b'\r', b'\n', units)
    }
}

/// UTF-16: one or two `u16` units per codepoint (surrogate pairs).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Utf16;

impl Encoding for Utf16 {
    type Unit = u16;

    fn decode(units: &[u16]) -> Decoded {
        let Some(&lead) = units.first() else {
            return Decoded::END;
        };
        if (0xD800..=0xDBFF).contains(&lead) {
            if let Some(&trail) = units.get(1) {
                if (0xDC00..=0xDFFF).contains(&trail) {
                    let hi = u32::from(lead - 0xD800);
                    let lo = u32::from(trail - 0xDC00);
                    return Decoded {
                        value: 0x10000 + (hi << 10) + lo,
                        width: 2,
                    };
                }
            }
        }
        // BMP codepoint, or an unpaired surrogate decoded leniently.
        Decoded {
            value: u32::from(lead),
            width: 1,
        }
    }
}
