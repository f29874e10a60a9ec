//! Pure codepoint classification.
//!
//! Stateless predicates used by every parsing and search routine to decide
//! token boundaries. None of these touch a cursor.

/// Latin-1 accented letter blocks: `À..Ö`, `Ø..ö`, `ø..ÿ`.
/// Excludes `×` (0xD7) and `÷` (0xF7), which are operators, not letters.
const fn is_latin1_letter(cp: u32) -> bool {
    matches!(cp, 0xC0..=0xD6 | 0xD8..=0xF6 | 0xF8..=0xFF)
}

/// Returns `true` if `cp` can start or extend a name token.
///
/// ASCII letters, underscore, the Latin-1 accented letters, and — as a
/// deliberate catch-all — every codepoint above the Latin-1 range, so
/// identifiers in non-Latin scripts still tokenize as names.
#[inline]
pub const fn is_name(cp: u32) -> bool {
    matches!(cp, 0x41..=0x5A | 0x61..=0x7A) // A-Z, a-z
        || cp == 0x5F // _
        || is_latin1_letter(cp)
        || cp > 0xFF
}

/// Returns `true` for ASCII decimal digits `0..=9`.
#[inline]
pub const fn is_digit(cp: u32) -> bool {
    matches!(cp, 0x30..=0x39)
}

/// Returns `true` for horizontal whitespace: space, tab, and NBSP (U+00A0).
#[inline]
pub const fn is_whitespace(cp: u32) -> bool {
    matches!(cp, 0x20 | 0x09 | 0xA0)
}

/// Returns `true` for line terminators: CR and LF.
#[inline]
pub const fn is_newline(cp: u32) -> bool {
    matches!(cp, 0x0D | 0x0A)
}

/// Returns `true` if `cp` is above the control range and not the space
/// character — i.e. it would put ink on the page.
#[inline]
pub const fn is_renderable(cp: u32) -> bool {
    cp > 0x20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_and_underscore_are_name() {
        assert!(is_name(u32::from('a')));
        assert!(is_name(u32::from('Z')));
        assert!(is_name(u32::from('_')));
        assert!(!is_name(u32::from('7')));
        assert!(!is_name(u32::from('-')));
    }

    #[test]
    fn accented_latin_letters_are_name() {
        assert!(is_name(u32::from('ä')));
        assert!(is_name(u32::from('É')));
        assert!(is_name(u32::from('ß')));
        // Multiplication and division signs sit inside the accented
        // blocks but are operators.
        assert!(!is_name(0xD7));
        assert!(!is_name(0xF7));
    }

    #[test]
    fn above_latin1_is_name_catch_all() {
        assert!(is_name(u32::from('Д'))); // Cyrillic
        assert!(is_name(u32::from('字'))); // CJK
        assert!(is_name(0x100)); // first codepoint past Latin-1
    }

    #[test]
    fn digits() {
        for c in '0'..='9' {
            assert!(is_digit(u32::from(c)));
        }
        assert!(!is_digit(u32::from('a')));
    }

    #[test]
    fn whitespace_includes_nbsp() {
        assert!(is_whitespace(u32::from(' ')));
        assert!(is_whitespace(u32::from('\t')));
        assert!(is_whitespace(0xA0));
        assert!(!is_whitespace(u32::from('\n')));
    }

    #[test]
    fn newlines() {
        assert!(is_newline(u32::from('\r')));
        assert!(is_newline(u32::from('\n')));
        assert!(!is_newline(u32::from(' ')));
    }

    #[test]
    fn renderable_threshold() {
        assert!(!is_renderable(u32::from(' ')));
        assert!(!is_renderable(u32::from('\t')));
        assert!(!is_renderable(0x00));
        assert!(is_renderable(u32::from('!')));
        assert!(is_renderable(0xA0)); // NBSP renders (as a gap), but is whitespace
    }
}
