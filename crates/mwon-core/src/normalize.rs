//! Whitespace and directionality-mark cleanup applied to every line and token.

/// Returns `true` for the invisible directionality controls that wiki editors
/// leave behind: LRM, RLM and the embedding/override/pop characters
/// U+202A..=U+202E.
#[must_use]
pub const fn is_direction_mark(c: char) -> bool {
    matches!(c, '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}')
}

/// Trim surrounding whitespace, then strip a trailing run of direction marks.
///
/// Marks in the middle of the text are kept. Whitespace uncovered by removing
/// the marks is kept as well, so `"a \u{200e}"` becomes `"a "`.
///
/// ```rust
/// use mwon_core::normalize;
///
/// assert_eq!(normalize(" foo\u{200e} "), "foo");
/// assert_eq!(normalize("mid\u{200e}word"), "mid\u{200e}word");
/// ```
#[must_use]
pub fn normalize(text: &str) -> &str {
    text.trim().trim_end_matches(is_direction_mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_surrounding_whitespace() {
        assert_eq!(normalize("  hello world \t\r"), "hello world");
    }

    #[test]
    fn test_strips_trailing_mark_after_trim() {
        assert_eq!(normalize(" foo\u{200e} "), "foo");
    }

    #[test]
    fn test_strips_whole_trailing_run() {
        assert_eq!(normalize("Key\u{200f}\u{202a}\u{202e}\u{200e}"), "Key");
    }

    #[test]
    fn test_keeps_embedded_marks() {
        assert_eq!(normalize("mid\u{200e}word"), "mid\u{200e}word");
        assert_eq!(normalize("\u{200e}lead"), "\u{200e}lead");
    }

    #[test]
    fn test_keeps_whitespace_before_marks() {
        assert_eq!(normalize("a \u{200e}"), "a ");
    }

    #[test]
    fn test_other_format_chars_untouched() {
        // U+200B (zero width space) and U+2066 (LRI) are outside the stripped set
        assert_eq!(normalize("x\u{200b}"), "x\u{200b}");
        assert_eq!(normalize("x\u{2066}"), "x\u{2066}");
    }

    #[test]
    fn test_empty_and_marks_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\u{200e}\u{200f}"), "");
    }

    #[test]
    fn test_direction_mark_set() {
        for c in ['\u{200e}', '\u{200f}', '\u{202a}', '\u{202b}', '\u{202c}', '\u{202d}', '\u{202e}'] {
            assert!(is_direction_mark(c), "{c:?} should be a direction mark");
        }
        for c in ['a', ' ', '\u{200d}', '\u{2029}', '\u{202f}'] {
            assert!(!is_direction_mark(c), "{c:?} should not be a direction mark");
        }
    }

    proptest! {
        #[test]
        fn test_never_ends_with_mark(s in "\\PC{0,40}[\u{200e}\u{200f}\u{202a}-\u{202e} ]{0,5}") {
            let out = normalize(&s);
            prop_assert!(!out.ends_with(is_direction_mark));
            prop_assert!(!out.starts_with(char::is_whitespace));
        }

        #[test]
        fn test_result_is_substring(s in "\\PC{0,60}") {
            let out = normalize(&s);
            prop_assert!(s.contains(out));
        }
    }
}
