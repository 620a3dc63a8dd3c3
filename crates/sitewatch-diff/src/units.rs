//! Unit sequence extraction: turn raw text into comparable units.
//!
//! No normalization is applied beyond what each splitter states. Units
//! borrow from the input text, so extraction never copies content.

/// Split on `\n`, keeping trailing empty segments.
///
/// The empty string yields one empty unit, and `"a\n"` yields `["a", ""]`.
/// Carriage returns are kept as part of the line.
pub fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Split on runs of whitespace, discarding empty tokens.
pub fn words(text: &str) -> Vec<&str> {
    text.split(is_word_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Every Unicode scalar value, in order.
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Word separators: space, tab, line feed, vertical tab, form feed and
/// carriage return.
fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_trailing_empty_segment() {
        assert_eq!(lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(lines(""), vec![""]);
    }

    #[test]
    fn lines_are_whitespace_sensitive() {
        assert_eq!(lines("a\r\n b"), vec!["a\r", " b"]);
    }

    #[test]
    fn words_collapse_whitespace_runs() {
        assert_eq!(
            words("  The  product\tcosts\r\n$99 "),
            vec!["The", "product", "costs", "$99"]
        );
    }

    #[test]
    fn words_of_blank_text_are_empty() {
        assert!(words("").is_empty());
        assert!(words(" \t\n ").is_empty());
    }

    #[test]
    fn words_are_case_sensitive() {
        let a = words("Hello world");
        let b = words("hello world");
        assert_ne!(a[0], b[0]);
        assert_eq!(a[1], b[1]);
    }

    #[test]
    fn non_breaking_space_is_not_a_separator() {
        assert_eq!(words("a\u{a0}b c"), vec!["a\u{a0}b", "c"]);
    }

    #[test]
    fn chars_are_scalar_values() {
        assert_eq!(chars("héllo"), vec!['h', 'é', 'l', 'l', 'o']);
        assert!(chars("").is_empty());
    }
}
