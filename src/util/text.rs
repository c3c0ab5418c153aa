// src/util/text.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("Failed to compile whitespace regex");
}

/// Single-line preview of free text.
///
/// This function:
/// 1. Collapses every run of whitespace (including newlines) into one space
/// 2. Trims both ends
/// 3. Truncates to `width` characters, marking the cut with `…`
///
/// # Examples
///
/// ```
/// use qbank::util::text::preview;
///
/// let text = "What is\n  ownership   in Rust?";
/// assert_eq!(preview(text, 40), "What is ownership in Rust?");
/// assert_eq!(preview(text, 10), "What is o…");
/// ```
pub fn preview(text: &str, width: usize) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");

    if collapsed.chars().count() <= width {
        return collapsed.into_owned();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = collapsed.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_text_when_previewing_then_returns_unchanged() {
        assert_eq!(preview("What is a Tree?", 60), "What is a Tree?");
    }

    #[test]
    fn given_multiline_text_when_previewing_then_joins_lines() {
        assert_eq!(preview("First line\nSecond line", 60), "First line Second line");
    }

    #[test]
    fn given_whitespace_around_text_when_previewing_then_trims() {
        assert_eq!(preview("   padded\t ", 60), "padded");
    }

    #[test]
    fn given_long_text_when_previewing_then_truncates_with_ellipsis() {
        let result = preview("abcdefghij", 5);

        assert_eq!(result, "abcd…");
        assert_eq!(result.chars().count(), 5);
    }

    #[test]
    fn given_multibyte_text_when_truncating_then_cuts_on_char_boundary() {
        assert_eq!(preview("日本語復習しよう", 4), "日本語…");
    }

    #[test]
    fn given_empty_text_when_previewing_then_returns_empty_string() {
        assert_eq!(preview("", 10), "");
        assert_eq!(preview("anything", 0), "");
    }
}
