//! Text wrapping utilities.

use super::width::char_width;

/// Word-wrap text to `width` columns, keeping explicit line breaks.
///
/// Empty lines in the input survive as empty output lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(
            textwrap::wrap(paragraph, width)
                .into_iter()
                .map(std::borrow::Cow::into_owned),
        );
    }
    lines
}

/// Break text into rows of at most `width` cells, splitting anywhere.
///
/// Unlike [`wrap_text`] this never drops whitespace, so every character of
/// the input maps to exactly one row and column. Used for editable text.
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = vec![String::new()];
    let mut row_width = 0;

    for ch in text.chars() {
        if ch == '\n' {
            rows.push(String::new());
            row_width = 0;
            continue;
        }
        let w = char_width(ch);
        if row_width + w > width && row_width > 0 {
            rows.push(String::new());
            row_width = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push(ch);
        }
        row_width += w;
    }

    rows
}

/// Row and cell column of the character cursor `cursor` in [`hard_wrap`] output.
///
/// A cursor sitting right after a full row lands at the start of the next row.
pub fn hard_wrap_cursor(text: &str, width: usize, cursor: usize) -> (usize, usize) {
    let width = width.max(1);
    let mut row = 0;
    let mut col = 0;

    for ch in text.chars().take(cursor) {
        if ch == '\n' {
            row += 1;
            col = 0;
            continue;
        }
        let w = char_width(ch);
        if col + w > width && col > 0 {
            row += 1;
            col = 0;
        }
        col += w;
    }

    if col >= width {
        (row + 1, 0)
    } else {
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_short() {
        assert_eq!(wrap_text("Hello world", 80), vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_text_long() {
        let lines = wrap_text("This is a long line that needs wrapping", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 10);
        }
    }

    #[test]
    fn test_wrap_text_keeps_line_breaks() {
        let lines = wrap_text("one\n\nthree", 80);
        assert_eq!(lines, vec!["one", "", "three"]);
    }

    #[test]
    fn test_wrap_text_unicode() {
        let text = "Hello 🎉 world 你好 this is a test with émojis";
        let lines = wrap_text(text, 15);
        assert!(lines.len() > 1);
        let rejoined = lines.join(" ");
        assert!(rejoined.contains("🎉"));
        assert!(rejoined.contains("你好"));
    }

    #[test]
    fn test_hard_wrap_splits_at_width() {
        assert_eq!(hard_wrap("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(hard_wrap("ab\ncd", 4), vec!["ab", "cd"]);
        assert_eq!(hard_wrap("", 4), vec![""]);
        assert_eq!(hard_wrap("ab\n", 4), vec!["ab", ""]);
    }

    #[test]
    fn test_hard_wrap_preserves_spaces() {
        assert_eq!(hard_wrap("a  b", 2), vec!["a ", " b"]);
    }

    #[test]
    fn test_hard_wrap_cursor() {
        assert_eq!(hard_wrap_cursor("abcdef", 4, 0), (0, 0));
        assert_eq!(hard_wrap_cursor("abcdef", 4, 3), (0, 3));
        assert_eq!(hard_wrap_cursor("abcdef", 4, 5), (1, 1));
        assert_eq!(hard_wrap_cursor("ab\ncd", 4, 3), (1, 0));
        // Exactly full row: cursor wraps to the next row.
        assert_eq!(hard_wrap_cursor("abcd", 4, 4), (1, 0));
    }

    #[test]
    fn test_hard_wrap_wide_chars() {
        assert_eq!(hard_wrap("你好世", 4), vec!["你好", "世"]);
    }
}
