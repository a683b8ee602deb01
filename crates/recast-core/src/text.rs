//! Text utilities for whitespace runs.
//!
//! These helpers operate on *pure whitespace* strings only. Comment bodies are
//! treated as opaque spans by every caller; indexing stays inside whitespace
//! runs so multi-byte characters in adjacent comment text can never corrupt
//! offsets.

use memchr::memchr_iter;

/// Count the newline characters in a whitespace run.
///
/// CRLF sequences count as a single newline, since `\r\n` is one line
/// terminator in source text.
pub fn count_newlines(whitespace: &str) -> usize {
    memchr_iter(b'\n', whitespace.as_bytes()).count()
}

/// The indentation of the last line of a whitespace run: everything after the
/// final newline, or the entire run if it contains no newline.
pub fn last_line_indent(whitespace: &str) -> &str {
    match whitespace.rfind('\n') {
        Some(idx) => &whitespace[idx + 1..],
        None => whitespace,
    }
}

/// Returns true if the run contains only spaces and tabs (no line breaks).
pub fn is_single_line(whitespace: &str) -> bool {
    !whitespace.contains('\n') && !whitespace.contains('\r')
}

/// Rebuild a whitespace run with exactly `newlines` line breaks, preserving
/// the indentation of its last line. Uses `\r\n` terminators when the
/// original run used them.
pub fn with_newline_count(whitespace: &str, newlines: usize) -> String {
    let terminator = if whitespace.contains("\r\n") { "\r\n" } else { "\n" };
    let mut out = String::with_capacity(newlines * terminator.len() + whitespace.len());
    for _ in 0..newlines {
        out.push_str(terminator);
    }
    out.push_str(last_line_indent(whitespace));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_newlines() {
        assert_eq!(count_newlines(""), 0);
        assert_eq!(count_newlines("   "), 0);
        assert_eq!(count_newlines("\n"), 1);
        assert_eq!(count_newlines("\n\n    "), 2);
        assert_eq!(count_newlines("\r\n\r\n"), 2);
    }

    #[test]
    fn test_last_line_indent() {
        assert_eq!(last_line_indent("\n    "), "    ");
        assert_eq!(last_line_indent("  "), "  ");
        assert_eq!(last_line_indent("\n\n\t"), "\t");
        assert_eq!(last_line_indent("\n"), "");
    }

    #[test]
    fn test_with_newline_count_preserves_indent() {
        assert_eq!(with_newline_count("\n\n\n    ", 1), "\n    ");
        assert_eq!(with_newline_count("    ", 2), "\n\n    ");
        assert_eq!(with_newline_count("\r\n  ", 3), "\r\n\r\n\r\n  ");
    }

    #[test]
    fn test_is_single_line() {
        assert!(is_single_line(" \t "));
        assert!(!is_single_line(" \n"));
        assert!(!is_single_line("\r"));
    }
}
