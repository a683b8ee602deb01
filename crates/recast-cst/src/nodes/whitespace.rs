//! The trivia model: whitespace and comments attached to nodes.
//!
//! A [`Space`] is the trivia occurring before a token: a leading whitespace
//! run followed by zero or more comments, each comment owning the whitespace
//! that follows it. Splitting raw trivia into this structure and printing it
//! back is lossless for every legal input, including CRLF line endings,
//! multi-line and doc comments, and shebang lines.
//!
//! Trivia that cannot be split per the comment grammar (an unterminated block
//! comment, unexpected characters) is carried opaquely as a single comment
//! span so reassembly still reproduces the original bytes. Formatting passes
//! never touch whitespace that carries comments, so opaque spans survive the
//! whole pipeline byte for byte.

use recast_core::text;

/// A single comment, stored verbatim including its delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The comment text including delimiters: `// ...`, `/* ... */`,
    /// `#!...`, or an opaque unsplittable span.
    pub text: String,
    /// The whitespace that follows this comment, up to the next comment or
    /// the token the enclosing [`Space`] is attached to.
    pub suffix: String,
    /// Whether the comment body spans more than one line.
    pub multiline: bool,
}

impl Comment {
    pub fn new(text: impl Into<String>, suffix: impl Into<String>) -> Self {
        let text = text.into();
        let multiline = text.contains('\n');
        Self {
            text,
            suffix: suffix.into(),
            multiline,
        }
    }

    /// Whether this is a documentation comment (`/** ... */`).
    pub fn is_doc(&self) -> bool {
        self.text.starts_with("/**")
    }

    pub fn with_suffix(&self, suffix: impl Into<String>) -> Self {
        Self {
            text: self.text.clone(),
            suffix: suffix.into(),
            multiline: self.multiline,
        }
    }
}

/// Whitespace and comments preceding a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Space {
    /// The whitespace run before the first comment (or before the token when
    /// there are no comments). May contain newlines.
    pub whitespace: String,
    /// The comments in source order, each with its own trailing whitespace.
    pub comments: Vec<Comment>,
}

impl Space {
    /// The empty space: zero-width, no comments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single ASCII space.
    pub fn space() -> Self {
        Self {
            whitespace: " ".to_string(),
            comments: Vec::new(),
        }
    }

    pub fn new(whitespace: impl Into<String>, comments: Vec<Comment>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments,
        }
    }

    /// Split raw trivia into structured whitespace and comments.
    ///
    /// Recognized comment forms: `//` to end of line, `/* ... */` (doc
    /// comments included), and `#!` shebang lines. Anything else that is not
    /// whitespace makes the remainder of the input a single opaque comment
    /// span, so the split is lossless for malformed trivia too.
    pub fn parse(raw: &str) -> Self {
        let bytes = raw.as_bytes();
        let mut idx = 0;

        let ws_end = scan_whitespace(bytes, idx);
        let whitespace = raw[..ws_end].to_string();
        idx = ws_end;

        let mut comments = Vec::new();
        while idx < bytes.len() {
            let text_end = match scan_comment(raw, idx) {
                Some(end) => end,
                // Unsplittable: carry the rest opaquely.
                None => raw.len(),
            };
            let text = &raw[idx..text_end];
            let suffix_end = scan_whitespace(bytes, text_end);
            let suffix = &raw[text_end..suffix_end];
            comments.push(Comment::new(text, suffix));
            idx = suffix_end;
        }

        Self {
            whitespace,
            comments,
        }
    }

    /// Reassemble the original trivia bytes.
    pub fn print_into(&self, out: &mut String) {
        out.push_str(&self.whitespace);
        for comment in &self.comments {
            out.push_str(&comment.text);
            out.push_str(&comment.suffix);
        }
    }

    /// True when this space renders as zero width.
    pub fn is_empty(&self) -> bool {
        self.whitespace.is_empty() && self.comments.is_empty()
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }

    /// Newline count of the leading whitespace run. Comment bodies and
    /// suffixes are not counted; callers that need a comment's suffix count
    /// it explicitly.
    pub fn newlines(&self) -> usize {
        text::count_newlines(&self.whitespace)
    }

    /// Replace the leading whitespace run, keeping comments.
    pub fn with_whitespace(&self, whitespace: impl Into<String>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments: self.comments.clone(),
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.print_into(&mut out);
        f.write_str(&out)
    }
}

fn scan_whitespace(bytes: &[u8], start: usize) -> usize {
    let mut idx = start;
    while idx < bytes.len() {
        match bytes[idx] {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0c => idx += 1,
            _ => break,
        }
    }
    idx
}

/// The end offset of the comment starting at `start`, or `None` when the
/// input at `start` is not a recognizable comment.
fn scan_comment(raw: &str, start: usize) -> Option<usize> {
    let rest = &raw[start..];
    if rest.starts_with("//") || rest.starts_with("#!") {
        // To end of line, excluding the line terminator.
        let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
        Some(start + end)
    } else if rest.starts_with("/*") {
        // Unterminated block comments fall through to the opaque path.
        rest.find("*/").map(|end| start + end + 2)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(raw: &str) {
        let space = Space::parse(raw);
        assert_eq!(space.to_string(), raw, "lossless split failed for {raw:?}");
    }

    #[test]
    fn test_round_trip_whitespace_only() {
        round_trip("");
        round_trip("   ");
        round_trip("\n\n    ");
        round_trip("\r\n\t\r\n");
    }

    #[test]
    fn test_round_trip_line_comments() {
        round_trip(" // trailing\n    ");
        round_trip("// one\n// two\n");
        round_trip("\n  // indented comment\n  ");
    }

    #[test]
    fn test_round_trip_block_and_doc_comments() {
        round_trip("/* block */ ");
        round_trip("/**\n * doc\n */\n");
        round_trip("  /* a */ /* b */\n");
    }

    #[test]
    fn test_round_trip_shebang() {
        round_trip("#!/usr/bin/env demo\n");
    }

    #[test]
    fn test_unterminated_block_comment_is_opaque() {
        let raw = "/* never closed\nmore";
        let space = Space::parse(raw);
        assert_eq!(space.comments.len(), 1);
        assert!(space.comments[0].multiline);
        assert_eq!(space.to_string(), raw);
    }

    #[test]
    fn test_comment_structure() {
        let space = Space::parse("  // note\n    ");
        assert_eq!(space.whitespace, "  ");
        assert_eq!(space.comments.len(), 1);
        assert_eq!(space.comments[0].text, "// note");
        assert_eq!(space.comments[0].suffix, "\n    ");
        assert!(!space.comments[0].multiline);
        assert!(!space.comments[0].is_doc());
    }

    #[test]
    fn test_doc_comment_detection() {
        let space = Space::parse("/** api */\n");
        assert!(space.comments[0].is_doc());
        let space = Space::parse("/* plain */\n");
        assert!(!space.comments[0].is_doc());
    }

    #[test]
    fn test_newlines_counts_leading_run_only() {
        let space = Space::parse("\n\n// c\n\n\n");
        assert_eq!(space.newlines(), 2);
    }
}
