//! Line tokenizer.
//!
//! `Cursor` is an index-based scanner over the borrowed input line. Tokens
//! are slices of that line, clipped to the configured capacity; the cursor
//! always advances past the full untruncated source text, so clipping one
//! token never shifts the boundaries of the tokens after it.
//!
//! Only the ASCII space separates tokens. Double quotes delimit string
//! values; there are no escape sequences, so a literal `"` cannot occur
//! inside a quoted value.

/// Scan position over one input line.
pub struct Cursor<'t> {
    line: &'t str,
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub fn new(line: &'t str) -> Self {
        Self { line, pos: 0 }
    }

    /// True once the whole line has been consumed.
    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    #[inline(always)]
    fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    /// Advances over consecutive ASCII spaces.
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    /// Scans an unquoted token: everything up to the next space or end of
    /// line. The returned slice holds at most `limit` bytes; the scan
    /// still consumes the full source token.
    pub fn bare_token(&mut self, limit: usize) -> &'t str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b' ' {
                break;
            }
            self.pos += 1;
        }
        clip(&self.line[start..self.pos], limit)
    }

    /// Scans a string-value token. A leading `"` starts a quoted token
    /// running to the closing quote or end of line (an unterminated quote
    /// is treated as closed at end of line; not an error). Anything else
    /// is a bare token.
    pub fn value_token(&mut self, limit: usize) -> &'t str {
        if self.peek() != Some(b'"') {
            return self.bare_token(limit);
        }
        self.pos += 1;
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'"' {
                break;
            }
            self.pos += 1;
        }
        let token = clip(&self.line[start..self.pos], limit);
        if self.peek() == Some(b'"') {
            self.pos += 1;
        }
        token
    }
}

/// Clips `s` to at most `limit` bytes without splitting a UTF-8 character.
fn clip(s: &str, limit: usize) -> &str {
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod cursor_tests {
    use super::*;

    const NO_LIMIT: usize = usize::MAX;

    #[test]
    fn test_bare_tokens_split_on_spaces() {
        let mut cur = Cursor::new("alpha  beta gamma");
        assert_eq!(cur.bare_token(NO_LIMIT), "alpha");
        cur.skip_spaces();
        assert_eq!(cur.bare_token(NO_LIMIT), "beta");
        cur.skip_spaces();
        assert_eq!(cur.bare_token(NO_LIMIT), "gamma");
        assert!(cur.at_end());
    }

    #[test]
    fn test_bare_token_empty_at_end_of_line() {
        let mut cur = Cursor::new("");
        assert_eq!(cur.bare_token(NO_LIMIT), "");
        assert!(cur.at_end());
    }

    #[test]
    fn test_clipped_token_still_advances_past_source() {
        let mut cur = Cursor::new("abcdefghij next");
        assert_eq!(cur.bare_token(4), "abcd");
        cur.skip_spaces();
        // Clipping must not desynchronize the following token.
        assert_eq!(cur.bare_token(NO_LIMIT), "next");
    }

    #[test]
    fn test_quoted_token_consumes_both_quotes() {
        let mut cur = Cursor::new("\"hello world\" tail");
        assert_eq!(cur.value_token(NO_LIMIT), "hello world");
        cur.skip_spaces();
        assert_eq!(cur.bare_token(NO_LIMIT), "tail");
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        let mut cur = Cursor::new("\"no closing quote");
        assert_eq!(cur.value_token(NO_LIMIT), "no closing quote");
        assert!(cur.at_end());
    }

    #[test]
    fn test_value_token_without_quote_is_bare() {
        let mut cur = Cursor::new("plain rest");
        assert_eq!(cur.value_token(NO_LIMIT), "plain");
    }

    #[test]
    fn test_quoted_token_is_clipped_but_scanned_fully() {
        let mut cur = Cursor::new("\"abcdefghij\" tail");
        assert_eq!(cur.value_token(4), "abcd");
        cur.skip_spaces();
        assert_eq!(cur.bare_token(NO_LIMIT), "tail");
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        // 'é' is two bytes; a 3-byte limit must not split it.
        assert_eq!(clip("aéz", 3), "aé");
        assert_eq!(clip("aéz", 2), "a");
    }

    #[test]
    fn test_only_ascii_space_separates() {
        let mut cur = Cursor::new("a\tb");
        assert_eq!(cur.bare_token(NO_LIMIT), "a\tb");
    }
}
