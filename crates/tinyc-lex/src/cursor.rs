//! Character-level cursor over source text.
//!
//! The cursor walks the source one character at a time and keeps the
//! line and column bookkeeping that token positions and error messages
//! are built from. Lines are 1-based. Columns count characters consumed
//! since the last newline, so the character at the very start of the
//! source sits at column 0 and the first character after a newline sits
//! at column 1.

/// A cursor over source text with line and column tracking.
///
/// Past the end of the source the cursor reports the NUL sentinel
/// (`'\0'`) and further calls to [`advance`](Cursor::advance) do
/// nothing.
///
/// # Examples
///
/// ```
/// use tinyc_lex::cursor::Cursor;
///
/// let cursor = Cursor::new("count = 1;");
/// assert_eq!(cursor.current_char(), 'c');
/// assert_eq!(cursor.line(), 1);
/// assert_eq!(cursor.column(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    position: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    /// Creates a cursor positioned at the start of `source`.
    ///
    /// The newline rule is applied immediately: a source that begins
    /// with `'\n'` starts out on line 2, column 0.
    pub fn new(source: &str) -> Self {
        let mut cursor = Cursor {
            source: source.to_string(),
            position: 0,
            line: 1,
            column: 0,
        };
        cursor.note_newline();
        cursor
    }

    /// Returns the character under the cursor, or `'\0'` at the end of
    /// the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    pub fn current_char(&self) -> char {
        let bytes = self.source.as_bytes();
        if self.position < bytes.len() {
            let byte = bytes[self.position];
            if byte < 0x80 {
                return byte as char;
            }
            // Multi-byte UTF-8 sequence
            return self.source[self.position..]
                .chars()
                .next()
                .unwrap_or('\0');
        }
        '\0'
    }

    /// Moves the cursor one character forward.
    ///
    /// The column advances with the cursor; landing on a newline bumps
    /// the line counter and resets the column to 0. At the end of the
    /// source this is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab\ncd");
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), 'b');
    /// assert_eq!(cursor.column(), 1);
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 0);
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), 'c');
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        let byte = self.source.as_bytes()[self.position];
        if byte < 0x80 {
            self.position += 1;
        } else {
            self.position += self.current_char().len_utf8();
        }
        self.column += 1;
        self.note_newline();
    }

    fn note_newline(&mut self) {
        if self.current_char() == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("!=");
    /// cursor.advance();
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    ///
    /// let mut cursor = Cursor::new("<3");
    /// cursor.advance();
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '3');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips past whitespace, leaving the cursor on the first
    /// non-whitespace character.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("   if");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'i');
    /// assert_eq!(cursor.column(), 3);
    /// ```
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    /// Returns the byte offset of the cursor within the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the 1-based line number of the cursor.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the cursor within the current line.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` once the cursor has passed the last character.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the source text between `start` and the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while (");
    /// let start = cursor.position();
    /// while cursor.current_char().is_alphabetic() {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_starts_at_line_one() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_empty_source_is_at_end() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn test_advance_moves_column() {
        let mut cursor = Cursor::new("xyz");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'y');
        assert_eq!(cursor.column(), 1);
        cursor.advance();
        assert_eq!(cursor.current_char(), 'z');
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_landing_on_newline_resets_column() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_char(), '\n');
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 0);
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_leading_newline_counts_immediately() {
        let cursor = Cursor::new("\nx");
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert!(cursor.is_at_end());
        let column = cursor.column();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.column(), column);
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_match_char_consumes_on_match() {
        let mut cursor = Cursor::new("==");
        assert!(cursor.match_char('='));
        assert_eq!(cursor.current_char(), '=');
        assert!(cursor.match_char('='));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_match_char_leaves_mismatch_in_place() {
        let mut cursor = Cursor::new("<5");
        cursor.advance();
        assert!(!cursor.match_char('='));
        assert_eq!(cursor.current_char(), '5');
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_skip_whitespace_spans_lines() {
        let mut cursor = Cursor::new("  \t\n  if");
        cursor.skip_whitespace();
        assert_eq!(cursor.current_char(), 'i');
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_skip_whitespace_stops_at_end() {
        let mut cursor = Cursor::new("   ");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_slice_from_covers_consumed_text() {
        let mut cursor = Cursor::new("count = 1");
        let start = cursor.position();
        while cursor.current_char().is_alphabetic() {
            cursor.advance();
        }
        assert_eq!(cursor.slice_from(start), "count");
    }

    #[test]
    fn test_multibyte_characters_advance_by_one_column() {
        let mut cursor = Cursor::new("é!");
        assert_eq!(cursor.current_char(), 'é');
        cursor.advance();
        assert_eq!(cursor.current_char(), '!');
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.position(), 2);
    }
}
