//! The scanner that turns Tiny-C source text into tokens.
//!
//! [`Lexer`] produces one token per call to [`Lexer::next_token`],
//! skipping whitespace and comments between tokens. The convenience
//! function [`tokenize`] collects a whole source into a vector ending
//! with the end-of-input token.

use thiserror::Error;

use crate::cursor::Cursor;
use crate::token::{keyword_from_ident, Token, TokenKind};

/// Errors produced during scanning.
///
/// Every variant carries the line and column where the offending token
/// began, and renders them in the trailing `in line <l>, pos <c>` form
/// used by the listing tooling.
///
/// ```
/// use tinyc_lex::tokenize;
///
/// let err = tokenize("a & b").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "unrecognized character: (32) ' ' in line 1, pos 2"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A lone `&` or `|`, reported with the character that broke the
    /// pair and its numeric code.
    #[error("unrecognized character: ({code}) '{ch}' in line {line}, pos {column}")]
    UnrecognizedCharacter {
        /// The character that failed to complete the operator.
        ch: char,
        /// Numeric code of that character.
        code: u32,
        /// Line the operator started on.
        line: u32,
        /// Column the operator started at.
        column: u32,
    },
    /// The source ended inside a string literal.
    #[error("end-of-input in string literal in line {line}, pos {column}")]
    UnterminatedString {
        /// Line the literal started on.
        line: u32,
        /// Column the literal started at.
        column: u32,
    },
    /// The source ended where a character literal's character should be.
    #[error("end-of-input in character literal in line {line}, pos {column}")]
    UnterminatedChar {
        /// Line the literal started on.
        line: u32,
        /// Column the literal started at.
        column: u32,
    },
    /// The source ended inside a block comment.
    #[error("end-of-input in comment in line {line}, pos {column}")]
    UnterminatedComment {
        /// Line the comment started on.
        line: u32,
        /// Column the comment started at.
        column: u32,
    },
}

/// The Tiny-C scanner.
///
/// # Examples
///
/// ```
/// use tinyc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("while (n < 10)");
/// let token = lexer.next_token()?;
/// assert_eq!(token.kind, TokenKind::KeywordWhile);
/// assert_eq!(token.text, "while");
/// # Ok::<(), tinyc_lex::LexError>(())
/// ```
#[derive(Debug)]
pub struct Lexer {
    cursor: Cursor,
    done: bool,
}

impl Lexer {
    /// Creates a lexer over `source`.
    pub fn new(source: &str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            done: false,
        }
    }

    /// Scans the next token.
    ///
    /// At the end of the source this returns the
    /// [`TokenKind::EndOfInput`] token; calling it again keeps
    /// returning that token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.cursor.skip_whitespace();
            let line = self.cursor.line();
            let column = self.cursor.column();
            match self.cursor.current_char() {
                '\0' => return Ok(Token::new(TokenKind::EndOfInput, "", line, column)),
                '/' => {
                    if let Some(token) = self.lex_slash(line, column)? {
                        return Ok(token);
                    }
                    // comment skipped, scan again
                }
                '"' => return self.lex_string(line, column),
                '\'' => return self.lex_char_literal(line, column),
                '=' => {
                    return self.follow('=', TokenKind::OpAssign, Some(TokenKind::OpEqual), line, column)
                }
                '*' => return Ok(self.lex_single(TokenKind::OpMultiply, line, column)),
                '%' => return Ok(self.lex_single(TokenKind::OpMod, line, column)),
                '+' => return Ok(self.lex_single(TokenKind::OpAdd, line, column)),
                '-' => return Ok(self.lex_single(TokenKind::OpSubtract, line, column)),
                '&' => return self.follow('&', TokenKind::OpAnd, None, line, column),
                '|' => return self.follow('|', TokenKind::OpOr, None, line, column),
                '!' => {
                    return self.follow('=', TokenKind::OpNotEqual, Some(TokenKind::OpNot), line, column)
                }
                '<' => {
                    return self.follow('=', TokenKind::OpLessEqual, Some(TokenKind::OpLess), line, column)
                }
                '>' => {
                    return self.follow(
                        '=',
                        TokenKind::OpGreaterEqual,
                        Some(TokenKind::OpGreater),
                        line,
                        column,
                    )
                }
                '(' => return Ok(self.lex_single(TokenKind::LeftParen, line, column)),
                ')' => return Ok(self.lex_single(TokenKind::RightParen, line, column)),
                '{' => return Ok(self.lex_single(TokenKind::LeftBrace, line, column)),
                '}' => return Ok(self.lex_single(TokenKind::RightBrace, line, column)),
                ';' => return Ok(self.lex_single(TokenKind::Semicolon, line, column)),
                ',' => return Ok(self.lex_single(TokenKind::Comma, line, column)),
                _ => return Ok(self.lex_identifier_or_integer(line, column)),
            }
        }
    }

    /// Division, or a comment to skip. `Ok(None)` means a comment was
    /// consumed and scanning should continue.
    fn lex_slash(&mut self, line: u32, column: u32) -> Result<Option<Token>, LexError> {
        self.cursor.advance();
        match self.cursor.current_char() {
            '/' => {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
                Ok(None)
            }
            '*' => {
                self.skip_block_comment(line, column)?;
                Ok(None)
            }
            _ => Ok(Some(Token::new(TokenKind::OpDivide, "", line, column))),
        }
    }

    /// Skips a block comment. The scan steps in character pairs: each
    /// `*` found is followed by exactly one closing check, so `/***/`
    /// does not terminate while `/*/ */` does.
    fn skip_block_comment(&mut self, line: u32, column: u32) -> Result<(), LexError> {
        loop {
            self.cursor.advance();
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedComment { line, column });
            }
            if self.cursor.current_char() == '*' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(LexError::UnterminatedComment { line, column });
                }
                if self.cursor.current_char() == '/' {
                    self.cursor.advance();
                    return Ok(());
                }
            }
        }
    }

    /// A string literal. The body is taken verbatim, escape sequences
    /// included, until the next `"`.
    fn lex_string(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let mut text = String::new();
        loop {
            self.cursor.advance();
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString { line, column });
            }
            let c = self.cursor.current_char();
            if c == '"' {
                break;
            }
            text.push(c);
        }
        self.cursor.advance();
        Ok(Token::new(TokenKind::String, text, line, column))
    }

    /// A character literal, reduced to an integer token holding the
    /// character code. The closing quote is assumed, not checked.
    fn lex_char_literal(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        self.cursor.advance();
        if self.cursor.is_at_end() {
            return Err(LexError::UnterminatedChar { line, column });
        }
        let code = self.cursor.current_char() as u32;
        self.cursor.advance();
        self.cursor.advance();
        Ok(Token::new(TokenKind::Integer, code.to_string(), line, column))
    }

    /// Two-character operator lookahead. `unmatched` of `None` marks a
    /// lead character that is invalid on its own.
    fn follow(
        &mut self,
        expected: char,
        matched: TokenKind,
        unmatched: Option<TokenKind>,
        line: u32,
        column: u32,
    ) -> Result<Token, LexError> {
        self.cursor.advance();
        if self.cursor.match_char(expected) {
            return Ok(Token::new(matched, "", line, column));
        }
        match unmatched {
            Some(kind) => Ok(Token::new(kind, "", line, column)),
            None => {
                let ch = self.cursor.current_char();
                Err(LexError::UnrecognizedCharacter {
                    ch,
                    code: ch as u32,
                    line,
                    column,
                })
            }
        }
    }

    fn lex_single(&mut self, kind: TokenKind, line: u32, column: u32) -> Token {
        self.cursor.advance();
        Token::new(kind, "", line, column)
    }

    fn lex_identifier_or_integer(&mut self, line: u32, column: u32) -> Token {
        let start = self.cursor.position();
        let first = self.cursor.current_char();

        if first.is_ascii_digit() {
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            let text = self.cursor.slice_from(start).to_string();
            return Token::new(TokenKind::Integer, text, line, column);
        }

        if is_identifier_start(first) {
            self.cursor.advance();
            while is_identifier_continue(self.cursor.current_char()) {
                self.cursor.advance();
            }
            let text = self.cursor.slice_from(start).to_string();
            let kind = keyword_from_ident(&text).unwrap_or(TokenKind::Identifier);
            return Token::new(kind, text, line, column);
        }

        // Anything else is consumed as an identifier with no spelling.
        self.cursor.advance();
        Token::new(TokenKind::Identifier, "", line, column)
    }
}

/// An underscore may begin an identifier but, unlike letters and
/// digits, may not continue one. `a_b` scans as `a` followed by `_b`.
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Letters are any Unicode alphabetic; digits are ASCII only. A
/// non-ASCII decimal digit neither starts nor continues a token.
fn is_identifier_continue(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// Tokens are produced in source order, ending with `None` once the
/// end of the input is reached. The end-of-input token itself is not
/// yielded. After an error the iterator is fused.
///
/// ```
/// use tinyc_lex::Lexer;
///
/// let texts: Vec<String> = Lexer::new("a b c")
///     .map(|t| t.map(|t| t.text))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(texts, ["a", "b", "c"]);
/// # Ok::<(), tinyc_lex::LexError>(())
/// ```
impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Scans all of `source`, including the final end-of-input token.
///
/// # Examples
///
/// ```
/// use tinyc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("count = 1;")?;
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::OpEqual,
///         TokenKind::Integer,
///         TokenKind::Semicolon,
///         TokenKind::EndOfInput,
///     ]
/// );
/// # Ok::<(), tinyc_lex::LexError>(())
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let is_eof = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}
