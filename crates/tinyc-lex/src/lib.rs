//! tinyc-lex - Lexical Analyzer for the Tiny-C Language
//!
//! This crate provides the lexer (tokenizer) for Tiny-C, a small C-like
//! teaching language. It transforms source text into a stream of
//! position-tagged tokens for the listing tooling and the parser.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation. The scanner
//! walks the source one character at a time, skipping whitespace and
//! comments, and groups what remains into tokens. Every token records
//! the line and column it started at, and scan failures are reported
//! as [`LexError`] values rather than by aborting.
//!
//! # Example Usage
//!
//! ```
//! use tinyc_lex::{tokenize, Lexer, TokenKind};
//!
//! let source = "while (count < 10) { count = count + 1; }";
//!
//! // One token at a time
//! let mut lexer = Lexer::new(source);
//! let first = lexer.next_token()?;
//! assert_eq!(first.kind, TokenKind::KeywordWhile);
//!
//! // Or the whole source at once
//! let tokens = tokenize(source)?;
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
//! # Ok::<(), tinyc_lex::LexError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the token type
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `while`, `print`, `putc`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007`
//! - **Character**: `'A'`, scanned into an integer token holding the
//!   character code
//! - **String**: `"hello\n"`, taken verbatim with no escape processing
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `<`, `>`, `<=`, `>=`, `=`, `!=`, `==`
//! - **Logical**: `&&`, `||`, `!`
//!
//! ## Symbols
//!
//! `(`, `)`, `{`, `}`, `;`, `,`
//!
//! ## Special
//!
//! - **End_of_input**: end of source marker, always the last token

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, LexError, Lexer};
pub use token::{keyword_from_ident, Token, TokenKind};
