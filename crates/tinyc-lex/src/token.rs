//! Token kinds and the [`Token`] type produced by the lexer.

use std::fmt;

/// The kind of a lexical token.
///
/// [`Display`](fmt::Display) renders the canonical listing name of the
/// kind (`Op_multiply`, `Keyword_while`, ...) and honors width and
/// alignment flags, so kinds can be laid out in fixed-width columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The end of the source text.
    EndOfInput,
    /// The `*` operator.
    OpMultiply,
    /// The `/` operator.
    OpDivide,
    /// The `%` operator.
    OpMod,
    /// The `+` operator.
    OpAdd,
    /// The `-` operator.
    OpSubtract,
    /// Unary minus. Never produced by the scanner; the parser rewrites
    /// `Op_subtract` into it from context.
    OpNegate,
    /// The `!` operator.
    OpNot,
    /// The `<` operator.
    OpLess,
    /// The `<=` operator.
    OpLessEqual,
    /// The `>` operator.
    OpGreater,
    /// The `>=` operator.
    OpGreaterEqual,
    /// The kind produced for a lone `=`.
    OpEqual,
    /// The `!=` operator.
    OpNotEqual,
    /// The kind produced for `==`.
    OpAssign,
    /// The `&&` operator.
    OpAnd,
    /// The `||` operator.
    OpOr,
    /// The `if` keyword.
    KeywordIf,
    /// The `else` keyword.
    KeywordElse,
    /// The `while` keyword.
    KeywordWhile,
    /// The `print` keyword.
    KeywordPrint,
    /// The `putc` keyword.
    KeywordPutc,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// An identifier.
    Identifier,
    /// An integer literal, including character literals reduced to
    /// their character code.
    Integer,
    /// A string literal.
    String,
}

impl TokenKind {
    /// Returns the canonical listing name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "End_of_input",
            TokenKind::OpMultiply => "Op_multiply",
            TokenKind::OpDivide => "Op_divide",
            TokenKind::OpMod => "Op_mod",
            TokenKind::OpAdd => "Op_add",
            TokenKind::OpSubtract => "Op_subtract",
            TokenKind::OpNegate => "Op_negate",
            TokenKind::OpNot => "Op_not",
            TokenKind::OpLess => "Op_less",
            TokenKind::OpLessEqual => "Op_lessequal",
            TokenKind::OpGreater => "Op_greater",
            TokenKind::OpGreaterEqual => "Op_greaterequal",
            TokenKind::OpEqual => "Op_equal",
            TokenKind::OpNotEqual => "Op_notequal",
            TokenKind::OpAssign => "Op_assign",
            TokenKind::OpAnd => "Op_and",
            TokenKind::OpOr => "Op_or",
            TokenKind::KeywordIf => "Keyword_if",
            TokenKind::KeywordElse => "Keyword_else",
            TokenKind::KeywordWhile => "Keyword_while",
            TokenKind::KeywordPrint => "Keyword_print",
            TokenKind::KeywordPutc => "Keyword_putc",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::String => "String",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Maps an identifier spelling to its keyword kind, or `None` if it is
/// not a keyword.
///
/// # Examples
///
/// ```
/// use tinyc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::KeywordWhile));
/// assert_eq!(keyword_from_ident("whilst"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    match text {
        "if" => Some(TokenKind::KeywordIf),
        "else" => Some(TokenKind::KeywordElse),
        "while" => Some(TokenKind::KeywordWhile),
        "print" => Some(TokenKind::KeywordPrint),
        "putc" => Some(TokenKind::KeywordPutc),
        _ => None,
    }
}

/// A single token with its position in the source.
///
/// `text` carries the spelling for identifiers and keywords, the
/// decimal digits for integer and character literals, and the raw body
/// for string literals. Operator and punctuation tokens have an empty
/// `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The spelling or literal value of the token.
    pub text: String,
    /// The 1-based line the token starts on.
    pub line: u32,
    /// The column the token starts at.
    pub column: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_from_ident("if"), Some(TokenKind::KeywordIf));
        assert_eq!(keyword_from_ident("else"), Some(TokenKind::KeywordElse));
        assert_eq!(keyword_from_ident("while"), Some(TokenKind::KeywordWhile));
        assert_eq!(keyword_from_ident("print"), Some(TokenKind::KeywordPrint));
        assert_eq!(keyword_from_ident("putc"), Some(TokenKind::KeywordPutc));
        assert_eq!(keyword_from_ident("printx"), None);
        assert_eq!(keyword_from_ident("If"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn test_display_uses_listing_names() {
        assert_eq!(TokenKind::EndOfInput.to_string(), "End_of_input");
        assert_eq!(TokenKind::OpLessEqual.to_string(), "Op_lessequal");
        assert_eq!(TokenKind::KeywordWhile.to_string(), "Keyword_while");
        assert_eq!(TokenKind::LeftParen.to_string(), "LeftParen");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:<15}", TokenKind::Integer), "Integer        ");
        assert_eq!(format!("{:<15}", TokenKind::Semicolon), "Semicolon      ");
        assert_eq!(format!("{:>14}", TokenKind::OpAnd), "        Op_and");
    }

    #[test]
    fn test_token_new_carries_fields() {
        let token = Token::new(TokenKind::Identifier, "count", 3, 5);
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "count");
        assert_eq!(token.line, 3);
        assert_eq!(token.column, 5);
    }
}
