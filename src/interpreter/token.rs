use crate::ast::{DeclaredType, LiteralValue};

/// The closed set of token categories.
///
/// Block delimiters are written as two tokens: `BEGIN CODE`, `END IF`,
/// `BEGIN WHILE` and so on are a [`TokenKind::Begin`] or [`TokenKind::End`]
/// followed by the keyword naming the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `BEGIN`
    Begin,
    /// `END`
    End,
    /// `CODE`
    Code,
    /// `IF`
    If,
    /// `ELSE`
    Else,
    /// `WHILE`
    While,
    /// `DISPLAY`
    Display,
    /// `SCAN`
    Scan,
    /// `INT`
    Int,
    /// `FLOAT`
    Float,
    /// `CHAR`
    Char,
    /// `BOOL`
    Bool,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `&`
    Ampersand,
    /// `=`
    Assign,
    /// `==`
    EqualEqual,
    /// `<>`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NOT`
    Not,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// Integer literal, such as `42`.
    IntegerLiteral,
    /// Float literal, such as `4.2`.
    FloatLiteral,
    /// Char literal, such as `'c'`.
    CharLiteral,
    /// String literal: `"..."`, `[...]` or `$`.
    StringLiteral,
    /// `TRUE` or `"TRUE"`
    True,
    /// `FALSE` or `"FALSE"`
    False,
    /// `NIL`
    Nil,
    /// Variable names.
    Identifier,
    /// End of input. Always the last token.
    Eof,
}

impl TokenKind {
    /// Maps a type keyword to the type it declares.
    #[must_use]
    pub const fn declared_type(self) -> Option<DeclaredType> {
        match self {
            Self::Int => Some(DeclaredType::Int),
            Self::Float => Some(DeclaredType::Float),
            Self::Char => Some(DeclaredType::Char),
            Self::Bool => Some(DeclaredType::Bool),
            _ => None,
        }
    }

    /// Whether a statement can begin with this token kind.
    ///
    /// The parser skips ahead to one of these after a syntax error.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Int
                 | Self::Float
                 | Self::Char
                 | Self::Bool
                 | Self::If
                 | Self::While
                 | Self::Display
                 | Self::Scan)
    }
}

/// Looks a word up in the reserved keyword table.
///
/// Returns `None` for words that are plain identifiers.
#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "BEGIN" => TokenKind::Begin,
        "END" => TokenKind::End,
        "CODE" => TokenKind::Code,
        "IF" => TokenKind::If,
        "ELSE" => TokenKind::Else,
        "WHILE" => TokenKind::While,
        "DISPLAY" => TokenKind::Display,
        "SCAN" => TokenKind::Scan,
        "INT" => TokenKind::Int,
        "FLOAT" => TokenKind::Float,
        "CHAR" => TokenKind::Char,
        "BOOL" => TokenKind::Bool,
        "AND" => TokenKind::And,
        "OR" => TokenKind::Or,
        "NOT" => TokenKind::Not,
        "TRUE" => TokenKind::True,
        "FALSE" => TokenKind::False,
        "NIL" => TokenKind::Nil,
        _ => return None,
    };
    Some(kind)
}

/// A scanned token.
///
/// Tokens are created once by the scanner and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token category.
    pub kind:    TokenKind,
    /// The exact source text the token was scanned from.
    pub lexeme:  String,
    /// The decoded value of literal tokens.
    pub literal: Option<LiteralValue>,
    /// The source line the token ends on.
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal value.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.to_string(),
               literal: None,
               line }
    }

    /// Creates a literal token.
    #[must_use]
    pub fn literal(kind: TokenKind, lexeme: &str, value: LiteralValue, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.to_string(),
               literal: Some(value),
               line }
    }

    /// Creates the end-of-input marker.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// Describes the token for error messages: `'lexeme'`, or `end of input`.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("'{}'", self.lexeme)
        }
    }
}
