use log::trace;
use logos::{Lexer, Logos};

use crate::{
    ast::LiteralValue,
    error::{Diagnostics, LexError},
    interpreter::token::{Token, TokenKind, keyword},
};

/// Raw lexical units recognized by the `logos` scanner.
///
/// Words are not split into keywords and identifiers here; [`scan`] looks
/// them up in the keyword table when it builds the final [`Token`]s.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum RawToken {
    /// Identifiers and reserved words.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Float literal tokens, such as `3.14`. A trailing `.` is not part of
    /// the number.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),
    /// `"..."`
    #[regex(r#""[^"]*""#, quoted_text, allow_greedy = true)]
    Str(String),
    /// `"...` reaching the end of input.
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    UnterminatedStr,
    /// `[...]`, taken verbatim.
    #[regex(r"\[[^\]]*\]", quoted_text, allow_greedy = true)]
    Escape(String),
    /// `[...` reaching the end of input.
    #[regex(r"\[[^\]]*", unterminated_escape, allow_greedy = true)]
    UnterminatedEscape,
    /// `'c'`
    #[regex(r"'[^']'", char_literal)]
    Char(char),
    /// `''`
    #[token("''", empty_char)]
    EmptyChar,
    /// `'c` without its closing quote.
    #[regex(r"'[^']?", unterminated_char)]
    UnterminatedChar,
    /// `$`, shorthand for a newline string.
    #[token("$")]
    Dollar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for tokens and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

fn count_newlines(text: &str) -> usize {
    text.chars().filter(|&c| c == '\n').count()
}

fn parse_integer(lex: &Lexer<RawToken>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::IntegerTooLarge)
}

/// Strips the delimiters of a `"..."` or `[...]` literal.
fn quoted_text(lex: &mut Lexer<RawToken>) -> String {
    let slice = lex.slice();
    lex.extras.line += count_newlines(slice);
    slice[1..slice.len() - 1].to_string()
}

fn unterminated_string(lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    lex.extras.line += count_newlines(lex.slice());
    Err(LexError::UnterminatedString)
}

fn unterminated_escape(lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    lex.extras.line += count_newlines(lex.slice());
    Err(LexError::UnterminatedEscape)
}

fn char_literal(lex: &mut Lexer<RawToken>) -> Result<char, LexError> {
    let slice = lex.slice();
    lex.extras.line += count_newlines(slice);
    slice.chars().nth(1).ok_or(LexError::UnterminatedChar)
}

fn empty_char(_: &mut Lexer<RawToken>) -> Result<(), LexError> {
    Err(LexError::EmptyChar)
}

fn unterminated_char(lex: &mut Lexer<RawToken>) -> Result<(), LexError> {
    lex.extras.line += count_newlines(lex.slice());
    Err(LexError::UnterminatedChar)
}

/// Builds the final token for a raw unit scanned from `lexeme`.
///
/// Words are looked up in the keyword table. A quoted string whose contents
/// are exactly `TRUE` or `FALSE` becomes a boolean literal rather than a
/// string.
fn into_token(raw: RawToken, lexeme: &str, line: usize) -> Option<Token> {
    let literal = |kind, value| Some(Token::literal(kind, lexeme, value, line));
    let plain = |kind| Some(Token::new(kind, lexeme, line));

    match raw {
        RawToken::Word(word) => match keyword(&word) {
            Some(TokenKind::True) => literal(TokenKind::True, LiteralValue::Bool(true)),
            Some(TokenKind::False) => literal(TokenKind::False, LiteralValue::Bool(false)),
            Some(TokenKind::Nil) => literal(TokenKind::Nil, LiteralValue::Nil),
            Some(kind) => plain(kind),
            None => plain(TokenKind::Identifier),
        },
        RawToken::Integer(n) => literal(TokenKind::IntegerLiteral, LiteralValue::Integer(n)),
        RawToken::Float(x) => literal(TokenKind::FloatLiteral, LiteralValue::Float(x)),
        RawToken::Str(text) => match text.as_str() {
            "TRUE" => literal(TokenKind::True, LiteralValue::Bool(true)),
            "FALSE" => literal(TokenKind::False, LiteralValue::Bool(false)),
            _ => literal(TokenKind::StringLiteral, LiteralValue::Str(text)),
        },
        RawToken::Escape(text) => literal(TokenKind::StringLiteral, LiteralValue::Str(text)),
        RawToken::Char(c) => literal(TokenKind::CharLiteral, LiteralValue::Char(c)),
        RawToken::Dollar => literal(TokenKind::StringLiteral, LiteralValue::Str("\n".into())),
        RawToken::Plus => plain(TokenKind::Plus),
        RawToken::Minus => plain(TokenKind::Minus),
        RawToken::Star => plain(TokenKind::Star),
        RawToken::Slash => plain(TokenKind::Slash),
        RawToken::Percent => plain(TokenKind::Percent),
        RawToken::Ampersand => plain(TokenKind::Ampersand),
        RawToken::LParen => plain(TokenKind::LParen),
        RawToken::RParen => plain(TokenKind::RParen),
        RawToken::Comma => plain(TokenKind::Comma),
        RawToken::Colon => plain(TokenKind::Colon),
        RawToken::Assign => plain(TokenKind::Assign),
        RawToken::EqualEqual => plain(TokenKind::EqualEqual),
        RawToken::NotEqual => plain(TokenKind::NotEqual),
        RawToken::Less => plain(TokenKind::Less),
        RawToken::LessEqual => plain(TokenKind::LessEqual),
        RawToken::Greater => plain(TokenKind::Greater),
        RawToken::GreaterEqual => plain(TokenKind::GreaterEqual),
        // Error and skip rules never yield a token.
        RawToken::UnterminatedStr
        | RawToken::UnterminatedEscape
        | RawToken::EmptyChar
        | RawToken::UnterminatedChar
        | RawToken::Comment
        | RawToken::NewLine
        | RawToken::Ignored => None,
    }
}

/// Scans source text into tokens.
///
/// The returned sequence always ends with a [`TokenKind::Eof`] token. Input
/// that cannot be scanned is recorded in `diagnostics` as a lexical error and
/// skipped, so a single pass reports every lexical error in the source.
///
/// # Parameters
/// - `source`: The program text.
/// - `diagnostics`: Receives lexical errors.
///
/// # Returns
/// The scanned tokens, in source order.
///
/// # Example
/// ```
/// use cde::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, token::TokenKind},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("INT x = 4 # four", &mut diagnostics);
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Int,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::IntegerLiteral,
///             TokenKind::Eof]);
/// assert!(diagnostics.is_empty());
/// ```
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let lexeme = lexer.slice();

        match result {
            Ok(raw) => tokens.extend(into_token(raw, lexeme, line)),
            Err(LexError::Unrecognized) => {
                let found = lexeme.chars().next().unwrap_or_default();
                diagnostics.report_lexical(LexError::UnexpectedCharacter(found), line);
            },
            Err(error) => diagnostics.report_lexical(error, line),
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    trace!("scanned {} tokens over {} lines", tokens.len(), lexer.extras.line);
    tokens
}
