use log::trace;

use crate::{
    ast::{Expr, Statement},
    error::{Diagnostics, ParseError},
    interpreter::{
        parser::{binary::parse_assignment, statement::parse_declaration, stream::TokenStream},
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a scanned program into its statements.
///
/// The tokens must open with `BEGIN CODE` and, as their last two tokens
/// before end of input, close with `END CODE`. Those framing tokens are
/// dropped and the body is parsed statement by statement. A statement with a
/// syntax error is reported, skipped up to the next token that can start a
/// statement, and parsing continues so that one pass reports as many errors
/// as possible.
///
/// # Parameters
/// - `tokens`: The scanner output, ending with the end-of-input token.
/// - `diagnostics`: Receives every syntax error.
///
/// # Returns
/// The statements of the program body, or `None` if any syntax error was
/// reported.
///
/// # Example
/// ```
/// use cde::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("BEGIN CODE\nDISPLAY: 1 + 2\nEND CODE", &mut diagnostics);
/// let statements = parse(&tokens, &mut diagnostics).unwrap();
///
/// assert_eq!(statements.len(), 1);
/// assert_eq!(statements[0].to_string(), "(DISPLAY (+ 1 2))");
/// ```
pub fn parse(tokens: &[Token], diagnostics: &mut Diagnostics) -> Option<Vec<Statement>> {
    let Some((eof, framed)) = tokens.split_last() else {
        diagnostics.report(ParseError::ExpectedProgramBlock { line: 1 });
        return None;
    };

    if !matches!(framed,
                 [begin, code, ..] if begin.kind == TokenKind::Begin && code.kind == TokenKind::Code)
    {
        let line = framed.first().map_or(eof.line, |token| token.line);
        diagnostics.report(ParseError::ExpectedProgramBlock { line });
        return None;
    }

    let body = &framed[2..];
    let Some(body) = closed_program_body(body) else {
        diagnostics.report(ParseError::UnterminatedProgramBlock { line: eof.line });
        return None;
    };

    let mut tokens = TokenStream::new(body, eof, diagnostics);
    let mut statements = Vec::new();

    while !tokens.is_at_end() {
        statements.extend(parse_recovering(&mut tokens));
    }

    trace!("parsed {} top-level statements with {} syntax errors",
           statements.len(),
           tokens.reported());

    if tokens.reported() > 0 {
        return None;
    }
    Some(statements)
}

/// Strips the closing `END CODE` from the tokens after `BEGIN CODE`.
fn closed_program_body(tokens: &[Token]) -> Option<&[Token]> {
    match tokens {
        [body @ .., end, code] if end.kind == TokenKind::End && code.kind == TokenKind::Code => {
            Some(body)
        },
        _ => None,
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_assignment(tokens)
}

/// Parses one statement, recovering from a syntax error.
///
/// On error the statement is reported and dropped, and the cursor is moved
/// to the next plausible statement start.
pub(in crate::interpreter::parser) fn parse_recovering(tokens: &mut TokenStream<'_>)
                                                       -> Option<Statement> {
    match parse_declaration(tokens) {
        Ok(statement) => Some(statement),
        Err(error) => {
            tokens.report(error);
            synchronize(tokens);
            None
        },
    }
}

/// Discards tokens until one that can start a statement.
///
/// Always consumes at least one token, then stops before a type keyword,
/// `IF`, `WHILE`, `DISPLAY` or `SCAN`, or at end of input.
fn synchronize(tokens: &mut TokenStream<'_>) {
    tokens.advance();

    while !tokens.is_at_end() {
        if tokens.peek().kind.starts_statement() {
            return;
        }
        tokens.advance();
    }
}
