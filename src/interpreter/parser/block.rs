use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_recovering},
            stream::TokenStream,
        },
        token::TokenKind,
    },
};

/// Parses a delimited statement block such as `BEGIN IF ... END IF`.
///
/// Both delimiters are two tokens: `BEGIN` or `END`, followed by the keyword
/// naming the block. Statements inside the block recover from syntax errors
/// the same way top-level statements do, so one bad line does not discard
/// the rest of the block.
///
/// Grammar: `block := "BEGIN" KIND statement* "END" KIND`
///
/// # Parameters
/// - `tokens`: Token cursor positioned at `BEGIN`.
/// - `kind`: The keyword naming the block, `TokenKind::If` or
///   `TokenKind::While`.
/// - `name`: That keyword as written, for error messages.
///
/// # Returns
/// The statements of the block that parsed successfully.
///
/// # Errors
/// - `ParseError::UnexpectedToken` if the block does not open with
///   `BEGIN <name>`.
/// - `ParseError::UnterminatedBlock` if input runs out, or an `END` is not
///   followed by `<name>`.
pub fn parse_block(tokens: &mut TokenStream<'_>,
                   kind: TokenKind,
                   name: &'static str)
                   -> ParseResult<Vec<Statement>> {
    let opening = format!("'BEGIN {name}'");
    tokens.consume(TokenKind::Begin, &opening)?;
    tokens.consume(kind, &opening)?;

    let mut statements = Vec::new();
    while !tokens.check(TokenKind::End) && !tokens.is_at_end() {
        statements.extend(parse_recovering(tokens));
    }

    for closing in [TokenKind::End, kind] {
        if tokens.matches(&[closing]).is_none() {
            return Err(ParseError::UnterminatedBlock { block: name,
                                                       line:  tokens.peek().line, });
        }
    }

    Ok(statements)
}
