use crate::interpreter::{
    parser::{core::ParseResult, stream::TokenStream},
    token::{Token, TokenKind},
};

/// Parses a non-empty comma-separated list of items.
///
/// Shared by declaration lines and `SCAN` target lists. The list ends at the
/// first item that is not followed by a comma; the token after it is left
/// for the caller.
///
/// Grammar: `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token cursor positioned at the first item.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// The parsed items, in source order.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream<'_>,
    mut parse_item: impl FnMut(&mut TokenStream<'_>) -> ParseResult<T>)
    -> ParseResult<Vec<T>> {
    let mut items = vec![parse_item(tokens)?];
    while tokens.matches(&[TokenKind::Comma]).is_some() {
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}

/// Parses a variable name and returns its token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the next token is not an
/// identifier. Reserved words such as `TRUE` never scan as identifiers, so
/// they are rejected here too.
pub(in crate::interpreter::parser) fn parse_identifier<'a>(tokens: &mut TokenStream<'a>)
                                                           -> ParseResult<&'a Token> {
    tokens.consume(TokenKind::Identifier, "variable name")
}
