use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            stream::TokenStream,
        },
        token::TokenKind,
    },
};

/// Parses prefix operators.
///
/// `NOT` and unary `-` nest to any depth: `NOT NOT x`, `- -1`.
///
/// The rule is: `unary := ("NOT" | "-") unary | primary`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An `Expr::Unary`, or a primary expression.
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.peek();
    let op = match token.kind {
        TokenKind::Not => UnaryOperator::Not,
        TokenKind::Minus => UnaryOperator::Negate,
        _ => return parse_primary(tokens),
    };

    tokens.advance();
    let expr = parse_unary(tokens)?;
    Ok(Expr::Unary { op,
                     expr: Box::new(expr),
                     line: token.line })
}

/// Parses literals, variable references and parenthesized expressions.
///
/// The rule is: `primary := literal | IDENTIFIER | "(" expression ")"`
///
/// # Errors
/// - `ParseError::ExpectedExpression` when the next token cannot start an
///   expression. The token is left for error recovery to skip.
/// - `ParseError::UnexpectedToken` when a group is not closed.
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.peek();
    match token.kind {
        TokenKind::IntegerLiteral
        | TokenKind::FloatLiteral
        | TokenKind::CharLiteral
        | TokenKind::StringLiteral
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Nil => {
            tokens.advance();
            let value = token.literal.clone().unwrap_or(LiteralValue::Nil);
            Ok(Expr::Literal { value,
                               line: token.line })
        },
        TokenKind::Identifier => {
            tokens.advance();
            Ok(Expr::Variable { name: token.lexeme.clone(),
                                line: token.line })
        },
        TokenKind::LParen => {
            tokens.advance();
            let expr = parse_expression(tokens)?;
            tokens.consume(TokenKind::RParen, "')' after expression")?;
            Ok(Expr::Grouping { expr: Box::new(expr),
                                line: token.line })
        },
        _ => Err(ParseError::ExpectedExpression { found: token.describe(),
                                                  line:  token.line, }),
    }
}
