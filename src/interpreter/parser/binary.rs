use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::ParseError,
    interpreter::{
        parser::{core::ParseResult, stream::TokenStream, unary::parse_unary},
        token::TokenKind,
    },
};

/// Parses assignment expressions.
///
/// Assignment is right-associative: `a = b = 1` assigns `1` to `b`, then the
/// result to `a`. Only a bare variable may appear on the left. Any other
/// target is reported as a syntax error, the value is parsed anyway and the
/// left-hand expression is returned so that parsing carries on.
///
/// The rule is: `assignment := IDENTIFIER "=" assignment | or`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An `Expr::Assign`, or the expression of the next tier.
pub fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let target = parse_logical_or(tokens)?;

    let Some(equals) = tokens.matches(&[TokenKind::Assign]) else {
        return Ok(target);
    };
    let value = parse_assignment(tokens)?;

    if let Expr::Variable { name, line } = target {
        return Ok(Expr::Assign { name,
                                 value: Box::new(value),
                                 line });
    }

    tokens.report(ParseError::InvalidAssignmentTarget { line: equals.line });
    Ok(target)
}

/// Parses `OR` chains.
///
/// The rule is: `or := and ("OR" and)*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_logical_and(tokens)?;
    while let Some(token) = tokens.matches(&[TokenKind::Or]) {
        let right = parse_logical_and(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               op: LogicalOperator::Or,
                               right: Box::new(right),
                               line: token.line };
    }
    Ok(left)
}

/// Parses `AND` chains.
///
/// The rule is: `and := equality ("AND" equality)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_equality(tokens)?;
    while let Some(token) = tokens.matches(&[TokenKind::And]) {
        let right = parse_equality(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               op: LogicalOperator::And,
                               right: Box::new(right),
                               line: token.line };
    }
    Ok(left)
}

/// Parses equality expressions.
///
/// `==` and `<>` always compare. A single `=` compares too, unless the
/// expression on its left is a bare variable: `x = 1` stays an assignment
/// for [`parse_assignment`], while `1 = 1` or `x + 1 = 2` is a comparison.
///
/// The rule is: `equality := comparison (("==" | "<>" | "=") comparison)*`
///
/// # Example
/// ```
/// use cde::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let source = "BEGIN CODE\nx = 1\nDISPLAY: x + 1 = 2\nEND CODE";
/// let statements = parse(&scan(source, &mut diagnostics), &mut diagnostics).unwrap();
///
/// assert_eq!(statements[0].to_string(), "(expr (= x 1))");
/// assert_eq!(statements[1].to_string(), "(DISPLAY (== (+ x 1) 2))");
/// ```
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_comparison(tokens)?;
    loop {
        let token = tokens.peek();
        let op = match token.kind {
            TokenKind::EqualEqual => BinaryOperator::Equal,
            TokenKind::NotEqual => BinaryOperator::NotEqual,
            TokenKind::Assign if !matches!(left, Expr::Variable { .. }) => BinaryOperator::Equal,
            _ => break,
        };

        tokens.advance();
        let right = parse_comparison(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line: token.line };
    }
    Ok(left)
}

/// Parses relational expressions.
///
/// The rule is: `comparison := term (("<" | "<=" | ">" | ">=") term)*`
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           parse_term,
                           &[BinaryOperator::Less,
                             BinaryOperator::LessEqual,
                             BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual])
}

/// Parses addition-level expressions.
///
/// Concatenation and modulo share this tier with `+` and `-`, so
/// `"a" & 1 + 2` concatenates `"a"` and `1` before adding `2`.
///
/// The rule is: `term := factor (("+" | "-" | "&" | "%") factor)*`
pub fn parse_term(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           parse_factor,
                           &[BinaryOperator::Add,
                             BinaryOperator::Sub,
                             BinaryOperator::Concat,
                             BinaryOperator::Mod])
}

/// Parses multiplication-level expressions.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_unary, &[BinaryOperator::Div, BinaryOperator::Mul])
}

/// Folds `operand (op operand)*` into a left-leaning tree of binary nodes,
/// for every `op` in `operators`.
fn parse_left_associative(tokens: &mut TokenStream<'_>,
                          operand: fn(&mut TokenStream<'_>) -> ParseResult<Expr>,
                          operators: &[BinaryOperator])
                          -> ParseResult<Expr> {
    let mut left = operand(tokens)?;
    loop {
        let token = tokens.peek();
        if let Some(op) = token_to_binary_operator(token.kind)
           && operators.contains(&op)
        {
            tokens.advance();
            let right = operand(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every kind that is not a binary operator, including
/// `=`, which only [`parse_equality`] interprets as a comparison.
///
/// # Example
/// ```
/// use cde::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Ampersand), Some(BinaryOperator::Concat));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
    };
    Some(match kind {
        TokenKind::Plus => Add,
        TokenKind::Minus => Sub,
        TokenKind::Star => Mul,
        TokenKind::Slash => Div,
        TokenKind::Percent => Mod,
        TokenKind::Ampersand => Concat,
        TokenKind::EqualEqual => Equal,
        TokenKind::NotEqual => NotEqual,
        TokenKind::Less => Less,
        TokenKind::LessEqual => LessEqual,
        TokenKind::Greater => Greater,
        TokenKind::GreaterEqual => GreaterEqual,
        _ => return None,
    })
}
