use crate::{
    ast::{DeclaredType, ElseIf, Expr, ScanTarget, Statement, VarDecl},
    interpreter::{
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            stream::TokenStream,
            utils::{parse_comma_separated, parse_identifier},
        },
        token::TokenKind,
    },
};

/// Parses a declaration or any other statement.
///
/// A statement starting with a type keyword is a declaration line; anything
/// else is handed to [`parse_statement`].
///
/// Grammar: `declaration := TYPE binding ("," binding)* | statement`
pub fn parse_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    if let Some(declared) = tokens.peek().kind.declared_type() {
        let line = tokens.advance().line;
        let declarations =
            parse_comma_separated(tokens, |tokens| parse_binding(tokens, declared))?;
        return Ok(Statement::VarDeclarationList { declarations, line });
    }
    parse_statement(tokens)
}

/// Parses one `name` or `name = initializer` of a declaration line.
fn parse_binding(tokens: &mut TokenStream<'_>, declared: DeclaredType) -> ParseResult<VarDecl> {
    let name = parse_identifier(tokens)?;
    let initializer = match tokens.matches(&[TokenKind::Assign]) {
        Some(_) => Some(parse_expression(tokens)?),
        None => None,
    };

    Ok(VarDecl { declared,
                 name: name.lexeme.clone(),
                 initializer,
                 line: name.line })
}

/// Parses a single non-declaration statement.
///
/// A statement may be one of:
/// - `IF (...) BEGIN IF ... END IF`, with `ELSE IF` and `ELSE` branches.
/// - `WHILE (...) BEGIN WHILE ... END WHILE`.
/// - `DISPLAY: expression`.
/// - `SCAN: name, name, ...`.
/// - an expression evaluated for its effect, usually an assignment.
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let token = tokens.peek();
    let line = token.line;

    match token.kind {
        TokenKind::If => {
            tokens.advance();
            parse_if(tokens, line)
        },
        TokenKind::While => {
            tokens.advance();
            let condition = parse_condition(tokens, "WHILE")?;
            let body = parse_block(tokens, TokenKind::While, "WHILE")?;
            Ok(Statement::While { condition,
                                  body,
                                  line })
        },
        TokenKind::Display => {
            tokens.advance();
            tokens.consume(TokenKind::Colon, "':' after DISPLAY")?;
            let expr = parse_expression(tokens)?;
            Ok(Statement::Print { expr, line })
        },
        TokenKind::Scan => {
            tokens.advance();
            tokens.consume(TokenKind::Colon, "':' after SCAN")?;
            let targets = parse_comma_separated(tokens, parse_scan_target)?;
            Ok(Statement::Scan { targets, line })
        },
        _ => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses the rest of an `IF` statement once `IF` is consumed.
///
/// `ELSE IF` branches are collected in order; a bare `ELSE` ends the chain.
fn parse_if(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Statement> {
    let condition = parse_condition(tokens, "IF")?;
    let then_branch = parse_block(tokens, TokenKind::If, "IF")?;

    let mut else_if_branches = Vec::new();
    let mut else_branch = None;

    while tokens.matches(&[TokenKind::Else]).is_some() {
        if let Some(token) = tokens.matches(&[TokenKind::If]) {
            let condition = parse_condition(tokens, "ELSE IF")?;
            let then_branch = parse_block(tokens, TokenKind::If, "IF")?;
            else_if_branches.push(ElseIf { condition,
                                           then_branch,
                                           line: token.line });
        } else {
            else_branch = Some(parse_block(tokens, TokenKind::If, "IF")?);
            break;
        }
    }

    Ok(Statement::If { condition,
                       then_branch,
                       else_if_branches,
                       else_branch,
                       line })
}

/// Parses a parenthesized condition after `keyword`.
fn parse_condition(tokens: &mut TokenStream<'_>, keyword: &str) -> ParseResult<Expr> {
    tokens.consume(TokenKind::LParen, &format!("'(' after {keyword}"))?;
    let condition = parse_expression(tokens)?;
    tokens.consume(TokenKind::RParen, &format!("')' after {keyword} condition"))?;
    Ok(condition)
}

fn parse_scan_target(tokens: &mut TokenStream<'_>) -> ParseResult<ScanTarget> {
    let name = parse_identifier(tokens)?;
    Ok(ScanTarget { name: name.lexeme.clone(),
                    line: name.line })
}
