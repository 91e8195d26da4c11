use std::{iter::Peekable, slice};

use crate::{
    error::{Diagnostics, ParseError},
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// A cursor over the tokens of a program body.
///
/// Once the body is exhausted every lookahead yields the end-of-input token,
/// so parsing functions never see a missing token. Errors the parser
/// recovers from are reported straight into the caller's [`Diagnostics`].
pub struct TokenStream<'a> {
    tokens:      Peekable<slice::Iter<'a, Token>>,
    eof:         &'a Token,
    diagnostics: &'a mut Diagnostics,
    reported:    usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor over `body`, followed by `eof`.
    pub fn new(body: &'a [Token], eof: &'a Token, diagnostics: &'a mut Diagnostics) -> Self {
        Self { tokens: body.iter().peekable(),
               eof,
               diagnostics,
               reported: 0 }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> &'a Token {
        self.tokens.peek().copied().unwrap_or(self.eof)
    }

    /// Consumes and returns the next token. At the end of input the
    /// end-of-input token is returned and the cursor stays put.
    pub fn advance(&mut self) -> &'a Token {
        self.tokens.next().unwrap_or(self.eof)
    }

    /// Whether the next token is of kind `kind`.
    pub fn check(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Whether every body token has been consumed.
    pub fn is_at_end(&mut self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consumes the next token if its kind is one of `kinds`.
    pub fn matches(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.contains(&self.peek().kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of kind `kind` or fails.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` naming `expected` when the next
    /// token is of another kind. Nothing is consumed in that case.
    pub fn consume(&mut self, kind: TokenKind, expected: &str) -> ParseResult<&'a Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let found = self.peek();
        Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                          found:    found.describe(),
                                          line:     found.line, })
    }

    /// Records a syntax error without interrupting parsing.
    pub fn report(&mut self, error: ParseError) {
        self.reported += 1;
        self.diagnostics.report(error);
    }

    /// Number of syntax errors reported through this cursor.
    pub const fn reported(&self) -> usize {
        self.reported
    }
}
