use thiserror::Error;

/// Represents all errors that can occur while scanning source text.
///
/// `LexError` is the error type of the `logos` scanner, so it carries no line
/// number of its own. The scanner attaches the line when it records the error
/// as a [`Diagnostic`](crate::error::Diagnostic).
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub enum LexError {
    /// No token rule matched the input.
    ///
    /// Produced by the scanner itself and replaced with
    /// [`LexError::UnexpectedCharacter`] once the offending text is known.
    #[default]
    #[error("Unrecognized input")]
    Unrecognized,
    /// A character that cannot start any token.
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// A `"` string without its closing quote.
    #[error("Unterminated string")]
    UnterminatedString,
    /// A `[` escape string without its closing bracket.
    #[error("Unterminated escape string")]
    UnterminatedEscape,
    /// Two single quotes with nothing between them.
    #[error("Empty char constant")]
    EmptyChar,
    /// A char constant that is not closed right after its character.
    #[error("Unterminated char constant")]
    UnterminatedChar,
    /// An integer literal outside the 64 bit range.
    #[error("Integer literal is too large")]
    IntegerTooLarge,
}
