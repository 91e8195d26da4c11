use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// The source does not open with `BEGIN CODE`.
    #[error("Error on line {line}: SyntaxError: Expected program block 'BEGIN CODE'.")]
    ExpectedProgramBlock {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The source does not close with `END CODE`.
    #[error("Error on line {line}: SyntaxError: Unterminated program block, expected 'END CODE'.")]
    UnterminatedProgramBlock {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but another one was found.
    #[error("Error on line {line}: SyntaxError: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar required.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression was required but the token cannot start one.
    #[error("Error on line {line}: SyntaxError: Expected expression, found {found}.")]
    ExpectedExpression {
        /// Description of the token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left-hand side of `=` is not a variable.
    #[error("Error on line {line}: SyntaxError: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `BEGIN IF` or `BEGIN WHILE` block without its matching end marker.
    #[error("Error on line {line}: SyntaxError: Unterminated {block} block.")]
    UnterminatedBlock {
        /// The block keyword (`IF` or `WHILE`).
        block: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedProgramBlock { line }
            | Self::UnterminatedProgramBlock { line }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::UnterminatedBlock { line, .. } => *line,
        }
    }
}
