use thiserror::Error;

use crate::ast::DeclaredType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during execution.
///
/// The first runtime error aborts the run; the remaining statements are not
/// executed.
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never declared.
    #[error("Error on line {line}: NameError: Identifier '{name}' is not defined.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a variable whose name is already bound.
    #[error("Error on line {line}: NameError: Identifier '{name}' is already defined with type \
             {declared}.")]
    VariableRedefinition {
        /// The name of the variable.
        name:     String,
        /// The type of the existing binding.
        declared: DeclaredType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Stored a value the variable's declared type does not accept.
    #[error("Error on line {line}: TypeError: Identifier '{name}' of type {declared} cannot hold \
             {found}.")]
    IncompatibleType {
        /// The name of the variable.
        name:     String,
        /// The declared type of the variable.
        declared: DeclaredType,
        /// The type name of the rejected value.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was applied to operands it is not defined for.
    #[error("Error on line {line}: TypeError: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Unary minus was applied to something other than a number.
    #[error("Error on line {line}: TypeError: Operand must be a number.")]
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Division or modulo with a zero divisor.
    #[error("Error on line {line}: ZeroDivisionError: Divisor must be non-zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic left the 64 bit range.
    #[error("Error on line {line}: OverflowError: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading input or writing output failed.
    #[error("Error on line {line}: IOError: {details}.")]
    Io {
        /// Description of the underlying I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::VariableRedefinition { line, .. }
            | Self::IncompatibleType { line, .. }
            | Self::TypeError { line, .. }
            | Self::ExpectedNumber { line }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::Io { line, .. } => *line,
        }
    }
}
