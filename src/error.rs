/// Lexical errors.
///
/// Defines the problems the scanner can run into while turning source text
/// into tokens: unexpected characters, unterminated literals and malformed
/// numbers. Lexical errors never stop the scanner.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while checking the token stream
/// against the grammar: missing delimiters, malformed blocks, invalid
/// assignment targets and missing program framing.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution. Runtime
/// errors include undefined or redefined variables, type mismatches, division
/// by zero and integer overflow.
pub mod runtime_error;
/// Diagnostics collected over one run of the pipeline.
///
/// Replaces process-wide error flags with a value owned by the caller and
/// passed to every stage.
pub mod diagnostics;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
