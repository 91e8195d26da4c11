//! # cde
//!
//! cde is an interpreter for CODE, a small statically-typed, block-structured
//! teaching language. Source text is scanned into tokens, parsed into a tree
//! of statements and executed by a tree-walking evaluator over a single flat
//! variable store.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use log::trace;

use crate::{
    error::Diagnostics,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders nodes in a parenthesized prefix form for inspection.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program
/// and the [`Diagnostics`](error::Diagnostics) collection they are reported
/// into.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Tracks whether a run hit a syntax error or a runtime error.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokens, lexing, parsing, evaluation, the
/// variable store and runtime values.
pub mod interpreter;

/// Scans, parses and runs `source` on an existing interpreter.
///
/// Nothing is executed when scanning or parsing reported a syntax error. A
/// runtime error stops execution at the failing statement. Both are recorded
/// in `diagnostics`.
///
/// # Parameters
/// - `source`: Program text, including its `BEGIN CODE` / `END CODE` frame.
/// - `interpreter`: Supplies the variable store and the I/O streams.
/// - `diagnostics`: Receives every error of the run.
///
/// # Returns
/// The value of the last top-level expression statement, if any ran.
///
/// # Examples
/// ```
/// use cde::{error::Diagnostics, execute, interpreter::evaluator::core::Interpreter};
///
/// let mut diagnostics = Diagnostics::new();
/// let mut interpreter = Interpreter::new(&b""[..], Vec::new());
///
/// execute("BEGIN CODE\nDISPLAY: \"hi\"\nEND CODE", &mut interpreter, &mut diagnostics);
/// assert_eq!(interpreter.output(), b"hi\n");
///
/// // A missing frame is a syntax error and nothing runs.
/// execute("DISPLAY: 1", &mut interpreter, &mut diagnostics);
/// assert!(diagnostics.has_syntax_error());
/// ```
pub fn execute<R: BufRead, W: Write>(source: &str,
                                     interpreter: &mut Interpreter<R, W>,
                                     diagnostics: &mut Diagnostics)
                                     -> Option<Value> {
    let tokens = scan(source, diagnostics);
    let statements = parse(&tokens, diagnostics)?;

    if diagnostics.has_syntax_error() {
        trace!("not running: syntax errors were reported");
        return None;
    }

    interpreter.interpret(&statements, diagnostics)
}

/// The observable result of [`get_output`].
#[derive(Debug)]
pub struct Outcome {
    /// Everything the program wrote, including `SCAN` prompts.
    pub output:      String,
    /// Every error reported during the run.
    pub diagnostics: Diagnostics,
    /// The value of the last top-level expression statement.
    pub last_value:  Option<Value>,
}

/// Runs `source` with a fresh interpreter, feeding `input` to `SCAN`.
///
/// # Examples
/// ```
/// use cde::get_output;
///
/// let source = "BEGIN CODE\nINT n\nSCAN: n\nDISPLAY: n * 2\nEND CODE";
/// let outcome = get_output(source, "21\n");
///
/// assert_eq!(outcome.output, "n: 42\n");
/// assert!(outcome.diagnostics.is_empty());
///
/// // Runtime errors are reported, not returned.
/// let outcome = get_output("BEGIN CODE\nDISPLAY: 1 / 0\nEND CODE", "");
/// assert!(outcome.diagnostics.has_runtime_error());
/// ```
#[must_use]
pub fn get_output(source: &str, input: &str) -> Outcome {
    let mut diagnostics = Diagnostics::new();
    let mut interpreter = Interpreter::new(input.as_bytes(), Vec::new());

    let last_value = execute(source, &mut interpreter, &mut diagnostics);
    let output = String::from_utf8_lossy(&interpreter.into_output()).into_owned();

    Outcome { output,
              diagnostics,
              last_value }
}
