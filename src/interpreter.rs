/// The token model shared by every stage.
///
/// Declares [`token::TokenKind`], the closed set of token categories, the
/// reserved keyword table, and the [`token::Token`] record produced by the
/// lexer.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a finite sequence of
/// tokens terminated by an end-of-input marker. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   decoded literal and source line.
/// - Handles numeric, char and string literals, identifiers, keywords,
///   operators and comments.
/// - Reports lexical errors and keeps scanning past them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser checks the program framing, then processes the token stream
/// with recursive descent over a fixed precedence ladder and builds
/// statements and expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and reports syntax errors with location info.
/// - Recovers at statement boundaries so one pass reports many errors.
pub mod parser;
/// The evaluator module executes AST nodes.
///
/// The evaluator walks the statement list, evaluates expressions against the
/// variable store, enforces declared types and performs console input and
/// output. It is the core execution engine of the interpreter.
pub mod evaluator;
/// The variable store.
///
/// A single flat mapping from variable name to declared type and current
/// value. Blocks share the program's store.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum together with truthiness, type names and the
/// display form used by `DISPLAY` and concatenation.
pub mod value;
