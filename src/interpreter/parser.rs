/// Core parsing entry points.
///
/// Checks the program framing, drives statement parsing over the program
/// body and implements statement-level error recovery.
pub mod core;
/// The token cursor used by every parsing function.
///
/// Wraps the token sequence with one token of lookahead and forwards syntax
/// errors to the caller's diagnostics.
pub mod stream;
/// Binary expression parsing.
///
/// Implements the precedence ladder from assignment down to factors, with
/// left-associative binary tiers built iteratively.
pub mod binary;
/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, variable references and parenthesized
/// groups.
pub mod unary;
/// Statement parsing.
///
/// Handles declarations, `IF`, `WHILE`, `DISPLAY`, `SCAN` and expression
/// statements.
pub mod statement;
/// `BEGIN IF` / `BEGIN WHILE` block parsing.
pub mod block;
/// Utility parsers shared by several statement forms.
pub mod utils;
