/// Core evaluation logic and interpreter state.
///
/// Contains the [`Interpreter`](core::Interpreter) type, the expression
/// dispatcher and the entry point that runs a whole program.
pub mod core;

/// Statement execution.
///
/// Runs declarations, expression statements and the `IF`/`WHILE` control
/// flow against the flat variable store.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, equality and concatenation.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Short-circuiting `AND` / `OR`.
pub mod logic;

/// `DISPLAY` and `SCAN`.
///
/// Writes display forms to the output stream and decodes lines read from
/// the input stream.
pub mod io;
