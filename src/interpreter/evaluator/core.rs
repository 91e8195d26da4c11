use std::io::{BufRead, Write};

use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::{Diagnostics, RuntimeError},
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one program run.
///
/// The interpreter owns the variable store together with the streams `SCAN`
/// reads from and `DISPLAY` writes to. Any [`BufRead`] / [`Write`] pair
/// works, so tests can drive a program from a byte slice and inspect what it
/// printed.
///
/// ## Usage
///
/// Create one `Interpreter` per run: variables declared by a program stay
/// declared for as long as the interpreter lives, and declaring them again
/// is an error.
///
/// # Example
/// ```
/// use cde::{
///     error::Diagnostics,
///     interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let source = "BEGIN CODE\nINT x = 2\nDISPLAY: x * 21\nEND CODE";
/// let statements = parse(&scan(source, &mut diagnostics), &mut diagnostics).unwrap();
///
/// let mut interpreter = Interpreter::new(&b""[..], Vec::new());
/// interpreter.interpret(&statements, &mut diagnostics);
///
/// assert_eq!(interpreter.output(), b"42\n");
/// ```
pub struct Interpreter<R, W> {
    pub(in crate::interpreter::evaluator) environment: Environment,
    pub(in crate::interpreter::evaluator) input:       R,
    pub(in crate::interpreter::evaluator) output:      W,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Creates an interpreter with an empty variable store.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { environment: Environment::new(),
               input,
               output }
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The output stream.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns its output stream.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes a parsed program.
    ///
    /// Statements run in order until the first runtime error, which is
    /// reported to `diagnostics` and ends the run.
    ///
    /// # Parameters
    /// - `statements`: The top-level statements of the program.
    /// - `diagnostics`: Receives the runtime error, if any.
    ///
    /// # Returns
    /// The value of the last top-level expression statement, or `None` if
    /// there was none or the run failed.
    pub fn interpret(&mut self,
                     statements: &[Statement],
                     diagnostics: &mut Diagnostics)
                     -> Option<Value> {
        let mut last = None;
        for statement in statements {
            match self.execute(statement) {
                Ok(Some(value)) => last = Some(value),
                Ok(None) => {},
                Err(error) => {
                    debug!("run stopped at line {}", error.line());
                    diagnostics.report(error);
                    return None;
                },
            }
        }
        last
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variables,
    /// assignments, groups, unary, binary and logical operations.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression. An assignment evaluates to the value it
    /// stored.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => self.environment.get(name, *line).cloned(),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Assign { name, value, line } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value.clone(), *line)?;
                Ok(value)
            },
            Expr::Unary { op, expr, line } => self.eval_unary(*op, expr, *line),
            Expr::Binary { left,
                           op,
                           right,
                           line, } => self.eval_binary(left, *op, right, *line),
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
        }
    }
}
