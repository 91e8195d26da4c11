use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    ast::ScanTarget,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Writes the display form of `value` and a line terminator.
    pub(in crate::interpreter::evaluator) fn display(&mut self,
                                                     value: &Value,
                                                     line: usize)
                                                     -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|error| io_error(&error, line))
    }

    /// Reads one input line per target and assigns the decoded value.
    ///
    /// Each read is preceded by a `name: ` prompt. At end of input the
    /// decoded value is `nil`, which no declared type accepts.
    ///
    /// # Errors
    /// - `RuntimeError::Io` if the prompt cannot be written or the line
    ///   cannot be read.
    /// - Any error of [`Environment::assign`], such as an undeclared target
    ///   or a value of the wrong type.
    ///
    /// [`Environment::assign`]: crate::interpreter::environment::Environment::assign
    pub(in crate::interpreter::evaluator) fn scan(&mut self,
                                                  targets: &[ScanTarget])
                                                  -> EvalResult<()> {
        for target in targets {
            let line = target.line;
            write!(self.output, "{}: ", target.name).and_then(|()| self.output.flush())
                                                    .map_err(|error| io_error(&error, line))?;

            let mut input = String::new();
            let read = self.input
                           .read_line(&mut input)
                           .map_err(|error| io_error(&error, line))?;

            let value = if read == 0 { Value::Nil } else { decode_input(&input) };
            debug!("SCAN {} <- {value:?}", target.name);

            self.environment.assign(&target.name, value, line)?;
        }
        Ok(())
    }
}

fn io_error(error: &io::Error, line: usize) -> RuntimeError {
    RuntimeError::Io { details: error.to_string(),
                       line }
}

/// Decodes one line of `SCAN` input.
///
/// The line terminator is dropped, then the text is tried as an `INT`, a
/// `FLOAT`, a single `CHAR` and a `BOOL` (`true`/`false` in any case), in
/// that order. The first decoding that succeeds wins; if none does the
/// result is `nil`.
///
/// # Example
/// ```
/// use cde::interpreter::{evaluator::io::decode_input, value::Value};
///
/// assert_eq!(decode_input("42\n"), Value::Integer(42));
/// assert_eq!(decode_input("4.5\n"), Value::Float(4.5));
/// assert_eq!(decode_input("7"), Value::Integer(7));
/// assert_eq!(decode_input("x\n"), Value::Char('x'));
/// assert_eq!(decode_input("True\n"), Value::Bool(true));
/// assert_eq!(decode_input("hello\n"), Value::Nil);
/// ```
#[must_use]
pub fn decode_input(line: &str) -> Value {
    let text = line.trim_end_matches(['\r', '\n']);
    let trimmed = text.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Integer(n);
    }
    if let Ok(x) = trimmed.parse::<f64>() {
        return Value::Float(x);
    }

    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Value::Char(c);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Nil,
    }
}
