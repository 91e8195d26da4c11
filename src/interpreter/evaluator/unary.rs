use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Evaluates a unary operation.
    ///
    /// `NOT` negates the truthiness of any operand. `-` negates an `INT` or a
    /// `FLOAT` and rejects everything else.
    ///
    /// # Errors
    /// - `RuntimeError::ExpectedNumber` when `-` is applied to a non-number.
    /// - `RuntimeError::Overflow` when negating the smallest `INT`.
    pub(in crate::interpreter::evaluator) fn eval_unary(&mut self,
                                                        op: UnaryOperator,
                                                        expr: &Expr,
                                                        line: usize)
                                                        -> EvalResult<Value> {
        let value = self.eval(expr)?;
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Float(x) => Ok(Value::Float(-x)),
                _ => Err(RuntimeError::ExpectedNumber { line }),
            },
        }
    }
}
