use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Evaluates `AND` / `OR` with short-circuiting.
    ///
    /// The left operand is always evaluated. `OR` returns it when it is
    /// truthy and `AND` returns it when it is falsy, without evaluating the
    /// right operand. Otherwise the value of the right operand is returned.
    /// Neither operator converts its result to a boolean.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The logical operator.
    /// - `right`: Right operand expression.
    pub(in crate::interpreter::evaluator) fn eval_logical(&mut self,
                                                          left: &Expr,
                                                          op: LogicalOperator,
                                                          right: &Expr)
                                                          -> EvalResult<Value> {
        let left = self.eval(left)?;
        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };

        if decided {
            return Ok(left);
        }
        self.eval(right)
    }
}
