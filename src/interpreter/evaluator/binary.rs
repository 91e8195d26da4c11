use std::io::{BufRead, Write};

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, left first, before the operator is
    /// applied.
    ///
    /// - `&` concatenates the display forms of any two values.
    /// - `==` / `<>` compare any two values. Values of different types are
    ///   never equal, so `1 == 1.0` is false.
    /// - Arithmetic and relational operators need two `INT`s or two
    ///   `FLOAT`s; there is no implicit widening. `%` is defined for `INT`
    ///   only.
    ///
    /// # Errors
    /// - `RuntimeError::TypeError` for unsupported operand types.
    /// - `RuntimeError::DivisionByZero` for `/` or `%` by zero.
    /// - `RuntimeError::Overflow` when an `INT` result leaves the 64 bit
    ///   range.
    pub(in crate::interpreter::evaluator) fn eval_binary(&mut self,
                                                         left: &Expr,
                                                         op: BinaryOperator,
                                                         right: &Expr,
                                                         line: usize)
                                                         -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
            Sub,
        };

        let left = self.eval(left)?;
        let right = self.eval(right)?;

        match op {
            Concat => Ok(Value::Str(format!("{left}{right}").into())),
            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),
            Less | LessEqual | Greater | GreaterEqual => compare(op, &left, &right, line),
            Add | Sub | Mul | Div | Mod => arithmetic(op, &left, &right, line),
        }
    }
}

fn compare(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let holds = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => relation_holds(op, a, b),
        (Value::Float(a), Value::Float(b)) => relation_holds(op, a, b),
        _ => return Err(operand_mismatch(op, left, right, line)),
    };
    Ok(Value::Bool(holds))
}

fn relation_holds<T: PartialOrd>(op: BinaryOperator, a: T, b: T) -> bool {
    match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::Greater => a > b,
        _ => a >= b,
    }
}

fn arithmetic(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => integer_arithmetic(op, *a, *b, line),
        (Value::Float(a), Value::Float(b)) if op != BinaryOperator::Mod => {
            float_arithmetic(op, *a, *b, line)
        },
        _ => Err(operand_mismatch(op, left, right, line)),
    }
}

/// Checked `INT` arithmetic.
///
/// `/` truncates toward zero and `%` takes the sign of the dividend.
fn integer_arithmetic(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    if matches!(op, BinaryOperator::Div | BinaryOperator::Mod) && b == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }

    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => a.checked_div(b),
        _ => a.checked_rem(b),
    };
    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { line })
}

fn float_arithmetic(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        _ if b == 0.0 => return Err(RuntimeError::DivisionByZero { line }),
        _ => a / b,
    };
    Ok(Value::Float(result))
}

fn operand_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    let expected = if op == BinaryOperator::Mod {
        "two INT operands"
    } else {
        "two INT or two FLOAT operands"
    };
    RuntimeError::TypeError { details: format!("Operator '{op}' expects {expected}, found {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
