use std::io::{BufRead, Write};

use crate::{
    ast::{ElseIf, Expr, Statement, VarDecl},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Executes a single statement.
    ///
    /// Blocks run in the same variable store as the statement that owns
    /// them, so declarations inside an `IF` or `WHILE` body outlive it.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// `Some(Value)` for an expression statement, `None` for every other
    /// statement.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::VarDeclaration(decl) => {
                self.declare(decl)?;
                Ok(None)
            },
            Statement::VarDeclarationList { declarations, .. } => {
                for decl in declarations {
                    self.declare(decl)?;
                }
                Ok(None)
            },
            Statement::Expression { expr, .. } => self.eval(expr).map(Some),
            Statement::Print { expr, line } => {
                let value = self.eval(expr)?;
                self.display(&value, *line)?;
                Ok(None)
            },
            Statement::Scan { targets, .. } => {
                self.scan(targets)?;
                Ok(None)
            },
            Statement::If { condition,
                            then_branch,
                            else_if_branches,
                            else_branch,
                            .. } => {
                self.execute_if(condition, then_branch, else_if_branches, else_branch.as_deref())?;
                Ok(None)
            },
            Statement::While { condition, body, .. } => {
                while self.eval(condition)?.is_truthy() {
                    self.execute_block(body)?;
                }
                Ok(None)
            },
        }
    }

    /// Declares one variable.
    ///
    /// The initializer must produce a value of the declared type. Without an
    /// initializer the variable starts out as `nil`.
    fn declare(&mut self, decl: &VarDecl) -> EvalResult<()> {
        let value = match &decl.initializer {
            Some(initializer) => {
                let value = self.eval(initializer)?;
                if !value.fits(decl.declared) {
                    return Err(RuntimeError::IncompatibleType { name:     decl.name.clone(),
                                                                declared: decl.declared,
                                                                found:    value.type_name(),
                                                                line:     decl.line, });
                }
                value
            },
            None => Value::Nil,
        };

        self.environment
            .define(decl.declared, &decl.name, value, decl.line)
    }

    /// Runs the first branch whose condition holds, if any.
    fn execute_if(&mut self,
                  condition: &Expr,
                  then_branch: &[Statement],
                  else_if_branches: &[ElseIf],
                  else_branch: Option<&[Statement]>)
                  -> EvalResult<()> {
        if self.eval(condition)?.is_truthy() {
            return self.execute_block(then_branch);
        }

        for branch in else_if_branches {
            if self.eval(&branch.condition)?.is_truthy() {
                return self.execute_block(&branch.then_branch);
            }
        }

        match else_branch {
            Some(block) => self.execute_block(block),
            None => Ok(()),
        }
    }

    fn execute_block(&mut self, block: &[Statement]) -> EvalResult<()> {
        for statement in block {
            self.execute(statement)?;
        }
        Ok(())
    }
}
