use std::collections::HashMap;

use crate::{
    ast::DeclaredType,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A variable's declared type and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The type fixed at declaration.
    pub declared: DeclaredType,
    /// The current value; `nil` until first assigned.
    pub value:    Value,
}

/// Stores the variables of one program run.
///
/// The store is flat: `IF` and `WHILE` bodies read and declare variables in
/// the same mapping as the top level of the program, so a name declared in a
/// loop body is still visible after the loop.
///
/// # Example
/// ```
/// use cde::{
///     ast::DeclaredType,
///     interpreter::{environment::Environment, value::Value},
/// };
///
/// let mut env = Environment::new();
/// env.define(DeclaredType::Int, "x", Value::Integer(1), 1).unwrap();
/// env.assign("x", Value::Integer(2), 2).unwrap();
/// assert_eq!(env.get("x", 3).unwrap(), &Value::Integer(2));
///
/// // Declared types are enforced on assignment.
/// assert!(env.assign("x", Value::Float(2.0), 4).is_err());
/// // A name can only be declared once.
/// assert!(env.define(DeclaredType::Int, "x", Value::Nil, 5).is_err());
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` with its type and initial value.
    ///
    /// The caller checks the initial value against `declared`; `nil` is
    /// accepted here for declarations without an initializer.
    ///
    /// # Errors
    /// Returns `RuntimeError::VariableRedefinition` if `name` is already
    /// declared.
    pub fn define(&mut self,
                  declared: DeclaredType,
                  name: &str,
                  value: Value,
                  line: usize)
                  -> EvalResult<()> {
        if let Some(existing) = self.variables.get(name) {
            return Err(RuntimeError::VariableRedefinition { name: name.to_string(),
                                                            declared: existing.declared,
                                                            line });
        }

        self.variables
            .insert(name.to_string(), Binding { declared, value });
        Ok(())
    }

    /// Replaces the value of an existing variable.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if `name` was never declared.
    /// - `RuntimeError::IncompatibleType` if `value` does not fit the declared
    ///   type.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let binding = self.variables
                          .get_mut(name)
                          .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                         line })?;

        if !value.fits(binding.declared) {
            return Err(RuntimeError::IncompatibleType { name: name.to_string(),
                                                        declared: binding.declared,
                                                        found: value.type_name(),
                                                        line });
        }

        binding.value = value;
        Ok(())
    }

    /// Returns the current value of `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if `name` was never declared.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .map(|binding| &binding.value)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Returns the full binding of `name`, if declared.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.variables.get(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
