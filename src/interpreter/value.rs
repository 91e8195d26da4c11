use std::{fmt, rc::Rc};

use crate::ast::{DeclaredType, LiteralValue};

/// Represents a runtime value in the interpreter.
///
/// Values are produced by literals, operators and `SCAN`, stored in the
/// [`Environment`](crate::interpreter::environment::Environment) and written
/// out by `DISPLAY`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A single character.
    Char(char),
    /// A boolean, produced by comparisons, `NOT` and the `TRUE`/`FALSE`
    /// literals.
    Bool(bool),
    /// A string, produced by string literals and `&`.
    Str(Rc<str>),
    /// The absent value. Uninitialized variables hold it.
    Nil,
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Float(x) => Self::Float(x),
            LiteralValue::Char(c) => Self::Char(c),
            LiteralValue::Str(s) => Self::Str(s.into()),
            LiteralValue::Bool(b) => Self::Bool(b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(value: &LiteralValue) -> Self {
        value.clone().into()
    }
}

impl Value {
    /// Maps the value to a boolean for use in conditions.
    ///
    /// `nil` is false, booleans are themselves and every other value is true.
    ///
    /// # Example
    /// ```
    /// use cde::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Integer(0).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            _ => true,
        }
    }

    /// Returns the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Char(_) => "CHAR",
            Self::Bool(_) => "BOOL",
            Self::Str(_) => "STRING",
            Self::Nil => "nil",
        }
    }

    /// Whether a variable declared with `declared` may hold this value.
    ///
    /// There is no implicit conversion: an `INT` never goes into a `FLOAT`
    /// variable, and `nil` fits no declared type.
    #[must_use]
    pub const fn fits(&self, declared: DeclaredType) -> bool {
        matches!((declared, self),
                 (DeclaredType::Int, Self::Integer(_))
                 | (DeclaredType::Float, Self::Float(_))
                 | (DeclaredType::Char, Self::Char(_))
                 | (DeclaredType::Bool, Self::Bool(_)))
    }
}

/// The display form used by `DISPLAY` and `&`.
///
/// `nil` prints as `nil`, booleans as `True`/`False`, and floats drop a
/// trailing `.0` so integral floats print without a fractional part.
///
/// # Example
/// ```
/// use cde::interpreter::value::Value;
///
/// assert_eq!(Value::Float(3.0).to_string(), "3");
/// assert_eq!(Value::Float(2.5).to_string(), "2.5");
/// assert_eq!(Value::Bool(true).to_string(), "True");
/// assert_eq!(Value::Bool(false).to_string(), "False");
/// assert_eq!(Value::Nil.to_string(), "nil");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => {
                let text = x.to_string();
                write!(f, "{}", text.strip_suffix(".0").unwrap_or(&text))
            },
            Self::Char(c) => write!(f, "{c}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
