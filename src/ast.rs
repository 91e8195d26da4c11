use std::fmt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code. The scanner decodes them into tokens and the parser copies
/// them into [`Expr::Literal`] nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `3.5`.
    Float(f64),
    /// A single character literal, such as `'c'`.
    Char(char),
    /// A string literal, either `"..."`, `[...]` or the `$` newline.
    Str(String),
    /// A boolean literal: `TRUE`, `FALSE`, `"TRUE"` or `"FALSE"`.
    Bool(bool),
    /// The absent value, `NIL`.
    Nil,
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bool(true) => write!(f, "TRUE"),
            Self::Bool(false) => write!(f, "FALSE"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

/// The scalar type fixed when a variable is declared.
///
/// Every later assignment to the variable must produce a value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// `INT`
    Int,
    /// `FLOAT`
    Float,
    /// `CHAR`
    Char,
    /// `BOOL`
    Bool,
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Char => "CHAR",
            Self::Bool => "BOOL",
        };
        write!(f, "{keyword}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node owns its children, so an expression is a strict tree. Every
/// variant records the source line used for runtime error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Stores a value into an already declared variable: `x = value`.
    Assign {
        /// The variable being assigned.
        name:  String,
        /// The value expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An arithmetic, relational, equality or concatenation operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A short-circuiting `AND` / `OR`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left one does not decide.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A constant value.
    Literal {
        /// The stored value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation such as `-x` or `NOT x`.
    Unary {
        /// The operator.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable reference.
    Variable {
        /// The name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

/// One name bound by a declaration line, with its optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The declared type of the variable.
    pub declared:    DeclaredType,
    /// The name of the variable.
    pub name:        String,
    /// The initial value, if one was written.
    pub initializer: Option<Expr>,
    /// Line number in the source code.
    pub line:        usize,
}

/// A variable read by a `SCAN` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    /// The name of the variable.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// An `ELSE IF (condition)` branch of an `IF` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    /// The branch condition.
    pub condition:   Expr,
    /// The statements run when the condition is the first truthy one.
    pub then_branch: Vec<Statement>,
    /// Line number in the source code.
    pub line:        usize,
}

/// Represents a statement.
///
/// Blocks are plain statement vectors owned by their parent statement; they
/// do not introduce a scope of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A single variable declaration.
    VarDeclaration(VarDecl),
    /// A declaration line binding one or more names: `INT a = 1, b`.
    VarDeclarationList {
        /// The bindings, in source order.
        declarations: Vec<VarDecl>,
        /// Line number in the source code.
        line:         usize,
    },
    /// An expression evaluated for its effect.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `DISPLAY: expression`
    Print {
        /// The value to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `SCAN: a, b, ...`
    Scan {
        /// The variables to read, in order.
        targets: Vec<ScanTarget>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `IF (...) BEGIN IF ... END IF` with optional `ELSE IF` and `ELSE`.
    If {
        /// The first condition.
        condition:        Expr,
        /// Run when `condition` is truthy.
        then_branch:      Vec<Statement>,
        /// Tried in order when `condition` is falsy.
        else_if_branches: Vec<ElseIf>,
        /// Run when no condition matched.
        else_branch:      Option<Vec<Statement>>,
        /// Line number in the source code.
        line:             usize,
    },
    /// `WHILE (...) BEGIN WHILE ... END WHILE`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// String concatenation (`&`)
    Concat,
    /// Equal to (`==`, or `=` in comparison position)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `AND`
    And,
    /// `OR`
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical negation (`NOT x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Concat => "&",
            Equal => "==",
            NotEqual => "<>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "NOT"),
        }
    }
}

/// Renders expressions in parenthesized prefix form, e.g. `(+ 1 (group x))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { name, value, .. } => write!(f, "(= {name} {value})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Logical { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Grouping { expr, .. } => write!(f, "(group {expr})"),
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Unary { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Variable { name, .. } => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for VarDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.initializer {
            Some(init) => write!(f, "({} {} {init})", self.declared, self.name),
            None => write!(f, "({} {})", self.declared, self.name),
        }
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, label: &str, block: &[Statement]) -> fmt::Result {
    write!(f, "({label}")?;
    for statement in block {
        write!(f, " {statement}")?;
    }
    write!(f, ")")
}

/// Renders statements in the same parenthesized form as [`Expr`].
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VarDeclaration(decl) => write!(f, "{decl}"),
            Self::VarDeclarationList { declarations, .. } => {
                write!(f, "(declare")?;
                for decl in declarations {
                    write!(f, " {decl}")?;
                }
                write!(f, ")")
            },
            Self::Expression { expr, .. } => write!(f, "(expr {expr})"),
            Self::Print { expr, .. } => write!(f, "(DISPLAY {expr})"),
            Self::Scan { targets, .. } => {
                write!(f, "(SCAN")?;
                for target in targets {
                    write!(f, " {}", target.name)?;
                }
                write!(f, ")")
            },
            Self::If { condition,
                       then_branch,
                       else_if_branches,
                       else_branch,
                       .. } => {
                write!(f, "(IF {condition} ")?;
                write_block(f, "then", then_branch)?;
                for branch in else_if_branches {
                    write!(f, " (ELSE IF {} ", branch.condition)?;
                    write_block(f, "then", &branch.then_branch)?;
                    write!(f, ")")?;
                }
                if let Some(block) = else_branch {
                    write!(f, " ")?;
                    write_block(f, "else", block)?;
                }
                write!(f, ")")
            },
            Self::While { condition, body, .. } => {
                write!(f, "(WHILE {condition} ")?;
                write_block(f, "do", body)?;
                write!(f, ")")
            },
        }
    }
}
