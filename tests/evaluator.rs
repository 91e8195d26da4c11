use cde::{
    ast::{BinaryOperator, DeclaredType, Expr, LiteralValue, Statement, VarDecl},
    error::{Diagnostics, RuntimeError},
    execute,
    interpreter::{evaluator::core::Interpreter, value::Value},
};

fn literal(value: impl Into<LiteralValue>) -> Expr {
    Expr::Literal { value: value.into(),
                    line:  1, }
}

fn declaration(declared: DeclaredType, name: &str, initializer: Option<Expr>) -> Statement {
    Statement::VarDeclaration(VarDecl { declared,
                                        name: name.to_string(),
                                        initializer,
                                        line: 1 })
}

fn interpreter() -> Interpreter<&'static [u8], Vec<u8>> {
    Interpreter::new(&b""[..], Vec::new())
}

#[test]
fn single_declarations_define_a_binding() {
    let mut interpreter = interpreter();
    let statement = declaration(DeclaredType::Float, "ratio", Some(literal(0.5)));

    assert_eq!(interpreter.execute(&statement), Ok(None));

    let binding = interpreter.environment().binding("ratio").unwrap();
    assert_eq!(binding.declared, DeclaredType::Float);
    assert_eq!(binding.value, Value::Float(0.5));
}

#[test]
fn declaration_checks_the_initializer_type() {
    let mut interpreter = interpreter();
    let statement = declaration(DeclaredType::Char, "c", Some(literal("text")));

    assert_eq!(interpreter.execute(&statement),
               Err(RuntimeError::IncompatibleType { name:     "c".into(),
                                                    declared: DeclaredType::Char,
                                                    found:    "STRING",
                                                    line:     1, }));
    assert!(interpreter.environment().is_empty());
}

#[test]
fn expressions_evaluate_without_statements() {
    let mut interpreter = interpreter();
    let expr = Expr::Binary { left:  Box::new(literal(6_i64)),
                              op:    BinaryOperator::Mul,
                              right: Box::new(literal(7_i64)),
                              line:  1, };

    assert_eq!(interpreter.eval(&expr), Ok(Value::Integer(42)));
}

#[test]
fn interpret_reports_the_first_runtime_error() {
    let mut interpreter = interpreter();
    let mut diagnostics = Diagnostics::new();
    let statements = [declaration(DeclaredType::Int, "a", None),
                      declaration(DeclaredType::Int, "a", None),
                      Statement::Print { expr: literal(1_i64),
                                         line: 1, }];

    assert_eq!(interpreter.interpret(&statements, &mut diagnostics), None);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_runtime_error());
    assert!(interpreter.output().is_empty());
}

#[test]
fn variables_outlive_a_single_execute_call() {
    let mut interpreter = interpreter();
    let mut diagnostics = Diagnostics::new();

    execute("BEGIN CODE\nINT total = 40\nEND CODE", &mut interpreter, &mut diagnostics);
    let value = execute("BEGIN CODE\ntotal = total + 2\nEND CODE",
                        &mut interpreter,
                        &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert_eq!(value, Some(Value::Integer(42)));
    assert_eq!(interpreter.environment().len(), 1);
}

#[test]
fn scan_reads_from_the_injected_input() {
    let mut interpreter = Interpreter::new(&b"x\n"[..], Vec::new());
    let mut diagnostics = Diagnostics::new();

    execute("BEGIN CODE\nCHAR letter\nSCAN: letter\nDISPLAY: letter & letter\nEND CODE",
            &mut interpreter,
            &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "letter: xx\n");
}
