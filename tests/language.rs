use std::fs;

use cde::{
    Outcome,
    ast::DeclaredType,
    error::{Diagnostic, RuntimeError},
    get_output,
    interpreter::value::Value,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "code"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        let outcome = get_output(&source, &input);
        assert!(outcome.diagnostics.is_empty(),
                "Program {path:?} reported errors: {:?}",
                errors(&outcome));
        assert_eq!(outcome.output, expected, "Program {path:?} printed unexpected output");
        count += 1;
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn run(body: &str) -> Outcome {
    get_output(&format!("BEGIN CODE\n{body}\nEND CODE"), "")
}

fn errors(outcome: &Outcome) -> Vec<String> {
    outcome.diagnostics.iter().map(ToString::to_string).collect()
}

fn assert_output(body: &str, expected: &str) {
    let outcome = run(body);
    assert!(outcome.diagnostics.is_empty(), "Program failed: {:?}", errors(&outcome));
    assert_eq!(outcome.output, expected);
}

fn runtime_error(outcome: &Outcome) -> RuntimeError {
    match outcome.diagnostics.iter().last() {
        Some(Diagnostic::Runtime(error)) => error.clone(),
        other => panic!("Expected a runtime error, found {other:?}"),
    }
}

fn assert_runtime_error(body: &str) -> RuntimeError {
    runtime_error(&run(body))
}

#[test]
fn arithmetic_follows_precedence() {
    assert_output("INT x = 1 + 2 * 3\nDISPLAY: x", "7\n");
    assert_output("DISPLAY: (1 + 2) * 3", "9\n");
    assert_output("DISPLAY: 10 - 4 - 3", "3\n");
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_output("DISPLAY: 7 / 2", "3\n");
    assert_output("DISPLAY: -7 / 2", "-3\n");
    assert_output("DISPLAY: -7 % 3", "-1\n");
}

#[test]
fn floats_drop_a_trailing_zero_fraction() {
    assert_output("FLOAT f = 1.5 + 1.5\nDISPLAY: f", "3\n");
    assert_output("DISPLAY: 5.0 / 2.0", "2.5\n");
}

#[test]
fn concatenation_uses_display_forms() {
    assert_output("DISPLAY: \"a\" & 1 & TRUE & 'c' & 2.0", "a1Truec2\n");
    assert_output("DISPLAY: \"a\" & $ & \"b\"", "a\nb\n");
    assert_output("DISPLAY: [#] & \"x\"", "#x\n");
}

#[test]
fn uninitialized_variables_hold_nil() {
    assert_output("INT n\nDISPLAY: n", "nil\n");
}

#[test]
fn booleans_display_capitalised() {
    assert_output("DISPLAY: 1 = 1", "True\n");
    assert_output("BOOL b = 1 == 1\nDISPLAY: b\nDISPLAY: b & \"\"", "True\nTrue\n");
    assert_output("DISPLAY: NOT TRUE & \"!\"", "False!\n");
}

#[test]
fn single_equals_condition_assigns_before_branching() {
    let body = "INT x = 3
IF (x = 5)
BEGIN IF
DISPLAY: \"eq\"
END IF
DISPLAY: x";
    assert_output(body, "eq\n5\n");
}

#[test]
fn quoted_booleans_are_booleans() {
    assert_output("BOOL b = \"TRUE\"\nDISPLAY: NOT b", "False\n");
}

#[test]
fn equality_compares_values_of_any_type() {
    assert_output("DISPLAY: 1 == 1.0", "False\n");
    assert_output("DISPLAY: 'a' <> 'b'", "True\n");
    assert_output("DISPLAY: 1 = 1", "True\n");
    assert_output("DISPLAY: \"x\" & 1 == \"x1\"", "True\n");
}

#[test]
fn logical_operators_short_circuit() {
    assert_output("INT a = 0\nDISPLAY: TRUE OR (a = 1) == 1\nDISPLAY: a", "True\n0\n");
    assert_output("INT a = 0\nDISPLAY: FALSE AND (a = 1) == 1\nDISPLAY: a", "False\n0\n");
    assert_output("INT a = 0\nDISPLAY: TRUE AND (a = 1) == 1\nDISPLAY: a", "True\n1\n");
}

#[test]
fn logical_operators_return_an_operand() {
    assert_output("DISPLAY: 5 OR FALSE", "5\n");
    assert_output("DISPLAY: NIL AND 1", "nil\n");
    assert_output("DISPLAY: NOT 0", "False\n");
}

#[test]
fn blocks_share_the_program_scope() {
    let body = "IF (TRUE)
BEGIN IF
INT inner = 5
END IF
DISPLAY: inner";
    assert_output(body, "5\n");
}

#[test]
fn only_the_first_truthy_branch_runs() {
    let body = "IF (FALSE)
BEGIN IF
DISPLAY: 1
END IF
ELSE IF (TRUE)
BEGIN IF
DISPLAY: 2
END IF
ELSE IF (TRUE)
BEGIN IF
DISPLAY: 3
END IF
ELSE
BEGIN IF
DISPLAY: 4
END IF";
    assert_output(body, "2\n");
}

#[test]
fn else_runs_when_nothing_matched() {
    let body = "IF (1 > 2)\nBEGIN IF\nDISPLAY: 1\nEND IF\nELSE\nBEGIN IF\nDISPLAY: 2\nEND IF";
    assert_output(body, "2\n");
}

#[test]
fn while_rechecks_its_condition() {
    assert_output("WHILE (FALSE)\nBEGIN WHILE\nDISPLAY: 1\nEND WHILE", "");

    let body = "INT i = 0
WHILE (i < 3)
BEGIN WHILE
DISPLAY: i
i = i + 1
END WHILE";
    assert_output(body, "0\n1\n2\n");
}

#[test]
fn empty_program_prints_nothing() {
    let outcome = get_output("BEGIN CODE\nEND CODE", "");
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.output, "");
    assert_eq!(outcome.last_value, None);
}

#[test]
fn last_expression_value_is_returned() {
    let outcome = run("INT x = 2\nx * 5\nDISPLAY: x");
    assert_eq!(outcome.last_value, Some(Value::Integer(10)));
}

#[test]
fn scan_decodes_each_line() {
    let source = "BEGIN CODE
INT i
FLOAT f
CHAR c
BOOL b
SCAN: i, f, c, b
DISPLAY: i & \" \" & f & \" \" & c & \" \" & b
END CODE";
    let outcome = get_output(source, "5\n2.5\nq\ntrue\n");

    assert!(outcome.diagnostics.is_empty(), "{:?}", errors(&outcome));
    assert_eq!(outcome.output, "i: f: c: b: 5 2.5 q True\n");
}

#[test]
fn scan_rejects_input_of_the_wrong_type() {
    let outcome = get_output("BEGIN CODE\nINT i\nSCAN: i\nEND CODE", "abc\n");
    assert_eq!(runtime_error(&outcome),
               RuntimeError::IncompatibleType { name:     "i".into(),
                                                declared: DeclaredType::Int,
                                                found:    "nil",
                                                line:     3, });

    let outcome = get_output("BEGIN CODE\nCHAR c\nSCAN: c\nEND CODE", "");
    assert!(matches!(runtime_error(&outcome), RuntimeError::IncompatibleType { .. }));
}

#[test]
fn mixed_numeric_operands_are_a_type_error() {
    assert!(matches!(assert_runtime_error("DISPLAY: 1 + 1.0"), RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_error("DISPLAY: 1 < 2.0"), RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_error("DISPLAY: 5.0 % 2.0"), RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_error("DISPLAY: -\"a\""),
                     RuntimeError::ExpectedNumber { line: 2 }));
}

#[test]
fn zero_divisor_is_a_distinct_error() {
    let error = assert_runtime_error("DISPLAY: 1 / 0");
    assert_eq!(error, RuntimeError::DivisionByZero { line: 2 });
    assert_eq!(error.to_string(),
               "Error on line 2: ZeroDivisionError: Divisor must be non-zero.");

    assert_eq!(assert_runtime_error("DISPLAY: 1 % 0"), RuntimeError::DivisionByZero { line: 2 });
    assert_eq!(assert_runtime_error("DISPLAY: 1.0 / 0.0"),
               RuntimeError::DivisionByZero { line: 2 });
}

#[test]
fn integer_overflow_is_an_error() {
    let body = "INT big = 9223372036854775807\nDISPLAY: big + 1";
    assert_eq!(assert_runtime_error(body), RuntimeError::Overflow { line: 3 });
}

#[test]
fn declared_types_are_enforced() {
    assert_eq!(assert_runtime_error("FLOAT x = 1.0 x = 2"),
               RuntimeError::IncompatibleType { name:     "x".into(),
                                                declared: DeclaredType::Float,
                                                found:    "INT",
                                                line:     2, });
    assert!(matches!(assert_runtime_error("INT x = 1.5"),
                     RuntimeError::IncompatibleType { .. }));
}

#[test]
fn names_are_declared_once_and_before_use() {
    assert_eq!(assert_runtime_error("INT a\nINT a"),
               RuntimeError::VariableRedefinition { name:     "a".into(),
                                                    declared: DeclaredType::Int,
                                                    line:     3, });
    assert_eq!(assert_runtime_error("b = 1"),
               RuntimeError::UnknownVariable { name: "b".into(),
                                               line: 2, });
}

#[test]
fn runtime_error_stops_the_run() {
    let outcome = run("DISPLAY: 1\nDISPLAY: 1 / 0\nDISPLAY: 3");

    assert_eq!(outcome.output, "1\n");
    assert!(outcome.diagnostics.has_runtime_error());
    assert_eq!(outcome.diagnostics.len(), 1);
}

#[test]
fn syntax_errors_prevent_execution() {
    let outcome = run("DISPLAY: 1\nDISPLAY 2");
    assert_eq!(outcome.output, "");
    assert!(outcome.diagnostics.has_syntax_error());
    assert!(!outcome.diagnostics.has_runtime_error());

    let outcome = run("DISPLAY: 1 ~");
    assert_eq!(outcome.output, "");
    assert!(outcome.diagnostics.has_syntax_error());
}
