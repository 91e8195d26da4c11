use cde::{
    ast::Statement,
    error::{Diagnostic, Diagnostics, ParseError},
    interpreter::{lexer::scan, parser::core::parse},
};

fn parse_source(source: &str) -> (Option<Vec<Statement>>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);
    (statements, diagnostics)
}

/// Parses `body` inside a program frame and renders each statement.
fn render(body: &str) -> Vec<String> {
    let (statements, diagnostics) = parse_source(&format!("BEGIN CODE\n{body}\nEND CODE"));
    let statements = statements.unwrap_or_else(|| {
                                   let errors: Vec<String> =
                                       diagnostics.iter().map(ToString::to_string).collect();
                                   panic!("Parsing failed: {errors:?}")
                               });
    statements.iter().map(ToString::to_string).collect()
}

fn syntax_errors(source: &str) -> Vec<ParseError> {
    let (statements, diagnostics) = parse_source(source);
    assert!(statements.is_none(), "Parsing succeeded but was expected to fail");
    diagnostics.iter()
               .filter_map(|d| match d {
                   Diagnostic::Syntax(error) => Some(error.clone()),
                   _ => None,
               })
               .collect()
}

#[test]
fn factor_binds_tighter_than_term() {
    assert_eq!(render("DISPLAY: 1 + 2 * 3"), ["(DISPLAY (+ 1 (* 2 3)))"]);
    assert_eq!(render("DISPLAY: (1 + 2) * 3"), ["(DISPLAY (* (group (+ 1 2)) 3))"]);
}

#[test]
fn concatenation_and_modulo_share_the_term_tier() {
    assert_eq!(render("DISPLAY: 1 + 2 % 3"), ["(DISPLAY (% (+ 1 2) 3))"]);
    assert_eq!(render("DISPLAY: \"a\" & 1 + 2"), ["(DISPLAY (+ (& \"a\" 1) 2))"]);
}

#[test]
fn comparison_binds_tighter_than_equality() {
    assert_eq!(render("DISPLAY: 1 < 2 == TRUE"), ["(DISPLAY (== (< 1 2) TRUE))"]);
    assert_eq!(render("DISPLAY: a <> b"), ["(DISPLAY (<> a b))"]);
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(render("DISPLAY: a OR b AND c"), ["(DISPLAY (OR a (AND b c)))"]);
}

#[test]
fn unary_operators_nest() {
    assert_eq!(render("DISPLAY: NOT - 1"), ["(DISPLAY (NOT (- 1)))"]);
    assert_eq!(render("DISPLAY: - -x"), ["(DISPLAY (- (- x)))"]);
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(render("a = b = 3"), ["(expr (= a (= b 3)))"]);
}

#[test]
fn single_equals_compares_unless_the_left_side_is_a_variable() {
    assert_eq!(render("DISPLAY: 1 = 1"), ["(DISPLAY (== 1 1))"]);
    assert_eq!(render("x = y + 1 = 2"), ["(expr (= x (== (+ y 1) 2)))"]);
}

#[test]
fn single_equals_in_a_condition_assigns_to_a_variable() {
    let body = "IF (x = 5)\nBEGIN IF\nDISPLAY: x\nEND IF";
    assert_eq!(render(body), ["(IF (= x 5) (then (DISPLAY x)))"]);
    assert_eq!(render("WHILE (x == 5)\nBEGIN WHILE\nEND WHILE"),
               ["(WHILE (== x 5) (do))"]);
}

#[test]
fn invalid_assignment_target_is_reported() {
    let errors = syntax_errors("BEGIN CODE\na AND b = 3\nEND CODE");
    assert_eq!(errors, [ParseError::InvalidAssignmentTarget { line: 2 }]);
}

#[test]
fn declarations_bind_several_names() {
    assert_eq!(render("INT a, b = 2, c"), ["(declare (INT a) (INT b 2) (INT c))"]);
}

#[test]
fn statements_need_no_separator() {
    assert_eq!(render("FLOAT x = 1.0 x = 2"), ["(declare (FLOAT x 1.0))", "(expr (= x 2))"]);
}

#[test]
fn scan_lists_its_targets() {
    assert_eq!(render("SCAN: a, b"), ["(SCAN a b)"]);
}

#[test]
fn if_collects_else_if_branches_in_order() {
    let body = "IF (a > 1)
BEGIN IF
DISPLAY: 1
END IF
ELSE IF (a > 0)
BEGIN IF
DISPLAY: 2
END IF
ELSE
BEGIN IF
DISPLAY: 3
END IF";

    assert_eq!(render(body),
               ["(IF (> a 1) (then (DISPLAY 1)) (ELSE IF (> a 0) (then (DISPLAY 2))) (else \
                 (DISPLAY 3)))"]);
}

#[test]
fn while_body_is_a_block() {
    let body = "WHILE (i < 3)\nBEGIN WHILE\ni = i + 1\nEND WHILE";
    assert_eq!(render(body), ["(WHILE (< i 3) (do (expr (= i (+ i 1)))))"]);
}

#[test]
fn empty_program_parses() {
    let (statements, diagnostics) = parse_source("BEGIN CODE\nEND CODE");
    assert_eq!(statements, Some(Vec::new()));
    assert!(diagnostics.is_empty());
}

#[test]
fn program_must_open_with_begin_code() {
    let errors = syntax_errors("DISPLAY: 1\nEND CODE");
    assert_eq!(errors, [ParseError::ExpectedProgramBlock { line: 1 }]);
}

#[test]
fn program_must_close_with_end_code() {
    let errors = syntax_errors("BEGIN CODE\nDISPLAY: 1");
    assert_eq!(errors, [ParseError::UnterminatedProgramBlock { line: 2 }]);

    let errors = syntax_errors("BEGIN CODE");
    assert_eq!(errors, [ParseError::UnterminatedProgramBlock { line: 1 }]);
}

#[test]
fn unterminated_if_block_is_reported() {
    let errors = syntax_errors("BEGIN CODE\nIF (TRUE)\nBEGIN IF\nDISPLAY: 1\nEND CODE");
    assert_eq!(errors, [ParseError::UnterminatedBlock { block: "IF", line: 5 }]);
}

#[test]
fn parsing_recovers_at_the_next_statement() {
    let source = "BEGIN CODE
DISPLAY 1
INT = 3
DISPLAY: 4
END CODE";
    let errors = syntax_errors(source);
    let lines: Vec<usize> = errors.iter().map(ParseError::line).collect();

    assert_eq!(lines, [2, 3]);
    assert_eq!(errors[0].to_string(),
               "Error on line 2: SyntaxError: Expected ':' after DISPLAY, found '1'.");
}

#[test]
fn errors_inside_blocks_do_not_hide_later_ones() {
    let source = "BEGIN CODE
WHILE (TRUE)
BEGIN WHILE
DISPLAY: )
DISPLAY: 2
END WHILE
DISPLAY: (1
END CODE";
    let errors = syntax_errors(source);

    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], ParseError::ExpectedExpression { line: 4, .. }));
    assert!(matches!(errors[1], ParseError::UnexpectedToken { line: 8, .. }));
}
