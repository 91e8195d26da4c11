use cde::{
    ast::LiteralValue,
    error::{Diagnostic, Diagnostics, LexError},
    interpreter::{
        lexer::scan,
        token::{Token, TokenKind},
    },
};

fn scan_source(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    (tokens, diagnostics)
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan_source(source).0.iter().map(|t| t.kind).collect()
}

fn literals(source: &str) -> Vec<LiteralValue> {
    scan_source(source).0.into_iter().filter_map(|t| t.literal).collect()
}

#[test]
fn block_delimiters_are_two_tokens() {
    assert_eq!(kinds("BEGIN CODE END IF BEGIN WHILE"),
               [TokenKind::Begin,
                TokenKind::Code,
                TokenKind::End,
                TokenKind::If,
                TokenKind::Begin,
                TokenKind::While,
                TokenKind::Eof]);
}

#[test]
fn operators_prefer_the_longest_match() {
    assert_eq!(kinds("<= <> < >= > == ="),
               [TokenKind::LessEqual,
                TokenKind::NotEqual,
                TokenKind::Less,
                TokenKind::GreaterEqual,
                TokenKind::Greater,
                TokenKind::EqualEqual,
                TokenKind::Assign,
                TokenKind::Eof]);
}

#[test]
fn literals_are_decoded() {
    assert_eq!(literals(r#"42 3.5 'c' "hi" [#&] $"#),
               [LiteralValue::Integer(42),
                LiteralValue::Float(3.5),
                LiteralValue::Char('c'),
                LiteralValue::Str("hi".into()),
                LiteralValue::Str("#&".into()),
                LiteralValue::Str("\n".into())]);
}

#[test]
fn quoted_true_and_false_are_booleans() {
    assert_eq!(kinds(r#""TRUE" "FALSE" "true" TRUE NIL"#),
               [TokenKind::True,
                TokenKind::False,
                TokenKind::StringLiteral,
                TokenKind::True,
                TokenKind::Nil,
                TokenKind::Eof]);
    assert_eq!(literals(r#""FALSE""#), [LiteralValue::Bool(false)]);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(kinds("DISPLAY display Display_2 ñame"),
               [TokenKind::Display,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof]);
}

#[test]
fn newlines_advance_the_line_counter() {
    let (tokens, _) = scan_source("INT a\nINT b\n\nDISPLAY: a");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();

    assert_eq!(lines, [1, 1, 2, 2, 4, 4, 4, 4]);
}

#[test]
fn multi_line_strings_keep_line_numbers_in_step() {
    let (tokens, _) = scan_source("\"a\nb\"\nx");

    assert_eq!(tokens[0].literal, Some(LiteralValue::Str("a\nb".into())));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn comments_run_to_the_end_of_the_line() {
    assert_eq!(kinds("DISPLAY: 1 # DISPLAY: 2\nx"),
               [TokenKind::Display,
                TokenKind::Colon,
                TokenKind::IntegerLiteral,
                TokenKind::Identifier,
                TokenKind::Eof]);
}

#[test]
fn unexpected_characters_are_reported_and_skipped() {
    let (tokens, diagnostics) = scan_source("INT a ~ = @ 1");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               [TokenKind::Int,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntegerLiteral,
                TokenKind::Eof]);
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.has_syntax_error());
    assert_eq!(diagnostics.iter().next(),
               Some(&Diagnostic::Lexical { error: LexError::UnexpectedCharacter('~'),
                                           line:  1, }));
}

#[test]
fn malformed_literals_are_lexical_errors() {
    let cases = [("''", LexError::EmptyChar),
                 ("DISPLAY: \"abc", LexError::UnterminatedString),
                 ("DISPLAY: [abc", LexError::UnterminatedEscape),
                 ("'a", LexError::UnterminatedChar),
                 ("3.", LexError::UnexpectedCharacter('.')),
                 ("3.x", LexError::UnexpectedCharacter('.')),
                 ("99999999999999999999", LexError::IntegerTooLarge)];

    for (source, expected) in cases {
        let (tokens, diagnostics) = scan_source(source);
        let errors: Vec<&LexError> = diagnostics.iter()
                                                .filter_map(|d| match d {
                                                    Diagnostic::Lexical { error, .. } => {
                                                        Some(error)
                                                    },
                                                    _ => None,
                                                })
                                                .collect();

        assert_eq!(errors, [&expected], "source: {source}");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }
}

#[test]
fn a_trailing_dot_is_not_part_of_a_number() {
    let (tokens, diagnostics) = scan_source("3.");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::IntegerLiteral, TokenKind::Eof]);
    assert_eq!(tokens[0].literal, Some(LiteralValue::Integer(3)));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn char_constants_hold_exactly_one_character() {
    let (_, diagnostics) = scan_source("'ab'");

    assert_eq!(diagnostics.iter().next(),
               Some(&Diagnostic::Lexical { error: LexError::UnterminatedChar,
                                           line:  1, }));
    assert!(diagnostics.has_syntax_error());
}

#[test]
fn error_messages_carry_the_line() {
    let (_, diagnostics) = scan_source("\n\n?");
    let message = diagnostics.iter().next().map(ToString::to_string);

    assert_eq!(message.as_deref(),
               Some("Error on line 3: LexicalError: Unexpected character '?'."));
}
