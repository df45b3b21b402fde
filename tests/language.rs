use std::fs;

use brisk::{
    Error,
    ast::Position,
    evaluate_source,
    error::{LexicalError, ParseError, RuntimeError},
};
use indoc::indoc;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

fn run(src: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    evaluate_source(src, &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        Ok(output) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}\n{src}");
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail, printed:\n{output}"),
        Err(e) => e,
    }
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "bk"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        count += 1;
        match run(&source) {
            Ok(output) => assert_eq!(output, expected, "script {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", "");
    assert_output("# only a comment\n", "");
}

#[test]
fn standalone_expressions_print_in_order() {
    assert_output("5; 1 + 2; 6 * 7;", "5\n3\n42\n");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("let x = 1 + 2; x;", "3\n");
    assert_output("let x = 7 * 9; x;", "63\n");
    assert_output("let x = 8 - 5; x;", "3\n");
    assert_output("let x = 8 - 13; x;", "-5\n");
}

#[test]
fn reassignment_replaces_value() {
    assert_output("let x = 1; let x = x + 1; let x = x * 10; x;", "20\n");
}

#[test]
fn division_is_real_valued() {
    assert_output("7 / 2;", "3.5\n");
    assert_output("6 / 2;", "3.0\n");
    assert_output("let h = 7 / 2; h * 2;", "7.0\n");
}

#[test]
fn division_by_zero_is_an_error() {
    let err = assert_failure("let x = 0; 4 / x;");
    assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn integer_overflow_is_an_error() {
    let err = assert_failure("let x = 9223372036854775807; x + 1;");
    assert!(matches!(err, Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("1 + 2 * 3;", "7\n");
    assert_output("(1 + 2) * 3;", "9\n");
    assert_output("10 - 4 - 3;", "3\n");
    assert_output("10 - (4 - 3);", "9\n");
}

#[test]
fn unary_signs() {
    assert_output("let x = -3; x;", "-3\n");
    assert_output("let x = 4; let y = -x; y;", "-4\n");
    assert_output("let y = +5; y;", "5\n");
    assert_output("2 * -3;", "-6\n");
}

#[test]
fn ternary_selects_branch() {
    assert_output("let x = 1 < 2 ? 10 : 20; x;", "10\n");
    assert_output("let x = 1 > 2 ? 10 : 20; x;", "20\n");
    assert_output("let n = 0; let x = n ? 1 : 2; x;", "2\n");
}

#[test]
fn ternary_skips_untaken_branch() {
    // 'missing' is never bound, but the branch that names it does not run.
    assert_output("let x = 1 < 2 ? 10 : missing; x;", "10\n");
}

#[test]
fn if_elif_else_chain() {
    let src = indoc! {"
        let x = 5;
        if x < 3 {
            1;
        } elif x < 6 {
            2;
        } elif x < 9 {
            3;
        } else {
            4;
        }
    "};
    assert_output(src, "2\n");

    assert_output("let x = 10; if x < 3 { 1; } elif x < 6 { 2; } else { 4; }", "4\n");
    assert_output("let x = 10; if x < 3 { 1; }", "");
}

#[test]
fn repeat_runs_block_n_times() {
    assert_output("let s = 0; repeat 4 { let s = s + 2; } s;", "8\n");
    assert_output("repeat 0 { 1; }", "");
    assert_output("repeat -2 { 1; }", "");
}

#[test]
fn repeat_bound_is_evaluated_once() {
    let src = indoc! {"
        let n = 3;
        repeat n {
            n;
            let n = n - 1;
        }
    "};
    assert_output(src, "3\n2\n1\n");
}

#[test]
fn repeat_accepts_whole_reals_only() {
    assert_output("repeat 4 / 2 { 1; }", "1\n1\n");

    let err = assert_failure("repeat 7 / 2 { 1; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::InvalidRepeatBound { .. })));
}

#[test]
fn comparisons_work_as_conditions() {
    assert_success("if 1 < 2 { 1; }");
    assert_success("if 7 / 2 > 3 { 1; }");
    assert_output("if 7 / 2 > 3 { 1; } else { 0; }", "1\n");
}

#[test]
fn nested_blocks() {
    let src = indoc! {"
        let total = 0;
        repeat 3 {
            repeat 2 {
                let total = total + 1;
            }
        }
        if total > 5 {
            total;
        }
    "};
    assert_output(src, "6\n");
}

#[test]
fn unresolved_identifier_reports_name_and_position() {
    let err = assert_failure("let x = 1;\nx + y;");
    assert!(matches!(&err,
                     Error::Runtime(RuntimeError::UnresolvedIdentifier { name, .. }) if name == "y"));
    assert_eq!(err.to_string(), "Variable 'y' not found (2:5)");
}

#[test]
fn output_before_runtime_error_is_kept() {
    let mut out = Vec::new();
    let result = evaluate_source("1; 2; y;", &mut out);

    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
}

#[test]
fn reserved_words_cannot_be_names() {
    for src in ["let and = 1;", "let or = 1;", "let not = 1;", "let if = 1;"] {
        let err = assert_failure(src);
        assert!(matches!(err, Error::Parse(ParseError::IdentifierReserved { .. })),
                "{src}: {err}");
    }

    let err = assert_failure("let x = 1; let y = x and 2;");
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn chained_comparisons_are_rejected() {
    let err = assert_failure("let x = 1 < 2 < 3 ? 1 : 0;");
    assert!(matches!(err, Error::Parse(_)));

    let err = assert_failure("if 1 < 2 < 3 { 1; }");
    assert_eq!(err.to_string(), "Expected '{', got '<' (1:10)");
}

#[test]
fn bare_comparison_cannot_be_assigned() {
    let err = assert_failure("let b = 1 < 2;");
    assert!(matches!(&err,
                     Error::Parse(ParseError::ComparisonAssignment { name, .. }) if name == "b"));
}

#[test]
fn statements_must_start_an_expression_or_keyword() {
    for src in ["-5;", ";", "else { 1; }", "} 1;"] {
        let err = assert_failure(src);
        assert!(matches!(err, Error::Parse(ParseError::InvalidStatement { .. })),
                "{src}: {err}");
    }
}

#[test]
fn missing_semicolon_reports_expected_token() {
    let err = assert_failure("let x = 1\nx;");
    assert_eq!(err.to_string(), "Expected ';', got 'x' (2:1)");
}

#[test]
fn unterminated_block_is_an_error() {
    let err = assert_failure("repeat 2 { 1;");
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn unexpected_character_reports_position() {
    let Error::Lexical(err) = assert_failure("let x = 1;\nlet y = x $ 2;") else {
        panic!("expected a lexical error");
    };
    assert_eq!(err,
               LexicalError::UnexpectedCharacter { character: '$',
                                                   position:  Position::new(2, 11), });
    assert_eq!(err.to_string(), "'$' not accepted (2:11)");
}
