use brisk::{
    Error, evaluate_source,
    error::RuntimeError,
    interpreter::renderer::core::RenderOptions,
    render_source, render_source_with,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn render(src: &str) -> String {
    render_source(src).unwrap_or_else(|e| panic!("Rendering failed: {e}\n{src}"))
}

/// The statement lines of a rendered program, between the timer setup and
/// the timer report, with the indentation of `main` removed.
fn body(code: &str) -> String {
    let mut lines = code.lines().skip_while(|line| !line.contains("clock_t start_time"));
    let indent = lines.next()
                      .map_or(0, |line| line.len() - line.trim_start().len());

    lines.take_while(|line| !line.contains("double elapsed_time"))
         .map(|line| format!("{}\n", line.get(indent..).unwrap_or_default()))
         .collect()
}

#[test]
fn program_frame() {
    let expected = indoc! {r#"
        #include <stdio.h>
        #include <time.h>

        int main() {
            clock_t start_time = clock();
            int x = 1;
            printf("%i\n", x);
            double elapsed_time = (double)(clock() - start_time) / CLOCKS_PER_SEC;
            printf("Executed in %f seconds.\n", elapsed_time);
            return 0;
        }
    "#};

    assert_eq!(render("let x = 1; x;"), expected.trim_end());
}

#[test]
fn empty_program_renders_frame_only() {
    assert_eq!(body(&render("")), "");
    assert!(render("").ends_with("    return 0;\n}"));
}

#[test]
fn standalone_expressions_print() {
    let expected = indoc! {r#"
        int x = 4;
        printf("5\n");
        printf("%i\n", 1 + 2);
        printf("%i\n", x);
    "#};

    assert_eq!(body(&render("let x = 4; 5; 1 + 2; x;")), expected);
}

#[test]
fn first_assignment_declares() {
    let expected = indoc! {"
            int x = 1;
            x = x + 1;
            int y = x * 2;
            x = y;
    "};

    assert_eq!(body(&render("let x = 1; let x = x + 1; let y = x * 2; let x = y;")),
               expected);
}

#[test]
fn parentheses_follow_grouping() {
    let src = indoc! {"
        let a = 1;
        let b = 2;
        let c = 3;
        let x = (a + b) * c;
        let y = a * b + c;
        let z = a - (b - c);
        let w = (a - b) - c;
        let v = a / (b * c);
    "};
    let code = render(src);

    assert!(code.contains("int x = (a + b) * c;"), "{code}");
    assert!(code.contains("int y = a * b + c;"), "{code}");
    assert!(code.contains("int z = a - (b - c);"), "{code}");
    assert!(code.contains("int w = a - b - c;"), "{code}");
    assert!(code.contains("int v = a / (b * c);"), "{code}");
}

#[test]
fn unary_minus() {
    let code = render("let a = 2; let b = -a; let c = -3;");

    assert!(code.contains("int b = -1 * a;"), "{code}");
    assert!(code.contains("int c = -3;"), "{code}");
}

#[test]
fn ternary_assignment() {
    let code = render("let a = 4; let x = a > 2 ? a : 0;");
    assert!(code.contains("int x = a > 2 ? a : 0;"), "{code}");
}

#[test]
fn conditional_chain() {
    let src = indoc! {"
        let x = 5;
        if x < 3 {
            1;
        } elif x < 6 {
            x;
        } elif x < 9 {
            let x = 0;
        } else {
            4;
        }
    "};
    let expected = indoc! {r#"
            int x = 5;
            if (x < 3) {
                printf("1\n");
            }
            else if (x < 6) {
                printf("%i\n", x);
            }
            else if (x < 9) {
                x = 0;
            }
            else {
                printf("4\n");
            }
    "#};

    assert_eq!(body(&render(src)), expected);
}

#[test]
fn repeat_becomes_counted_loop() {
    let src = indoc! {"
        let n = 3;
        repeat n {
            n;
        }
    "};
    let expected = indoc! {r#"
            int n = 3;
            for (int _r0 = 0; _r0 < 3; _r0++) {
                printf("%i\n", n);
            }
    "#};

    assert_eq!(body(&render(src)), expected);
}

#[test]
fn loop_counters_are_unique() {
    let code = render("repeat 1 { 1; } repeat 2 { 2; }");

    assert!(code.contains("for (int _r0 = 0; _r0 < 1; _r0++) {"), "{code}");
    assert!(code.contains("for (int _r1 = 0; _r1 < 2; _r1++) {"), "{code}");
}

#[test]
fn loop_counter_skips_program_names() {
    let code = render("let _r0 = 2; repeat _r0 { _r0; }");
    assert!(code.contains("for (int _r1 = 0; _r1 < 2; _r1++) {"), "{code}");
}

#[test]
fn negative_bound_renders_zero_iterations() {
    let code = render("repeat -4 { 1; }");
    assert!(code.contains("_r0 < 0;"), "{code}");
}

#[test]
fn custom_indent_step() {
    let code = render_source_with("repeat 1 { if 1 < 2 { 5; } }",
                                  RenderOptions { indent_step: 2 }).unwrap();
    let expected = indoc! {r#"
          for (int _r0 = 0; _r0 < 1; _r0++) {
            if (1 < 2) {
              printf("5\n");
            }
          }
    "#};

    assert_eq!(body(&code), expected);
    assert!(code.contains("\n  clock_t start_time = clock();\n"));
}

#[test]
fn division_truncates_only_in_c() {
    let src = "let x = 7 / 2; x;";

    let code = render(src);
    assert!(code.contains("int x = 7 / 2;"), "{code}");

    let mut out = Vec::new();
    evaluate_source(src, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3.5\n");
}

#[test]
fn unresolved_names_fail_rendering() {
    let err = render_source("let x = 1;\ny;").unwrap_err();
    assert_eq!(err.to_string(), "Variable 'y' not found (2:1)");
}

#[test]
fn untaken_ternary_branch_must_be_bound() {
    let src = "let x = 1 < 2 ? 10 : missing;";

    assert!(evaluate_source(src, &mut Vec::new()).is_ok());
    assert!(matches!(render_source(src),
                     Err(Error::Runtime(RuntimeError::UnresolvedIdentifier { .. }))));
}
