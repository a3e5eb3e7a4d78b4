use std::{fs, path::Path};

use tally::{error::CalcError, get_results};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        count += 1;
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(&path.with_extension("expected"));

        let results = get_results(&script).unwrap_or_else(|e| {
                                              panic!("Script {path:?} failed:\n{script}\nError: {e}")
                                          });

        assert_eq!(results.len(), expected.len(), "result count of {path:?}");
        for (i, (got, want)) in results.iter().zip(&expected).enumerate() {
            assert!((got - want).abs() <= 1e-9 * want.abs().max(1.0),
                    "statement {} of {path:?}: got {got}, expected {want}",
                    i + 1);
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn read_expected(path: &Path) -> Vec<f64> {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
                            .lines()
                            .filter(|line| !line.trim().is_empty())
                            .map(|line| line.trim().parse().expect("expected value is not a number"))
                            .collect()
}

fn assert_results(src: &str, expected: &[f64]) {
    match get_results(src) {
        Ok(results) => assert_eq!(results, expected, "results of {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match get_results(src) {
        Ok(results) => panic!("Script {src:?} succeeded with {results:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_follows_the_grammar() {
    assert_results("2+3*4;", &[14.0]);
    assert_results("(2+3)*4;", &[20.0]);
    assert_results("1-2-3; 2*3/4;", &[-4.0, 1.5]);
    assert_results("7/2;", &[3.5]);
}

#[test]
fn integer_operators() {
    assert_results("7%2; 5!; 0!;", &[1.0, 5.0 * 4.0 * 3.0 * 2.0, 1.0]);
    assert!(matches!(assert_failure("7.5%2;"), CalcError::Narrowing { .. }));
    assert!(matches!(assert_failure("2.5!;"), CalcError::Narrowing { .. }));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("1/0;"), CalcError::DivideByZero { .. }));
    assert!(matches!(assert_failure("1%0;"), CalcError::DivideByZero { .. }));
    assert!(matches!(assert_failure("pow(0,-1);"), CalcError::DivideByZero { .. }));
}

#[test]
fn functions() {
    assert_results("sqrt(4); pow(2,10); pow(2,-2);", &[2.0, 1024.0, 0.25]);
    assert!(matches!(assert_failure("sqrt(-1);"), CalcError::NegativeSqrt { .. }));
}

#[test]
fn sqrt_closes_its_own_parenthesis() {
    assert_results("sqrt(4)+1;", &[3.0]);
    assert_results("sqrt(4)*sqrt(4);", &[4.0]);
}

#[test]
fn declarations() {
    assert_results("let x = 5; x;", &[5.0, 5.0]);
    assert!(matches!(assert_failure("let x = 5; let x = 6;"),
                     CalcError::DuplicateName { .. }));
    assert!(matches!(assert_failure("let const = 1;"), CalcError::ReservedName { .. }));
}

#[test]
fn constants_are_protected() {
    assert!(matches!(assert_failure("const c = 1; c = 2;"),
                     CalcError::ImmutableAssignment { .. }));
    assert!(matches!(assert_failure("pi = 3;"), CalcError::ImmutableAssignment { .. }));
    assert!(matches!(assert_failure("e = 3;"), CalcError::ImmutableAssignment { .. }));
    assert!(matches!(assert_failure("let pi = 3;"), CalcError::DuplicateName { .. }));
}

#[test]
fn chained_assignment() {
    assert_results("let x = 1; let y = 1; let z = 1; x = y = z = 10; x; y; z;",
                   &[1.0, 1.0, 1.0, 10.0, 10.0, 10.0, 10.0]);
}

#[test]
fn malformed_concatenation_is_error() {
    assert!(matches!(assert_failure("(1+1)1;"), CalcError::OperandExpected { .. }));
}

#[test]
fn unknown_variable_is_error() {
    assert!(matches!(assert_failure("undeclared_name;"), CalcError::UndeclaredName { .. }));
}

#[test]
fn session_markers() {
    assert_results("1; quit; 2;", &[1.0]);
    assert_results("1; HELP; 2;", &[1.0, 2.0]);
    assert_results(";;; 3;;", &[3.0]);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_results("let LET = 2; LET * 2;", &[2.0, 4.0]);
    assert!(matches!(assert_failure("Sqrt(4);"), CalcError::UndeclaredName { .. }));
}

#[test]
fn statements_span_lines() {
    assert_results("let total =\n  1 +\n  2;\ntotal;", &[3.0, 3.0]);
}

#[test]
fn bad_characters_are_error() {
    assert!(matches!(assert_failure("2 $ 3;"), CalcError::BadToken { found: '$' }));
}

#[test]
fn vertical_tabs_are_whitespace() {
    assert_results("1\x0b+\x0b1;", &[2.0]);
}

#[test]
fn unit_base_powers_are_immediate() {
    assert_results("pow(1, 2147483647); pow(-1, 2147483647);", &[1.0, -1.0]);
}
