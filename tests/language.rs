use std::fs::{self};

use pratt_calc::{
    Calculator,
    config::Settings,
    error::{CalcError, ErrorKind},
    evaluate,
};
use walkdir::WalkDir;

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let (expr, expected) = line.rsplit_once(" => ")
                                       .unwrap_or_else(|| {
                                           panic!("{path:?}:{}: missing ' => '", line_no + 1)
                                       });
            check_case(expr.trim(), expected.trim(), &format!("{path:?}:{}", line_no + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn check_case(expr: &str, expected: &str, location: &str) {
    let result = evaluate(expr);

    if let Some(kind) = expected.strip_prefix("error ") {
        match result {
            Ok(v) => panic!("{location}: '{expr}' gave {v}, expected error {kind}"),
            Err(report) => {
                assert!(report.kinds().any(|k| format!("{k:?}") == kind),
                        "{location}: '{expr}' failed with {:?}, expected {kind}",
                        report.kinds().collect::<Vec<_>>());
            },
        }
        return;
    }

    let want: f64 = expected.parse()
                            .unwrap_or_else(|e| panic!("{location}: bad value {expected}: {e}"));
    match result {
        Ok(got) => assert_close(got, want, &format!("{location}: '{expr}'")),
        Err(report) => panic!("{location}: '{expr}' failed:\n{report}"),
    }
}

fn assert_close(got: f64, want: f64, context: &str) {
    let tolerance = 1e-9 * want.abs().max(1.0);
    assert!((got - want).abs() <= tolerance, "{context}: got {got}, expected {want}");
}

fn assert_value(expr: &str, want: f64) {
    match evaluate(expr) {
        Ok(got) => assert_close(got, want, expr),
        Err(e) => panic!("'{expr}' failed: {e}"),
    }
}

fn assert_errors(expr: &str, kinds: &[ErrorKind]) {
    match evaluate(expr) {
        Ok(v) => panic!("'{expr}' gave {v} but was expected to fail"),
        Err(report) => assert_eq!(report.kinds().collect::<Vec<_>>(), kinds, "'{expr}'"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("2^3^2", 512.0);
    assert_value("-2^2", -4.0);
    assert_value("100/10/2", 5.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("2(3)", 6.0);
    assert_value("(2)(3)", 6.0);
    assert_value("2pi", 2.0 * std::f64::consts::PI);
    assert_value("piexp", std::f64::consts::PI * std::f64::consts::E);
    assert_value("3!2", 12.0);
}

#[test]
fn factorial() {
    assert_value("5!", 120.0);
    assert_value("0!", 1.0);
    assert_value("170!", 7.257_415_615_307_994e306);
    assert_errors("-1!", &[ErrorKind::DomainError]);
}

#[test]
fn degree_trigonometry() {
    assert_value("sin(30)", 0.5);
    assert_value("cos 60", 0.5);
    assert_value("atan(1)", 45.0);
    assert_value("radtodeg(pi)", 180.0);
}

#[test]
fn result_level_errors() {
    assert_errors("1/0", &[ErrorKind::NonFinite]);
    assert_errors("-1/0", &[ErrorKind::NonFinite]);
    assert_errors("0/0", &[ErrorKind::NotANumber]);
    assert_errors("sqrt(-1)", &[ErrorKind::NotANumber]);
    assert_errors("171!", &[ErrorKind::NonFinite]);
}

#[test]
fn validation_errors() {
    assert_errors("", &[ErrorKind::EmptyExpression]);
    assert_errors("  \t", &[ErrorKind::EmptyExpression]);
    assert_errors("2 # 3 & 4", &[ErrorKind::InvalidCharacter, ErrorKind::InvalidCharacter]);
    assert_errors("1.2.3 + .5", &[ErrorKind::MalformedNumber, ErrorKind::MalformedNumber]);
    assert_errors("foo(1)", &[ErrorKind::UnknownIdentifier]);
    assert_errors("1 2", &[ErrorKind::MissingOperator]);
}

#[test]
fn bracket_errors() {
    assert_errors("()", &[ErrorKind::EmptyParentheses]);
    assert_errors("(2+3",
                  &[ErrorKind::MismatchedBrackets, ErrorKind::UnclosedParenthesis]);
    assert!(evaluate("(2+3))").unwrap_err()
                              .contains(ErrorKind::MismatchedBrackets));
}

#[test]
fn invalid_characters_stop_before_tokenizing() {
    let report = evaluate("foo $").unwrap_err();
    assert_eq!(report.errors(),
               [CalcError::InvalidCharacter { character: '$',
                                              position:  4, }]);
}

#[test]
fn evaluation_is_repeatable() {
    let expr = "sqrt(2) * 3! / (1 + exp) % 4";
    assert_eq!(evaluate(expr).unwrap(), evaluate(expr).unwrap());
}

#[test]
fn seeded_random_is_reproducible() {
    let settings = Settings::default().with_seed(Some(99));
    let mut a = Calculator::with_settings(settings);
    let mut b = Calculator::with_settings(settings);

    for _ in 0..8 {
        let x = a.evaluate("rand()").unwrap();
        assert!((0.0..1.0).contains(&x));
        assert_eq!(x, b.evaluate("rand").unwrap());
    }
}

#[test]
fn depth_limit_is_configurable() {
    let expr = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    assert_value(&expr, 1.0);

    let mut shallow = Calculator::with_settings(Settings::default().with_max_depth(10));
    let report = shallow.evaluate(&expr).unwrap_err();
    assert_eq!(report.kinds().collect::<Vec<_>>(), [ErrorKind::NestingTooDeep]);
}
