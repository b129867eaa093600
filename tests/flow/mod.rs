use std::cell::Cell;

use outcome_rail::{attempt, sequence, Outcome};

fn parse(input: &str) -> Outcome<i64, String> {
    Outcome::from_result(input.parse().map_err(|_| format!("bad number: {input:?}")))
}

#[test]
fn test_sequence_runs_every_step_on_success() {
    let total = sequence(|| {
        let a = attempt!(parse("20"));
        let b = attempt!(parse("22"));
        Outcome::ok(a + b)
    });
    assert_eq!(total.unwrap(), 42);
}

#[test]
fn test_sequence_aborts_at_first_failure() {
    let tail_ran = Cell::new(false);

    let total = sequence(|| {
        let a = attempt!(parse("1"));
        let b = attempt!(parse("oops"));
        tail_ran.set(true);
        Outcome::ok(a + b)
    });

    assert!(!tail_ran.get());
    assert_eq!(total.unwrap_err(), "bad number: \"oops\"");
}

#[test]
fn test_propagated_failure_is_preserved_unchanged() {
    let failing = || -> Outcome<i64, String> {
        parse("oops").context("reading the port setting")
    };

    let out = sequence(|| {
        let value = attempt!(failing());
        Outcome::ok(value * 2)
    });

    let report = out.into_failure().unwrap();
    assert_eq!(*report.core_error(), "bad number: \"oops\"");
    assert_eq!(report.note_count(), 1);
    let rendered = report.rendered(outcome_rail::ReportStyle::Standard);
    assert_eq!(rendered.message, "reading the port setting");
}

#[test]
fn test_attempt_in_named_function() {
    fn add_parsed(a: &str, b: &str) -> Outcome<i64, String> {
        let a = attempt!(parse(a));
        let b = attempt!(parse(b));
        Outcome::ok(a + b)
    }

    assert_eq!(add_parsed("2", "3").unwrap(), 5);
    assert!(add_parsed("2", "x").is_err());
}

#[test]
fn test_sequences_nest() {
    let inner = || {
        sequence(|| {
            let v = attempt!(parse("7"));
            Outcome::ok(v)
        })
    };

    let outer = sequence(|| {
        let a = attempt!(inner());
        let b = attempt!(parse("3"));
        Outcome::ok(a * b)
    });

    assert_eq!(outer.unwrap(), 21);
}

#[test]
fn test_sequence_returns_body_outcome_when_no_step_fails() {
    let explicit_failure: Outcome<i64, String> =
        sequence(|| Outcome::err("constructed by the body".to_string()));
    assert_eq!(explicit_failure.unwrap_err(), "constructed by the body");
}
