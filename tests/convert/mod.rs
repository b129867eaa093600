use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use outcome_rail::convert::{core_to_report, outcome_to_result, report_to_core, result_to_outcome};
use outcome_rail::{Outcome, OutcomeExt, Report};

#[test]
fn test_result_to_outcome_roundtrip() {
    let outcome = result_to_outcome::<i32, &str>(Ok(42));
    assert_eq!(outcome_to_result(outcome), Ok(42));

    let outcome = result_to_outcome::<i32, &str>(Err("boom"));
    assert_eq!(outcome_to_result(outcome), Err("boom"));
}

#[test]
fn test_outcome_to_result_strips_diagnostics() {
    let outcome: Outcome<i32, &str> = Outcome::err("boom").context("step");
    assert_eq!(outcome_to_result(outcome), Err("boom"));
}

#[test]
fn test_report_core_conversions() {
    let report = core_to_report("boom");
    assert_eq!(report_to_core(report), "boom");
}

#[test]
fn test_from_impls() {
    let outcome: Outcome<i32, &str> = Result::<i32, &str>::Ok(42).into();
    assert!(outcome.is_ok());

    let outcome: Outcome<i32, &str> = Result::<i32, &str>::Err("boom").into();
    assert!(outcome.is_err());

    let report: Report<&str> = "boom".into();
    assert_eq!(*report.core_error(), "boom");

    let result: Result<i32, Report<&str>> = Outcome::<i32, &str>::err("boom").into();
    assert_eq!(result.unwrap_err().into_core(), "boom");
}

#[test]
fn test_outcome_ext_into_outcome() {
    let parsed: Result<i32, std::num::ParseIntError> = "7".parse();
    assert_eq!(parsed.into_outcome().unwrap(), 7);
}

#[test]
fn test_outcome_ext_context_attaches_only_on_failure() {
    let ok: Result<i32, &str> = Ok(1);
    let out = ok.context("ignored");
    assert!(out.as_report().is_none());

    let err: Result<i32, &str> = Err("boom");
    let out = err.context("step");
    assert_eq!(out.as_report().unwrap().note_count(), 1);
}

#[test]
fn test_outcome_ext_context_with_is_lazy() {
    let evaluations = Arc::new(AtomicUsize::new(0));
    let counter = evaluations.clone();

    let err: Result<i32, &str> = Err("boom");
    let out = err.context_with(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        "detail".to_string()
    });

    assert_eq!(evaluations.load(Ordering::SeqCst), 0);
    let _ = out.as_report().unwrap().format(outcome_rail::ReportStyle::Compact);
    assert_eq!(evaluations.load(Ordering::SeqCst), 1);
}
