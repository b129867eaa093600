use std::cell::Cell;

use outcome_rail::Outcome;

#[test]
fn test_ok_variant_basics() {
    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert!(out.is_ok());

    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert!(!out.is_err());

    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert_eq!(out.unwrap(), 42);
}

#[test]
fn test_err_variant_basics() {
    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert!(out.is_err());

    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert!(!out.is_ok());

    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert_eq!(out.unwrap_err(), "boom");
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap()` on a failure value")]
fn test_unwrap_on_failure_panics() {
    let out: Outcome<i32, &str> = Outcome::err("boom");
    out.unwrap();
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap_err()` on a success value")]
fn test_unwrap_err_on_success_panics() {
    let out: Outcome<i32, &str> = Outcome::ok(42);
    out.unwrap_err();
}

#[test]
fn test_unwrap_panic_message_carries_context() {
    let panicked = std::panic::catch_unwind(|| {
        let out: Outcome<i32, &str> = Outcome::err("boom").context("loading settings");
        out.unwrap();
    })
    .unwrap_err();

    let message = panicked
        .downcast_ref::<String>()
        .expect("panic payload should be a formatted string");
    assert!(message.contains("loading settings"));
    assert!(message.contains("boom"));
}

#[test]
fn test_predicate_tests() {
    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert!(out.is_ok_and(|v| v == 42));

    let out: Outcome<i32, &str> = Outcome::ok(41);
    assert!(!out.is_ok_and(|v| v == 42));

    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert!(!out.is_ok_and(|_| true));

    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert!(out.is_err_and(|e| e == "boom"));

    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert!(!out.is_err_and(|_| true));
}

#[test]
fn test_functor_composition_law() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;

    let chained: Outcome<i32, &str> = Outcome::ok(20).map(f).map(g);
    let composed: Outcome<i32, &str> = Outcome::ok(20).map(|x| g(f(x)));
    assert_eq!(chained.unwrap(), composed.unwrap());
}

#[test]
fn test_map_is_noop_on_failure() {
    let out: Outcome<i32, &str> = Outcome::err("boom").map(|x: i32| x + 1);
    assert_eq!(out.unwrap_err(), "boom");
}

#[test]
fn test_map_err_preserves_notes() {
    let out: Outcome<i32, &str> = Outcome::err("boom").context("step");
    let mapped = out.map_err(|e| e.len());

    let report = mapped.into_failure().unwrap();
    assert_eq!(*report.core_error(), 4);
    assert_eq!(report.note_count(), 1);
}

#[test]
fn test_and_then_never_invokes_continuation_on_failure() {
    let calls = Cell::new(0u32);

    let out: Outcome<i32, &str> = Outcome::err("boom").and_then(|v: i32| {
        calls.set(calls.get() + 1);
        Outcome::ok(v + 1)
    });

    assert!(out.is_err());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_and_sequencing() {
    let out: Outcome<&str, &str> = Outcome::ok(1).and(Outcome::ok("next"));
    assert_eq!(out.unwrap(), "next");

    let out: Outcome<&str, &str> = Outcome::<i32, &str>::err("boom").and(Outcome::ok("next"));
    assert_eq!(out.unwrap_err(), "boom");
}

#[test]
fn test_or_and_or_else_supply_fallbacks() {
    let out: Outcome<i32, &str> = Outcome::<i32, &str>::ok(1).or(Outcome::err("other"));
    assert_eq!(out.unwrap(), 1);

    let out: Outcome<i32, &str> = Outcome::err("boom").or(Outcome::ok(7));
    assert_eq!(out.unwrap(), 7);

    let out: Outcome<i32, String> =
        Outcome::<i32, &str>::err("boom").or_else(|e| Outcome::err(format!("wrapped {e}")));
    assert_eq!(out.unwrap_err(), "wrapped boom");
}

#[test]
fn test_or_else_not_invoked_on_success() {
    let calls = Cell::new(0u32);

    let out: Outcome<i32, &str> = Outcome::<i32, &str>::ok(1).or_else(|_| {
        calls.set(calls.get() + 1);
        Outcome::ok(0)
    });

    assert_eq!(out.unwrap(), 1);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_inspect_taps_observe_without_altering() {
    let seen = Cell::new(0);
    let out: Outcome<i32, &str> = Outcome::ok(42).inspect(|v| seen.set(*v));
    assert_eq!(seen.get(), 42);
    assert_eq!(out.unwrap(), 42);

    let seen = Cell::new("");
    let out: Outcome<i32, &str> = Outcome::err("boom").inspect_err(|e| seen.set(*e));
    assert_eq!(seen.get(), "boom");
    assert_eq!(out.unwrap_err(), "boom");
}

#[test]
fn test_inspect_runs_only_on_matching_variant() {
    let calls = Cell::new(0u32);

    let _: Outcome<i32, &str> = Outcome::err("boom").inspect(|_| calls.set(calls.get() + 1));
    let _: Outcome<i32, &str> = Outcome::ok(1).inspect_err(|_| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 0);
}

#[test]
fn test_unwrap_or_family() {
    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert_eq!(out.unwrap_or(0), 0);

    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert_eq!(out.unwrap_or(0), 42);

    let out: Outcome<i32, &str> = Outcome::err("four");
    assert_eq!(out.unwrap_or_else(|e| e.len() as i32), 4);
}

#[test]
fn test_fold_runs_exactly_one_branch() {
    let out: Outcome<i32, &str> = Outcome::ok(42);
    let text = out.fold(|v| format!("value {v}"), |_| "failure".to_string());
    assert_eq!(text, "value 42");

    let out: Outcome<i32, &str> = Outcome::err("boom").context("step");
    let text = out.fold(|_| String::new(), |report| report.to_string());
    assert!(text.starts_with("step"));
}

#[test]
fn test_context_is_noop_on_success() {
    let out: Outcome<i32, &str> = Outcome::ok(42).context("ignored");
    assert!(out.as_report().is_none());
    assert_eq!(out.unwrap(), 42);
}

#[test]
fn test_from_result_and_from_fn() {
    let out = Outcome::from_result("42".parse::<i32>());
    assert_eq!(out.unwrap(), 42);

    let out = Outcome::from_fn(|| "nope".parse::<i32>());
    assert!(out.is_err());
}

#[test]
fn test_display_renders_both_variants() {
    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert_eq!(out.to_string(), "Ok(42)");

    let out: Outcome<i32, &str> = Outcome::err("boom").context("step");
    let text = out.to_string();
    assert!(text.starts_with("step"));
    assert!(text.contains("boom"));
}

#[test]
fn test_iteration_yields_success_value_once() {
    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![42]);

    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert_eq!(out.iter().count(), 0);

    let out: Outcome<i32, &str> = Outcome::ok(1);
    assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_accessors() {
    let out: Outcome<i32, &str> = Outcome::ok(42);
    assert_eq!(out.into_value(), Some(42));

    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert_eq!(out.into_failure().unwrap().into_core(), "boom");

    let out: Outcome<i32, &str> = Outcome::err("boom");
    assert_eq!(out.into_result().unwrap_err().into_core(), "boom");
}
