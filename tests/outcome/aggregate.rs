use std::cell::RefCell;

use outcome_rail::{all, all_settled, Outcome};

#[test]
fn test_all_combines_in_input_order() {
    let combined = all([
        Outcome::<_, &str>::ok(1),
        Outcome::ok(2),
        Outcome::ok(3),
    ]);
    assert_eq!(combined.unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_all_returns_first_failure() {
    let combined = all([Outcome::ok(1), Outcome::err("x"), Outcome::ok(3)]);
    assert_eq!(combined.unwrap_err(), "x");
}

#[test]
fn test_all_returns_first_failure_among_several() {
    let combined = all([
        Outcome::<i32, _>::err("first"),
        Outcome::err("second"),
    ]);
    assert_eq!(combined.unwrap_err(), "first");
}

#[test]
fn test_all_never_pulls_past_first_failure() {
    let evaluated = RefCell::new(Vec::new());

    let members = (0..4).map(|i| {
        evaluated.borrow_mut().push(i);
        if i == 1 {
            Outcome::err("boom")
        } else {
            Outcome::ok(i)
        }
    });

    let combined = all(members);
    assert_eq!(combined.unwrap_err(), "boom");
    assert_eq!(*evaluated.borrow(), vec![0, 1]);
}

#[test]
fn test_all_preserves_propagated_report() {
    let failing: Outcome<i32, &str> = Outcome::err("boom").context("step");
    let combined = all([Outcome::ok(1), failing]);

    let report = combined.into_failure().unwrap();
    assert_eq!(report.note_count(), 1);
    assert_eq!(*report.core_error(), "boom");
}

#[test]
fn test_all_settled_collects_every_failure_in_order() {
    let combined = all_settled([
        Outcome::<i32, _>::ok(1),
        Outcome::err("a"),
        Outcome::err("b"),
    ]);
    assert_eq!(combined.unwrap_err().as_slice(), ["a", "b"]);
}

#[test]
fn test_all_settled_success() {
    let combined = all_settled([Outcome::<_, &str>::ok(1), Outcome::ok(2)]);
    assert_eq!(combined.into_value().unwrap(), vec![1, 2]);
}

#[test]
fn test_all_over_empty_collection() {
    let combined: Outcome<Vec<i32>, &str> = all(Vec::new());
    assert_eq!(combined.unwrap(), Vec::<i32>::new());

    let combined: Outcome<Vec<i32>, _> = all_settled(Vec::<Outcome<i32, &str>>::new());
    assert!(combined.is_ok());
}

#[test]
fn test_collect_is_fail_fast() {
    let collected: Outcome<Vec<i32>, &str> =
        [Outcome::ok(1), Outcome::err("x")].into_iter().collect();
    assert_eq!(collected.unwrap_err(), "x");
}
