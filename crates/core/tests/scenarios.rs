//! End-to-end scenarios against the public surface.

use attempt_core::{attempt_async, attempt_spawned, Cause, ErrorInfo, Fault, Outcome};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("boom")]
struct Boom;

fn divide(a: i64, b: i64) -> Outcome<i64> {
    if b == 0 {
        return Outcome::fail(ErrorInfo::new("Division by zero"));
    }
    Outcome::ok(a / b)
}

#[test]
fn divide_by_zero_fails() {
    let result = divide(8, 0);
    assert!(result.failed());
    assert_eq!(result.error().map(ErrorInfo::message), Some("Division by zero"));
}

#[test]
fn divide_succeeds() {
    let result = divide(8, 4);
    assert!(result.succeeded());
    assert_eq!(result.value(), Some(&2));
}

#[test]
fn tuple_style_consumption() {
    let (value, error) = divide(10, 2).destructure();
    assert_eq!(value, Some(5));
    assert!(error.is_none());
}

#[test]
fn question_mark_through_result() {
    fn halve_then_divide(a: i64, b: i64) -> Result<i64, ErrorInfo> {
        let half = divide(a, 2).into_result()?;
        divide(half, b).into_result()
    }

    assert_eq!(halve_then_divide(16, 4), Ok(2));
    assert_eq!(
        halve_then_divide(16, 0).unwrap_err().to_string(),
        "Division by zero"
    );
}

#[test]
fn distinct_causes_are_unequal() {
    let c1: Cause = Arc::new(Boom);
    let c2: Cause = Arc::new(Boom);
    assert_eq!(
        ErrorInfo::with_cause("m", c1.clone()),
        ErrorInfo::with_cause("m", c1.clone())
    );
    assert_ne!(ErrorInfo::with_cause("m", c1), ErrorInfo::with_cause("m", c2));
}

#[tokio::test]
async fn attempt_returns_five() {
    let outcome = attempt_async(|| async { Ok::<_, Boom>(5) }).await;
    assert!(outcome.succeeded());
    assert_eq!(outcome.value(), Some(&5));
}

#[tokio::test]
async fn attempt_captures_raised_fault() {
    let outcome: Outcome<i32> = attempt_async(|| async { Err(Boom) }).await;
    assert!(!outcome.succeeded());
    let error = outcome.error().unwrap();
    assert_eq!(error.message(), "boom");
    assert!(error.cause_as::<Boom>().is_some());
}

#[tokio::test]
async fn spawned_captures_panic_as_fault() {
    let outcome: Outcome<i32> = attempt_spawned(|| async {
        let divisor: Vec<i32> = Vec::new();
        Ok::<_, Boom>(divisor[0])
    })
    .await;
    assert!(outcome.failed());
    assert!(matches!(
        outcome.error().and_then(ErrorInfo::cause_as::<Fault>),
        Some(Fault::Panicked(_))
    ));
}
