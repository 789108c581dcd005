//! Checked dynamic entry point with a caller-defined value type

use std::fmt;

use tailcall::trampoline::{call_dynamic, DynamicContext, DynamicTrampoline};
use tailcall::{Driver, TrampolineConfig, TrampolineError};

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Int(i64),
    Text(String),
}

#[derive(Debug, PartialEq)]
enum RoutineError {
    Engine(TrampolineError),
    TypeMismatch(&'static str),
}

impl From<TrampolineError> for RoutineError {
    fn from(err: TrampolineError) -> Self {
        RoutineError::Engine(err)
    }
}

impl fmt::Display for RoutineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutineError::Engine(e) => write!(f, "{}", e),
            RoutineError::TypeMismatch(what) => write!(f, "expected {}", what),
        }
    }
}

/// (n, text): append n copies of "ab" to text
fn repeat_routine(args: Vec<Value>, ctx: &mut DynamicContext<Value>) -> Result<(), RoutineError> {
    let mut args = args.into_iter();
    let n = match args.next() {
        Some(Value::Int(n)) => n,
        _ => return Err(RoutineError::TypeMismatch("integer count")),
    };
    let text = match args.next() {
        Some(Value::Text(text)) => text,
        _ => return Err(RoutineError::TypeMismatch("text accumulator")),
    };

    if n == 0 {
        ctx.request_exit(Value::Text(text));
    } else {
        ctx.request_continue(vec![Value::Int(n - 1), Value::Text(text + "ab")]);
    }
    Ok(())
}

#[test]
fn test_dynamic_routine_with_mixed_values() {
    let repeat = DynamicTrampoline::new(2, repeat_routine);
    let result = repeat.invoke(vec![Value::Int(3), Value::Text(String::new())]);
    assert_eq!(result, Ok(Some(Value::Text("ababab".to_string()))));
}

#[test]
fn test_dynamic_seed_arity_reported() {
    let repeat = DynamicTrampoline::new(2, repeat_routine);
    let err = repeat.invoke(vec![Value::Int(3)]).unwrap_err();
    assert_eq!(
        err,
        RoutineError::Engine(TrampolineError::ArityMismatch { expected: 2, actual: 1 })
    );
    assert_eq!(
        err.to_string(),
        "Arity mismatch: routine requires exactly 2 arguments, got 1"
    );
}

#[test]
fn test_routine_error_passes_through_unchanged() {
    let repeat = DynamicTrampoline::new(2, repeat_routine)
        .with_driver(Driver::new(TrampolineConfig::quiet()));
    let err = repeat
        .invoke(vec![Value::Text("x".into()), Value::Int(1)])
        .unwrap_err();
    assert_eq!(err, RoutineError::TypeMismatch("integer count"));
}

#[test]
fn test_continuation_arity_reported() {
    let outcome: Result<Option<Value>, RoutineError> =
        call_dynamic(1, vec![Value::Int(2)], |args, ctx| {
            if let Some(Value::Int(n)) = args.first() {
                ctx.request_continue(vec![Value::Int(n - 1), Value::Int(0), Value::Int(0)]);
            }
            Ok(())
        });
    assert_eq!(
        outcome,
        Err(RoutineError::Engine(TrampolineError::ArityMismatch { expected: 1, actual: 3 }))
    );
}
