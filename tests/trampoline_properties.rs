//! Behavioural properties of the trampoline driver
//!
//! Each test drives the public API only, the way an embedding application
//! would.

use std::cell::RefCell;

use tailcall::trampoline::{call1, func1, func2, func3, run, tail_func1, CallContext, Step};

fn sum_to_recursive(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        n + sum_to_recursive(n - 1)
    }
}

#[test]
fn test_termination_equivalence_with_direct_recursion() {
    let sum_to = func2(|n: u64, acc: u64, ctx| {
        if n == 0 {
            ctx.request_exit(acc);
        } else {
            ctx.request_continue((n - 1, acc + n));
        }
    });

    for n in [0, 1, 2, 10, 500, 2_000] {
        assert_eq!(sum_to(n, 0), Some(sum_to_recursive(n)), "sum_to({})", n);
    }
}

#[test]
fn test_depth_independence_one_million() {
    const N: u64 = 1_000_000;
    let step = func1(|i: u64, ctx| {
        if i < N {
            ctx.request_continue(i + 1);
        } else {
            ctx.request_exit(i);
        }
    });
    assert_eq!(step(0), Some(N));
}

#[test]
fn test_depth_independence_ten_million_step_style() {
    const N: u64 = 10_000_000;
    let step = tail_func1(|i: u64, _ctx| if i < N { Step::Continue(i + 1) } else { Step::Exit(i) });
    assert_eq!(step(0), N);
}

#[test]
fn test_first_call_flag_exactly_once() {
    let flags = RefCell::new(Vec::new());
    let walk = func1(|n: u32, ctx| {
        flags.borrow_mut().push(ctx.is_first_call());
        if n > 0 {
            ctx.request_continue(n - 1);
        } else {
            ctx.request_exit(());
        }
    });

    walk(5);
    assert_eq!(*flags.borrow(), vec![true, false, false, false, false, false]);

    flags.borrow_mut().clear();
    walk(1);
    assert_eq!(*flags.borrow(), vec![true, false]);
}

#[test]
fn test_default_terminal_after_one_iteration() {
    let calls = RefCell::new(0);
    let idle = func1(|_n: u32, _ctx: &mut CallContext<u32, String>| {
        *calls.borrow_mut() += 1;
    });
    assert_eq!(idle(10), None);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_exit_then_continue_keeps_looping() {
    let result = call1(0u32, |n, ctx| {
        ctx.request_exit(n);
        if n < 3 {
            ctx.request_continue(n + 1);
        }
    });
    assert_eq!(result, Some(3));
}

#[test]
fn test_idempotent_reentry() {
    let collect = func1(|n: u32, ctx| {
        if let Some(trail) = ctx.data_mut().get_or_insert_with("trail", Vec::<u32>::new) {
            trail.push(n);
        }
        if n == 0 {
            let trail = ctx.data_mut().remove::<Vec<u32>>("trail");
            ctx.request_exit(trail.unwrap_or_default());
        } else {
            ctx.request_continue(n - 1);
        }
    });

    let first = collect(3);
    let second = collect(3);
    assert_eq!(first, Some(vec![3, 2, 1, 0]));
    assert_eq!(first, second);
}

#[test]
fn test_factorial_accumulation_scenario() {
    let trace = RefCell::new(Vec::new());
    let aggregate = func2(|n: u64, acc: u64, ctx| {
        trace.borrow_mut().push(acc);
        if n > 6 {
            ctx.request_exit(acc);
        } else {
            ctx.request_continue((n + 1, acc * n));
        }
    });

    assert_eq!(aggregate(3, 1), Some(360));
    assert_eq!(*trace.borrow(), vec![1, 3, 12, 60, 360]);
}

#[test]
fn test_fibonacci_scenario() {
    let fib = func3(|fnext: u64, f: u64, count: u32, ctx| {
        if count == 0 {
            ctx.request_exit(f);
        } else {
            ctx.request_continue((fnext + f, fnext, count - 1));
        }
    });
    assert_eq!(fib(1, 0, 5), Some(5));
}

#[test]
fn test_step_routine_panic_propagates() {
    let outcome = std::panic::catch_unwind(|| {
        run(0u32, |n, ctx: &mut CallContext<u32, u32>| {
            if n == 3 {
                panic!("step failed at {}", n);
            }
            ctx.request_continue(n + 1);
        })
    });
    let payload = outcome.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default();
    assert_eq!(message, "step failed at 3");
}
