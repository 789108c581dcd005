//! Numeric samples: counting, Fibonacci and an accumulating product.

use rayon::prelude::*;

use crate::trampoline::{call2, tail_call1, tail_call3, Step};

/// Count from `start` up to `limit`, one iteration per increment
pub fn count_up(start: u64, limit: u64) -> u64 {
    tail_call1(start, |i, _ctx| {
        if i < limit {
            Step::Continue(i + 1)
        } else {
            Step::Exit(i)
        }
    })
}

/// The `n`th Fibonacci number (`fibonacci(0) == 0`), or `None` if it does
/// not fit in a `u64`
pub fn fibonacci(n: u32) -> Option<u64> {
    tail_call3(1u64, 0u64, n, |fnext, f, count, _ctx| match count {
        0 => Step::Exit(Some(f)),
        1 => Step::Exit(Some(fnext)),
        _ => match fnext.checked_add(f) {
            Some(sum) => Step::Continue((sum, fnext, count - 1)),
            None => Step::Exit(None),
        },
    })
}

/// Product of `start..=limit`, accumulated one factor per iteration.
///
/// Returns `None` on overflow: the step simply stops without recording a
/// result.
pub fn partial_factorial(start: u64, limit: u64) -> Option<u64> {
    call2(start, 1u64, |n, acc, ctx| {
        if n > limit {
            ctx.request_exit(acc);
        } else if let Some(next) = acc.checked_mul(n) {
            ctx.request_continue((n + 1, next));
        }
    })
}

/// Independent Fibonacci loops spread over the rayon pool
pub fn fibonacci_batch(ns: &[u32]) -> Vec<Option<u64>> {
    ns.par_iter().map(|&n| fibonacci(n)).collect()
}
