//! Independent top-level calls on separate threads

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use tailcall::samples::{fibonacci, fibonacci_batch, record_subjects, Message};
use tailcall::trampoline::{func2, tail_func1, Step};

#[test]
fn test_shared_routine_across_threads() {
    let sum_to = Arc::new(func2(|n: u64, acc: u64, ctx| {
        if n == 0 {
            ctx.request_exit(acc);
        } else {
            ctx.request_continue((n - 1, acc + n));
        }
    }));

    let handles: Vec<_> = (1..=8u64)
        .map(|t| {
            let sum_to = Arc::clone(&sum_to);
            thread::spawn(move || {
                let n = t * 50_000;
                (n, sum_to(n, 0))
            })
        })
        .collect();

    for handle in handles {
        let (n, result) = handle.join().unwrap();
        assert_eq!(result, Some(n * (n + 1) / 2));
    }
}

#[test]
fn test_contexts_do_not_leak_between_threads() {
    let trail = Arc::new(tail_func1(|n: u32, ctx| {
        if let Some(seen) = ctx.data_mut().get_or_insert_with("seen", || 0u32) {
            *seen += 1;
        }
        if n == 0 {
            Step::Exit(ctx.data().get::<u32>("seen").copied().unwrap_or(0))
        } else {
            Step::Continue(n - 1)
        }
    }));

    let handles: Vec<_> = (0..6u32)
        .map(|t| {
            let trail = Arc::clone(&trail);
            thread::spawn(move || (t, trail(t * 1_000)))
        })
        .collect();

    for handle in handles {
        let (t, seen) = handle.join().unwrap();
        assert_eq!(seen, t * 1_000 + 1);
    }
}

#[test]
fn test_fibonacci_batch_matches_sequential() {
    let ns: Vec<u32> = (0..100).collect();
    let expected: Vec<Option<u64>> = ns.iter().map(|&n| fibonacci(n)).collect();
    assert_eq!(fibonacci_batch(&ns), expected);
}

#[test]
fn test_subjects_recorded_from_scoped_threads() {
    let thread_a = Message::new("a").with_reply(Message::new("a.1"));
    let thread_b = Message::new("b");
    let sink = Mutex::new(Vec::new());

    thread::scope(|s| {
        s.spawn(|| record_subjects(&thread_a, &sink));
        s.spawn(|| record_subjects(&thread_b, &sink));
    });

    let mut subjects = sink.into_inner();
    subjects.sort();
    assert_eq!(subjects, vec!["a", "a.1", "b"]);
}
