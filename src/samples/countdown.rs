//! Countdown samples.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tracing::trace;

use crate::trampoline::{tail_call2, try_run, Step};

/// Blocking pause between iterations, supplied by the caller
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Count `n` down to zero, then call `builder` once and return what it built.
///
/// The builder travels with the arguments, so nothing is borrowed across
/// iterations.
pub fn countdown<T, B>(n: u32, builder: B) -> T
where
    B: FnOnce() -> T,
{
    tail_call2(n, builder, |n, builder, _ctx| {
        trace!(target: "tailcall::samples::countdown", n, "enter");
        let step = if n == 0 {
            Step::Exit(builder())
        } else {
            Step::Continue((n - 1, builder))
        };
        trace!(target: "tailcall::samples::countdown", n, "exit");
        step
    })
}

/// Write `n`, `n - 1`, ... `0` to `sink`, one line per iteration, pausing
/// for `interval` between lines. Write errors end the countdown.
pub fn timed_countdown<W>(n: u32, interval: Duration, sleeper: &dyn Sleeper, sink: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    try_run(n, |n, ctx| {
        writeln!(sink, "{}", n)?;
        if n == 0 {
            ctx.request_stop();
        } else {
            sleeper.sleep(interval);
            ctx.request_continue(n - 1);
        }
        Ok::<(), io::Error>(())
    })
    .map(|_: Option<()>| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSleeper {
        naps: RefCell<Vec<Duration>>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&self, duration: Duration) {
            self.naps.borrow_mut().push(duration);
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_countdown_builds_once_at_zero() {
        let built = countdown(4, || "printer");
        assert_eq!(built, "printer");
    }

    #[test]
    fn test_countdown_returns_callable() {
        let print: Box<dyn Fn() -> String> = countdown(3, || {
            Box::new(|| "I am a printer".to_string()) as Box<dyn Fn() -> String>
        });
        assert_eq!(print(), "I am a printer");
    }

    #[test]
    fn test_timed_countdown_writes_and_sleeps() {
        let sleeper = RecordingSleeper::default();
        let mut out = Vec::new();
        timed_countdown(3, Duration::from_millis(5), &sleeper, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "3\n2\n1\n0\n");
        assert_eq!(sleeper.naps.borrow().len(), 3);
    }

    #[test]
    fn test_timed_countdown_propagates_write_error() {
        let sleeper = RecordingSleeper::default();
        let err = timed_countdown(3, Duration::ZERO, &sleeper, &mut FailingSink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sleeper.naps.borrow().is_empty());
    }
}
