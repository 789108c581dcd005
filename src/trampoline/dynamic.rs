//! Checked dynamic entry point.
//!
//! Routines here take their positional arguments as a `Vec<V>` of a single
//! caller-chosen value type, so one routine can be driven without a
//! dedicated arity adapter. The declared arity is checked for the seed
//! arguments and again for every continuation request; a mismatch ends the
//! loop with [`TrampolineError::ArityMismatch`].

use tracing::debug;

use crate::error::TrampolineError;

use super::context::CallContext;
use super::engine::Driver;

/// Context type seen by dynamic routines
pub type DynamicContext<V> = CallContext<Vec<V>, V>;

fn check_arity(expected: usize, actual: usize) -> Result<(), TrampolineError> {
    if expected == actual {
        Ok(())
    } else {
        debug!(
            target: "tailcall::trampoline::dynamic",
            expected, actual, "argument count does not match routine arity"
        );
        Err(TrampolineError::arity_mismatch(expected, actual))
    }
}

fn drive_checked<V, E, F>(driver: &Driver, arity: usize, args: Vec<V>, mut routine: F) -> Result<Option<V>, E>
where
    F: FnMut(Vec<V>, &mut DynamicContext<V>) -> Result<(), E>,
    E: From<TrampolineError>,
{
    check_arity(arity, args.len())?;
    driver.try_run(args, |args, ctx| {
        routine(args, ctx)?;
        if let Some(next) = ctx.pending() {
            check_arity(arity, next.len())?;
        }
        Ok(())
    })
}

/// Run a dynamic routine once with the process-wide driver.
///
/// Errors raised by `routine` come back unchanged; `E` only needs to be able
/// to represent an arity mismatch as well.
pub fn call_dynamic<V, E, F>(arity: usize, args: Vec<V>, routine: F) -> Result<Option<V>, E>
where
    F: FnMut(Vec<V>, &mut DynamicContext<V>) -> Result<(), E>,
    E: From<TrampolineError>,
{
    drive_checked(&Driver::default(), arity, args, routine)
}

/// Reusable dynamic routine with a declared arity
#[derive(Debug, Clone)]
pub struct DynamicTrampoline<F> {
    arity: usize,
    routine: F,
    driver: Driver,
}

impl<F> DynamicTrampoline<F> {
    pub fn new(arity: usize, routine: F) -> Self {
        DynamicTrampoline {
            arity,
            routine,
            driver: Driver::default(),
        }
    }

    pub fn with_driver(mut self, driver: Driver) -> Self {
        self.driver = driver;
        self
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Run the loop with fresh state seeded from `args`
    pub fn invoke<V, E>(&self, args: Vec<V>) -> Result<Option<V>, E>
    where
        F: Fn(Vec<V>, &mut DynamicContext<V>) -> Result<(), E>,
        E: From<TrampolineError>,
    {
        drive_checked(&self.driver, self.arity, args, |args, ctx| (self.routine)(args, ctx))
    }
}
