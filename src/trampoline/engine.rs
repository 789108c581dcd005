//! Trampoline Engine - Driver Loop
//!
//! This module contains the loop that repeatedly invokes a step routine with
//! a [`CallContext`] until the routine stops asking for another iteration.
//! Each iteration returns to the loop before the next one starts, so stack
//! usage stays flat no matter how many steps a computation takes.

use std::convert::Infallible;

use tracing::{debug, trace, warn};

use crate::config::{self, TrampolineConfig};

use super::context::CallContext;
use super::step::Step;

/// Runs trampoline loops under a given reporting configuration.
///
/// The free functions in this module use a driver built from
/// [`config::global`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Driver {
    config: TrampolineConfig,
}

impl Default for Driver {
    fn default() -> Self {
        Driver::new(*config::global())
    }
}

impl Driver {
    pub fn new(config: TrampolineConfig) -> Self {
        Driver { config }
    }

    pub fn config(&self) -> &TrampolineConfig {
        &self.config
    }

    /// Context-style loop for a fallible routine.
    ///
    /// Before every invocation the context is reset to "exit with no result";
    /// the routine keeps the loop going by calling `request_continue`. The
    /// first `Err` aborts the loop and is returned as-is.
    pub fn try_run<A, R, E, F>(&self, args: A, mut routine: F) -> Result<Option<R>, E>
    where
        F: FnMut(A, &mut CallContext<A, R>) -> Result<(), E>,
    {
        let mut context = CallContext::new(args);
        debug!(target: "tailcall::trampoline::engine", "trampoline loop started");

        while let Some(args) = context.take_pending() {
            trace!(
                target: "tailcall::trampoline::engine",
                iteration = context.iteration(),
                first_call = context.is_first_call(),
                "invoking step routine"
            );

            if let Err(err) = routine(args, &mut context) {
                debug!(
                    target: "tailcall::trampoline::engine",
                    iteration = context.iteration(),
                    "step routine failed, abandoning loop"
                );
                return Err(err);
            }

            context.finish_iteration();
            self.report_progress(context.iteration());
        }

        debug!(
            target: "tailcall::trampoline::engine",
            iterations = context.iteration(),
            has_result = context.result().is_some(),
            "trampoline loop finished"
        );
        Ok(context.into_result())
    }

    /// Context-style loop for an infallible routine
    pub fn run<A, R, F>(&self, args: A, mut routine: F) -> Option<R>
    where
        F: FnMut(A, &mut CallContext<A, R>),
    {
        let outcome = self.try_run(args, |args, ctx| {
            routine(args, ctx);
            Ok::<(), Infallible>(())
        });
        match outcome {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Step-style loop for a fallible routine.
    ///
    /// The returned [`Step`] decides what happens next; continue/exit
    /// requests made on the context are ignored. The context still provides
    /// `is_first_call`, `iteration` and the data bag.
    pub fn try_run_steps<A, R, E, F>(&self, args: A, mut routine: F) -> Result<R, E>
    where
        F: FnMut(A, &mut CallContext<A, R>) -> Result<Step<A, R>, E>,
    {
        let mut context = CallContext::detached();
        let mut args = args;
        debug!(target: "tailcall::trampoline::engine", "step loop started");

        loop {
            trace!(
                target: "tailcall::trampoline::engine",
                iteration = context.iteration(),
                first_call = context.is_first_call(),
                "invoking step routine"
            );

            let step = match routine(args, &mut context) {
                Ok(step) => step,
                Err(err) => {
                    debug!(
                        target: "tailcall::trampoline::engine",
                        iteration = context.iteration(),
                        "step routine failed, abandoning loop"
                    );
                    return Err(err);
                }
            };

            context.finish_iteration();
            self.report_progress(context.iteration());

            match step {
                Step::Continue(next) => args = next,
                Step::Exit(result) => {
                    debug!(
                        target: "tailcall::trampoline::engine",
                        iterations = context.iteration(),
                        "step loop finished"
                    );
                    return Ok(result);
                }
            }
        }
    }

    /// Step-style loop for an infallible routine
    pub fn run_steps<A, R, F>(&self, args: A, mut routine: F) -> R
    where
        F: FnMut(A, &mut CallContext<A, R>) -> Step<A, R>,
    {
        match self.try_run_steps(args, |args, ctx| Ok::<_, Infallible>(routine(args, ctx))) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    fn report_progress(&self, completed: u64) {
        let every = self.config.progress_interval;
        if every > 0 && completed % every == 0 {
            debug!(
                target: "tailcall::trampoline::engine",
                iterations = completed,
                "trampoline progress"
            );
        }
        if self.config.long_run_warning == Some(completed) {
            warn!(
                target: "tailcall::trampoline::engine",
                iterations = completed,
                "Trampoline loop is still running. Possible causes:\n\
                 - the step routine never calls request_exit on its base case\n\
                 - the argument that should shrink each step is not changing"
            );
        }
    }
}

/// Run a context-style routine with the process-wide driver
pub fn run<A, R, F>(args: A, routine: F) -> Option<R>
where
    F: FnMut(A, &mut CallContext<A, R>),
{
    Driver::default().run(args, routine)
}

/// Run a fallible context-style routine with the process-wide driver
pub fn try_run<A, R, E, F>(args: A, routine: F) -> Result<Option<R>, E>
where
    F: FnMut(A, &mut CallContext<A, R>) -> Result<(), E>,
{
    Driver::default().try_run(args, routine)
}

/// Run a step-style routine with the process-wide driver
pub fn run_steps<A, R, F>(args: A, routine: F) -> R
where
    F: FnMut(A, &mut CallContext<A, R>) -> Step<A, R>,
{
    Driver::default().run_steps(args, routine)
}

/// Run a fallible step-style routine with the process-wide driver
pub fn try_run_steps<A, R, E, F>(args: A, routine: F) -> Result<R, E>
where
    F: FnMut(A, &mut CallContext<A, R>) -> Result<Step<A, R>, E>,
{
    Driver::default().try_run_steps(args, routine)
}
