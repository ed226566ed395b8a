//! Runner that executes kernels and optionally re-checks their answers.
//!
//! A [`Runner`] wraps one [`Exercise`] instance. Each run happens inside an
//! `info_span!` (with the `tracing` feature) and, when verification is on,
//! the output is passed back through [`Exercise::check`] before it is
//! returned. [`solve_all`] applies the same procedure to a batch, in parallel
//! with the `parallel` feature.

use crate::error::{SolveError, SolveResult};
use crate::traits::Exercise;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Executes a single kernel instance `P`.
///
/// Typical usage:
/// ```
/// use leet_kernels::{problems::two_sum::TwoSumProblem, Runner};
///
/// let runner = Runner::new(TwoSumProblem::new(vec![2, 7, 11, 15], 9));
/// assert_eq!(runner.run().unwrap(), (0, 1));
/// ```
pub struct Runner<P: Exercise> {
    problem: P,
    verify: bool,
}

impl<P: Exercise> Runner<P> {
    /// Create a runner; verification follows `debug_assertions`.
    pub fn new(problem: P) -> Self {
        Self::with_verify(problem, cfg!(debug_assertions))
    }

    /// Create a runner with an explicit verification setting.
    pub fn with_verify(problem: P, verify: bool) -> Self {
        Self { problem, verify }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Expose mutable reference if callers need to adjust the instance.
    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    /// Whether outputs are re-checked before being returned.
    pub fn verifies(&self) -> bool {
        self.verify
    }

    /// Solve the instance.
    ///
    /// # Errors
    /// Whatever the kernel reports, plus [`SolveError::InvariantViolated`]
    /// when verification is enabled and the output fails
    /// [`Exercise::check`].
    pub fn run(&self) -> SolveResult<P::Output> {
        run_one(&self.problem, self.verify)
    }

    /// Consume the runner and return the problem.
    pub fn into_problem(self) -> P {
        self.problem
    }
}

fn run_one<P: Exercise>(problem: &P, verify: bool) -> SolveResult<P::Output> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("kernel_run", exercise = problem.name(), verify);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let output = match problem.solve() {
        Ok(output) => output,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %err, "kernel rejected input");
            return Err(err);
        }
    };

    if verify && !problem.check(&output) {
        #[cfg(feature = "tracing")]
        tracing::error!(?output, "kernel output failed its postcondition");
        return Err(SolveError::InvariantViolated {
            exercise: problem.name(),
            detail: format!("{output:?}"),
        });
    }

    Ok(output)
}

/// Solve every instance, preserving input order in the results.
///
/// With the `parallel` feature instances are spread over the rayon pool;
/// results are identical to the sequential path.
#[cfg(feature = "parallel")]
pub fn solve_all<P>(problems: &[P], verify: bool) -> Vec<SolveResult<P::Output>>
where
    P: Exercise + Sync,
    P::Output: Send,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("solve_all", count = problems.len(), parallel = true);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    problems.par_iter().map(|p| run_one(p, verify)).collect()
}

/// Solve every instance, preserving input order in the results.
#[cfg(not(feature = "parallel"))]
pub fn solve_all<P>(problems: &[P], verify: bool) -> Vec<SolveResult<P::Output>>
where
    P: Exercise,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("solve_all", count = problems.len(), parallel = false);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    problems.iter().map(|p| run_one(p, verify)).collect()
}
