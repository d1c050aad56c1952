use std::time::{Duration, Instant};

use crate::error::SolveError;

/// Source of the current time for a [`Deadline`].
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Wall-clock budget of a single solve.
///
/// Established once and then only read: the solver calls [`Deadline::check`]
/// at its cooperative checkpoints and aborts as soon as the budget is spent.
#[derive(Clone, Debug)]
pub struct Deadline<C = SystemClock> {
    clock: C,
    start: Instant,
    budget: Option<Duration>,
}

impl Deadline<SystemClock> {
    /// A deadline that never expires.
    pub fn none() -> Self {
        Self::with_clock(SystemClock, None)
    }

    /// A deadline expiring `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self::with_clock(SystemClock, Some(budget))
    }

    /// A deadline expiring at the absolute instant `cutoff`.
    pub fn until(cutoff: Instant) -> Self {
        let start = Instant::now();
        Deadline { clock: SystemClock, start, budget: Some(cutoff.saturating_duration_since(start)) }
    }
}

impl<C: Clock> Deadline<C> {
    pub fn with_clock(clock: C, budget: Option<Duration>) -> Self {
        let start = clock.now();
        Deadline { clock, start, budget }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }

    /// Fails with [`SolveError::DeadlineExceeded`] once the budget is used up.
    /// A zero budget is already expired.
    pub fn check(&self) -> Result<(), SolveError> {
        let Some(budget) = self.budget else { return Ok(()) };

        let elapsed = self.elapsed();
        if elapsed >= budget {
            return Err(SolveError::DeadlineExceeded { elapsed, budget });
        }

        Ok(())
    }
}
