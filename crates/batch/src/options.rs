use std::{num::NonZeroUsize, time::Duration};

/// Options controlling how a batch is run.
///
/// The default runs on `rayon`'s global pool with no time budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    threads: Option<NonZeroUsize>,
    time_budget: Option<Duration>,
}

impl Options {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the batch on a dedicated pool with `threads` workers.
    #[must_use]
    pub fn with_threads(self, threads: NonZeroUsize) -> Self {
        Self {
            threads: Some(threads),
            ..self
        }
    }

    /// Limits the wall-clock time the batch may start new problems in.
    ///
    /// The budget applies to whole problems: a problem that has started always
    /// runs to completion, and problems not yet started when the budget is
    /// spent are reported as [`Outcome::Skipped`](crate::Outcome::Skipped).
    #[must_use]
    pub fn with_time_budget(self, budget: Duration) -> Self {
        Self {
            time_budget: Some(budget),
            ..self
        }
    }

    /// Returns the dedicated pool size, if any.
    #[must_use]
    pub fn threads(&self) -> Option<NonZeroUsize> {
        self.threads
    }

    /// Returns the time budget, if any.
    #[must_use]
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }
}
