use stepwise_core::OscillatorProblem;
use stepwise_solvers::rk4;
use tracing::{info, warn};

use crate::{Error, Options, Outcome, scatter};

/// One input row: an identifier and its oscillator problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub id: u64,
    pub problem: OscillatorProblem,
}

/// One output row: the identifier and the final `(x, v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    pub id: u64,
    pub x: f64,
    pub v: f64,
}

/// The outcome for one input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: u64,
    pub outcome: Outcome<[f64; 2], rk4::Error>,
}

/// The gathered outcomes of a batch, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    /// Returns the output rows of the problems that completed.
    pub fn outputs(&self) -> impl Iterator<Item = Output> + '_ {
        self.entries.iter().filter_map(|entry| {
            entry
                .outcome
                .completed()
                .map(|&[x, v]| Output { id: entry.id, x, v })
        })
    }

    /// Returns the identifiers and errors of the problems that failed.
    pub fn failures(&self) -> impl Iterator<Item = (u64, &rk4::Error)> + '_ {
        self.entries
            .iter()
            .filter_map(|entry| entry.outcome.failed().map(|error| (entry.id, error)))
    }

    /// Returns the identifiers of the problems skipped for lack of time.
    pub fn skipped(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, Outcome::Skipped))
            .map(|entry| entry.id)
    }
}

/// Integrates every row's oscillator problem in parallel.
///
/// Each row is solved with [`rk4::integrate`]. Rows that fail (for example
/// with a non-positive step) are reported in the [`Report`] and logged at
/// `warn`; the remaining rows are unaffected.
///
/// # Errors
///
/// Returns [`Error::ThreadPool`] if a dedicated pool was requested and could
/// not be built.
pub fn integrate_all(rows: &[Row], options: &Options) -> Result<Report, Error> {
    info!(rows = rows.len(), threads = ?options.threads(), "integrating batch");

    let outcomes = scatter(rows, |row| rk4::integrate(row.problem), options)?;

    let entries: Vec<Entry> = rows
        .iter()
        .zip(outcomes)
        .map(|(row, outcome)| {
            match &outcome {
                Outcome::Failed(error) => warn!(id = row.id, %error, "problem failed; skipping"),
                Outcome::Skipped => warn!(id = row.id, "time budget spent; problem skipped"),
                Outcome::Completed(_) => {}
            }
            Entry {
                id: row.id,
                outcome,
            }
        })
        .collect();

    let completed = entries.iter().filter(|e| e.outcome.is_completed()).count();
    let failed = entries.iter().filter(|e| e.outcome.failed().is_some()).count();
    let skipped = entries.len() - completed - failed;
    info!(completed, failed, skipped, "batch finished");

    Ok(Report { entries })
}
