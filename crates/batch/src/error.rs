use thiserror::Error;

/// Errors that prevent a batch from running at all.
///
/// Failures of individual problems are not errors of the batch; they are
/// reported per item as [`Outcome::Failed`](crate::Outcome::Failed).
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
