/// The result of one item in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R, E> {
    /// The item was processed successfully.
    Completed(R),

    /// Processing the item failed.
    Failed(E),

    /// The item was not started because the time budget was spent.
    Skipped,
}

impl<R, E> Outcome<R, E> {
    /// Returns `true` if the item completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns the result if the item completed.
    #[must_use]
    pub fn completed(&self) -> Option<&R> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Failed(_) | Self::Skipped => None,
        }
    }

    /// Returns the error if the item failed.
    #[must_use]
    pub fn failed(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Completed(_) | Self::Skipped => None,
        }
    }

    /// Converts a result into a completed or failed outcome.
    pub(crate) fn from_result(result: Result<R, E>) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(error) => Self::Failed(error),
        }
    }
}
