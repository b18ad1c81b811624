//! The outcome container.

use crate::error::ErrorInfo;
use serde::Serialize;

/// Either a produced value or a failure, never both.
///
/// Immutable once built. Reading the inactive case is not possible through
/// [`value`](Self::value) / [`error`](Self::error), which return `None`;
/// the `unwrap_*` accessors panic instead.
///
/// Serialized adjacently tagged:
/// `{"status": "success", "payload": 2}` or
/// `{"status": "failure", "payload": {"message": "..", "cause": null}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorInfo),
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    pub fn fail(error: ErrorInfo) -> Self {
        Self::Failure(error)
    }

    #[inline]
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn into_value(self) -> Option<T> {
        self.destructure().0
    }

    pub fn into_error(self) -> Option<ErrorInfo> {
        self.destructure().1
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// If the outcome failed; the panic message carries the error message.
    #[track_caller]
    pub fn unwrap_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("called `Outcome::unwrap_value` on a failure: {error}"),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// If the outcome succeeded.
    #[track_caller]
    pub fn unwrap_error(self) -> ErrorInfo {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_error` on a success"),
            Self::Failure(error) => error,
        }
    }

    /// Splits into `(value, error)` for tuple-style consumption.
    ///
    /// Exactly one side is `Some`.
    pub fn destructure(self) -> (Option<T>, Option<ErrorInfo>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(error) => (None, Some(error)),
        }
    }

    /// Like [`destructure`](Self::destructure), but the inactive side is
    /// filled with its `Default` placeholder. Only the side matching
    /// [`succeeded`](Self::succeeded) is meaningful.
    pub fn destructure_or_default(self) -> (T, ErrorInfo)
    where
        T: Default,
    {
        match self {
            Self::Success(value) => (value, ErrorInfo::default()),
            Self::Failure(error) => (T::default(), error),
        }
    }

    pub fn as_result(&self) -> Result<&T, &ErrorInfo> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorInfo> {
        self.into()
    }

    /// Transforms the value of a success; failures pass through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<ErrorInfo>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorInfo> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
