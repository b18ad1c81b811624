//! Failure descriptor carried by a failed [`Outcome`](crate::Outcome).

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::sync::Arc;
use thiserror::Error;

/// A lower-level fault that triggered an [`ErrorInfo`].
///
/// Shared, not owned: cloning an `ErrorInfo` clones the handle, and equality
/// compares handles by identity.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Immutable failure description: a message plus an optional cause.
///
/// `Display` writes the message verbatim and never includes cause details.
/// The cause is reachable through [`std::error::Error::source`].
#[derive(Debug, Clone, Default, Error)]
#[error("{message}")]
pub struct ErrorInfo {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl ErrorInfo {
    /// Failure with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Failure wrapping an underlying fault.
    ///
    /// `message` is independent of the cause's own message; keeping the two
    /// consistent is up to the caller.
    pub fn with_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Wraps `fault`, taking the message from its `Display` output.
    pub fn from_fault<E>(fault: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = fault.to_string();
        Self::with_cause(message, Arc::new(fault))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Returns the cause as `E` if it is one.
    pub fn cause_as<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.cause.as_deref()?.downcast_ref::<E>()
    }
}

impl PartialEq for ErrorInfo {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_cause && self.message == other.message
    }
}

impl Eq for ErrorInfo {}

impl From<&str> for ErrorInfo {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorInfo {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<crate::Fault> for ErrorInfo {
    fn from(fault: crate::Fault) -> Self {
        Self::from_fault(fault)
    }
}

/// Serialized as `{"message": .., "cause": <cause Display or null>}`.
impl Serialize for ErrorInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ErrorInfo", 2)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("cause", &self.cause.as_ref().map(|c| c.to_string()))?;
        state.end()
    }
}
