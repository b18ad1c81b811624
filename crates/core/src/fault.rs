//! Faults raised outside the value channel.

use std::any::Any;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinError;

/// A failure that did not arrive as an `Err` from the producer itself.
///
/// Always wrapped into an [`ErrorInfo`](crate::ErrorInfo) before it reaches
/// a caller; recover it with [`ErrorInfo::cause_as`](crate::ErrorInfo::cause_as).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Fault {
    #[error("{0}")]
    Panicked(String),

    #[error("task was cancelled")]
    Cancelled,

    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}

impl Fault {
    /// Builds a [`Fault::Panicked`] from a raw panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(s) => (*s).to_string(),
                None => "task panicked".to_string(),
            },
        };
        Self::Panicked(message)
    }
}

impl From<JoinError> for Fault {
    fn from(err: JoinError) -> Self {
        if err.is_panic() {
            Self::from_panic(err.into_panic())
        } else {
            Self::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payload_str() {
        let fault = Fault::from_panic(Box::new("boom"));
        assert_eq!(fault, Fault::Panicked("boom".into()));
    }

    #[test]
    fn panic_payload_string() {
        let fault = Fault::from_panic(Box::new(format!("bad index {}", 3)));
        assert_eq!(fault.to_string(), "bad index 3");
    }

    #[test]
    fn panic_payload_opaque() {
        let fault = Fault::from_panic(Box::new(42u32));
        assert_eq!(fault.to_string(), "task panicked");
    }

    #[test]
    fn timeout_message() {
        let fault = Fault::TimedOut(Duration::from_millis(250));
        assert_eq!(fault.to_string(), "timed out after 250ms");
    }

    #[tokio::test]
    async fn aborted_task_is_cancelled() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let err = handle.await.unwrap_err();
        assert_eq!(Fault::from(err), Fault::Cancelled);
    }
}
