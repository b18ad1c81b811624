//! Value-based operation outcomes.
//!
//! An [`Outcome`] holds either a value or an [`ErrorInfo`]; failures are
//! ordinary data. The [`capture`] adapters are the one place where faults
//! raised by asynchronous work are converted into that form.
//!
//! No I/O. The only async dependency is tokio's task spawner and timer.

pub mod capture;
pub mod error;
pub mod fault;
pub mod outcome;

pub use capture::{
    attempt_async, attempt_spawned, attempt_spawned_with_timeout, attempt_with_timeout,
};
pub use error::{Cause, ErrorInfo};
pub use fault::Fault;
pub use outcome::Outcome;
