//! Checks that log an error before handing one back.

use super::Logger;
use crate::error::Error;
use std::panic::Location;

impl Logger {
    /// Logs an ERROR naming `expression` and returns [`Error::Assertion`]
    /// when `condition` is false. See [`log_assert!`](crate::log_assert) for
    /// the form that fills in `expression` itself.
    ///
    /// # Errors
    /// [`Error::Assertion`] carrying the caller's location.
    #[track_caller]
    pub fn ensure(&self, condition: bool, expression: &str, explanation: &str) -> Result<(), Error> {
        if condition {
            return Ok(());
        }
        let location = Location::caller();
        let mut message = format!("Assertion failed: {expression}");
        if !explanation.is_empty() {
            message.push_str(" => ");
            message.push_str(explanation);
        }
        self.error().write(message).endl();
        Err(Error::Assertion {
            expression: expression.to_string(),
            explanation: explanation.to_string(),
            file: location.file(),
            line: location.line(),
        })
    }

    /// Logs `message` as an ERROR and returns [`Error::Aborted`] for the
    /// caller to propagate.
    #[track_caller]
    #[must_use]
    pub fn fail(&self, message: impl Into<String>) -> Error {
        let message = message.into();
        self.error().write(&message).endl();
        Error::Aborted(message)
    }
}
