//! The lifecycle contract between a test-running host and a reporter.

use std::fmt;
use std::time::Duration;

use crate::test::TestId;

/// Stringified diagnostic carried by a failure-class event.
///
/// Hosts flatten whatever failure object they hold into a message before
/// crossing into the reporter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for Diagnostic {
    fn from(message: &str) -> Self {
        Diagnostic::new(message)
    }
}

impl From<String> for Diagnostic {
    fn from(message: String) -> Self {
        Diagnostic { message }
    }
}

/// Callbacks a test-running host drives while executing tests.
///
/// For every test the host calls [`test_started`](TestListener::test_started),
/// then at most one failure-class callback, then
/// [`test_ended`](TestListener::test_ended). After the last test it calls
/// [`run_completed`](TestListener::run_completed) exactly once.
///
/// The failure-class callbacks and `run_completed` default to no-ops, so
/// listeners that only care about part of the lifecycle stay small. The
/// `elapsed` argument of a failure-class callback is the time spent up to
/// the moment the event fired, which may differ from the total handed to
/// `test_ended`.
pub trait TestListener {
    type Error;

    /// A test is about to run.
    fn test_started(&mut self, id: &TestId) -> Result<(), Self::Error>;

    /// The test aborted with an unexpected error.
    fn test_errored(
        &mut self,
        id: &TestId,
        diagnostic: &Diagnostic,
        elapsed: Duration,
    ) -> Result<(), Self::Error> {
        let _ = (id, diagnostic, elapsed);
        Ok(())
    }

    /// The test triggered a warning.
    fn test_warned(
        &mut self,
        id: &TestId,
        diagnostic: &Diagnostic,
        elapsed: Duration,
    ) -> Result<(), Self::Error> {
        let _ = (id, diagnostic, elapsed);
        Ok(())
    }

    /// An assertion of the test failed.
    fn test_failed(
        &mut self,
        id: &TestId,
        diagnostic: &Diagnostic,
        elapsed: Duration,
    ) -> Result<(), Self::Error> {
        let _ = (id, diagnostic, elapsed);
        Ok(())
    }

    /// The test declared itself incomplete.
    fn test_incomplete(
        &mut self,
        id: &TestId,
        diagnostic: &Diagnostic,
        elapsed: Duration,
    ) -> Result<(), Self::Error> {
        let _ = (id, diagnostic, elapsed);
        Ok(())
    }

    /// The test was flagged as risky by the host.
    fn test_risky(
        &mut self,
        id: &TestId,
        diagnostic: &Diagnostic,
        elapsed: Duration,
    ) -> Result<(), Self::Error> {
        let _ = (id, diagnostic, elapsed);
        Ok(())
    }

    /// The test was skipped.
    fn test_skipped(
        &mut self,
        id: &TestId,
        diagnostic: &Diagnostic,
        elapsed: Duration,
    ) -> Result<(), Self::Error> {
        let _ = (id, diagnostic, elapsed);
        Ok(())
    }

    /// The test finished, successfully or not. `elapsed` is its total
    /// runtime.
    fn test_ended(&mut self, id: &TestId, elapsed: Duration) -> Result<(), Self::Error>;

    /// The whole run finished after executing `executed_tests` tests.
    fn run_completed(&mut self, executed_tests: usize) -> Result<(), Self::Error> {
        let _ = executed_tests;
        Ok(())
    }
}
