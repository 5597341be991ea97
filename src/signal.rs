//! Structured fail/skip signaling
//!
//! Test bodies request skip and fail outcomes by returning a [`Signal`]
//! scoped to either the current test or the whole module. Anything else a
//! body returns is an unstructured failure. Interrupt requests are a third
//! category that no orchestration layer is allowed to absorb.

use std::fmt;

/// The scope a signal applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Test,
    Module,
}

/// Whether the signal requests a failure or a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Fail,
    Skip,
}

/// A structured skip/fail request with an accumulating diagnostic buffer.
#[derive(Debug, Clone)]
pub struct Signal {
    pub scope: Scope,
    pub disposition: Disposition,
    pub reason: Option<String>,
    message: String,
}

impl Signal {
    pub fn new(scope: Scope, disposition: Disposition, reason: Option<String>) -> Self {
        Signal {
            scope,
            disposition,
            reason,
            message: String::new(),
        }
    }

    pub fn test_fail(reason: Option<String>) -> Self {
        Signal::new(Scope::Test, Disposition::Fail, reason)
    }

    pub fn test_skip(reason: Option<String>) -> Self {
        Signal::new(Scope::Test, Disposition::Skip, reason)
    }

    pub fn module_fail(reason: Option<String>) -> Self {
        Signal::new(Scope::Module, Disposition::Fail, reason)
    }

    pub fn module_skip(reason: Option<String>) -> Self {
        Signal::new(Scope::Module, Disposition::Skip, reason)
    }

    /// Append diagnostic text to the signal's message buffer.
    pub fn write(&mut self, text: &str) {
        self.message.push_str(text);
    }

    /// Combined reason and diagnostic text, or None if the signal carries
    /// neither.
    pub fn render(&self) -> Option<String> {
        match (&self.reason, self.message.is_empty()) {
            (Some(reason), true) => Some(reason.clone()),
            (Some(reason), false) => Some(format!("{}\n{}", reason, self.message)),
            (None, false) => Some(self.message.clone()),
            (None, true) => None,
        }
    }
}

impl fmt::Write for Signal {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.message.push_str(s);
        Ok(())
    }
}

/// The error type of test bodies and module loaders.
#[derive(Debug)]
pub enum Failure {
    /// A structured skip/fail request.
    Signal(Signal),
    /// Anything else raised inside a body.
    Error(anyhow::Error),
    /// An interrupt request; propagates past every catch point.
    Interrupted,
}

impl From<Signal> for Failure {
    fn from(sig: Signal) -> Self {
        Failure::Signal(sig)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::Error(err)
    }
}

impl From<crate::error::Error> for Failure {
    fn from(err: crate::error::Error) -> Self {
        Failure::Error(err.into())
    }
}

impl From<std::io::Error> for Failure {
    fn from(err: std::io::Error) -> Self {
        Failure::Error(err.into())
    }
}

/// Fail the current test.
pub fn fail(reason: impl Into<String>) -> Failure {
    Signal::test_fail(Some(reason.into())).into()
}

/// Skip the current test.
pub fn skip(reason: impl Into<String>) -> Failure {
    Signal::test_skip(Some(reason.into())).into()
}

/// Fail the enclosing module; remaining tests do not run.
pub fn fail_module(reason: impl Into<String>) -> Failure {
    Signal::module_fail(Some(reason.into())).into()
}

/// Skip the enclosing module; remaining tests do not run.
pub fn skip_module(reason: impl Into<String>) -> Failure {
    Signal::module_skip(Some(reason.into())).into()
}
