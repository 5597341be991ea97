//! Capability environment for test modules
//!
//! The environment bundles the capabilities a module body may use while it
//! registers and runs tests. Fail/skip signaling lives in [`crate::signal`]
//! as free functions; the process capability is carried here.

use crate::process::ProcessRunner;

/// The capability bundle injected into module and test bodies.
pub struct TestEnv {
    /// Process execution and verification capability.
    pub proc: ProcessRunner,
}

impl TestEnv {
    pub fn new(proc: ProcessRunner) -> Self {
        TestEnv { proc }
    }
}
