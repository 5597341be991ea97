//! Reporter callback protocol
//!
//! The orchestration core delivers hierarchical pass/skip/fail results
//! through this trait and makes no decisions about rendering. The `begin`
//! queries double as filters: returning false means "do not run; treat as
//! skip", and the corresponding skip call follows immediately.

use crate::suite::{Module, Test};

/// The consumer of suite results. All eight callbacks must be implemented.
pub trait Reporter {
    /// Asked before a module is loaded. Returning false skips the module.
    fn module_begin(&mut self, module: &Module) -> bool;

    fn module_pass(&mut self, module: &Module);

    fn module_skip(&mut self, module: &Module, reason: Option<&str>);

    fn module_fail(&mut self, module: &Module, reason: Option<&str>);

    /// Asked before a test body is invoked. Returning false skips the test.
    fn test_begin(&mut self, test: &Test) -> bool;

    fn test_pass(&mut self, test: &Test);

    fn test_skip(&mut self, test: &Test, reason: Option<&str>);

    fn test_fail(&mut self, test: &Test, reason: Option<&str>);
}
