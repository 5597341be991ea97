//! treetest - directory-tree test orchestration
//!
//! treetest discovers test modules laid out in a directory hierarchy, runs
//! each of them with the working directory scoped to the module's own
//! location, drives external processes as part of those tests, verifies
//! process output against expectations, and reports hierarchical
//! pass/fail/skip results through a pluggable [`reporter::Reporter`].
//!
//! # Architecture
//!
//! - [`suite`]: Suite/Module/Test orchestration and working-directory scoping
//! - [`loader`]: pluggable supply of compiled module bodies
//! - [`signal`]: structured fail/skip signaling at test and module scope
//! - [`process`]: executable resolution, process spawning, output verification
//! - [`filter`]: dotted-name filtering with `?`, `*`, and `**` wildcards
//! - [`reporter`]: the begin/pass/skip/fail callback protocol
//! - [`console`]: a stdout reporter with filtering and a summary
//! - [`config`]: optional `.treetest.conf` suite configuration
//! - [`run`]: the driver entry point for embedding programs
//! - [`error`]: error types and Result alias
//!
//! # Example
//!
//! A driver program names each discovered module (dotted path under the
//! suite root) and registers its body:
//!
//! ```no_run
//! use treetest::loader::ModuleRegistry;
//! use treetest::process::ProcessSpec;
//! use treetest::signal::fail;
//! use treetest::suite::TestOptions;
//!
//! fn main() -> treetest::Result<std::process::ExitCode> {
//!     let mut modules = ModuleRegistry::new();
//!     modules.register("echo", |ctx| {
//!         ctx.register("echo_abc", TestOptions::default(), |env| {
//!             let spec = ProcessSpec::new(["echo", "abc"]).expect_text("abc\n");
//!             env.proc.check(&spec)
//!         })?;
//!         ctx.register("sanity", TestOptions::default(), |_env| {
//!             if 2 + 2 != 4 {
//!                 return Err(fail("arithmetic is broken"));
//!             }
//!             Ok(())
//!         })?;
//!         Ok(())
//!     });
//!     treetest::run::run("tests", &[], &modules)
//! }
//! ```

pub mod config;
pub mod console;
pub mod env;
pub mod error;
pub mod filter;
pub mod loader;
pub mod process;
pub mod reporter;
pub mod run;
pub mod signal;
pub mod suite;

pub use error::{Error, Result};
pub use signal::{fail, fail_module, skip, skip_module, Failure, Signal};
