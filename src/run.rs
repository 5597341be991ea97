//! Driver entry point for embedding programs
//!
//! A driver binary registers its module bodies and hands control to
//! [`run`], which parses command-line options, assembles the capability
//! environment, scans the suite, and renders results to the console.

use crate::config::SuiteConfig;
use crate::console::ConsoleReporter;
use crate::env::TestEnv;
use crate::error::Result;
use crate::filter::NameFilter;
use crate::loader::ModuleLoader;
use crate::process::ProcessRunner;
use crate::suite::Suite;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Command-line options of a suite driver.
#[derive(Parser, Debug)]
#[command(about = "Run a directory-tree test suite", long_about = None)]
pub struct RunOptions {
    /// Wrap spawned commands with CMD
    #[arg(short = 'w', long, value_name = "CMD")]
    pub wrap: Option<String>,

    /// Send stderr to the terminal instead of capturing it
    #[arg(short = 'e', long)]
    pub err: bool,

    /// Add PATH to the search path for executables
    #[arg(long = "exec-path", value_name = "PATH")]
    pub exec_paths: Vec<PathBuf>,

    /// Dotted-name filter patterns (`?`, `*`, and `**` wildcards)
    pub patterns: Vec<String>,
}

/// Run the test suite rooted at `root`, reading options from the command
/// line. `exec_paths` lists extra directories searched for executables.
pub fn run(
    root: impl AsRef<Path>,
    exec_paths: &[PathBuf],
    loader: &dyn ModuleLoader,
) -> Result<ExitCode> {
    run_with_options(root, exec_paths, loader, RunOptions::parse())
}

/// Like [`run`], but with options supplied by the caller.
pub fn run_with_options(
    root: impl AsRef<Path>,
    exec_paths: &[PathBuf],
    loader: &dyn ModuleLoader,
    options: RunOptions,
) -> Result<ExitCode> {
    let root = root.as_ref();
    let config = SuiteConfig::discover(root)?;

    let mut search = options.exec_paths.clone();
    search.extend(config.exec_paths.iter().cloned());
    search.extend(exec_paths.iter().cloned());

    let mut runner = ProcessRunner::new(&search)?;
    if let Some(wrap) = options.wrap.as_deref().or(config.wrap.as_deref()) {
        runner = runner.with_wrap(wrap);
    }
    if options.err {
        runner = runner.passthrough_stderr();
    }
    let env = TestEnv::new(runner);

    let filter = if options.patterns.is_empty() {
        None
    } else {
        Some(NameFilter::new(&options.patterns)?)
    };

    let mut suite = Suite::new(root);
    if let Some(extension) = &config.module_extension {
        suite = suite.with_extension(extension);
    }
    if let Some(driver) = &config.driver {
        suite = suite.with_driver(driver);
    }
    suite.scan()?;

    let mut reporter = ConsoleReporter::new(filter);
    suite.run(&mut reporter, &env, loader)?;
    reporter.print_summary();

    Ok(if reporter.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
