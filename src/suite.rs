//! Suite orchestration
//!
//! A [`Suite`] scans a directory tree for test modules and runs them in
//! dotted-name order. Each [`Module`] runs with the working directory scoped
//! to its own location, loads its registered [`Test`]s through a pluggable
//! [`ModuleLoader`](crate::loader::ModuleLoader), and reports structured
//! outcomes to a [`Reporter`].

use crate::env::TestEnv;
use crate::error::{Error, Result};
use crate::loader::ModuleLoader;
use crate::reporter::Reporter;
use crate::signal::{Disposition, Failure, Scope, Signal};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Default extension recognized as a test-module source file.
pub const DEFAULT_EXTENSION: &str = "test";

/// The body of one registered test.
pub type TestBody = Box<dyn Fn(&TestEnv) -> std::result::Result<(), Failure>>;

/// Options accepted at test registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestOptions {
    /// The test is expected to fail; a clean pass becomes a failure.
    pub expect_fail: bool,
}

impl TestOptions {
    pub fn expected_failure() -> Self {
        TestOptions { expect_fail: true }
    }
}

/// One named, independently reported unit of behavior.
pub struct Test {
    name: String,
    expect_fail: bool,
    body: TestBody,
}

/// Escalations a test run cannot absorb itself.
enum Escalation {
    Module(Signal),
    Interrupted,
}

impl Test {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expect_fail(&self) -> bool {
        self.expect_fail
    }

    fn run(
        &self,
        reporter: &mut dyn Reporter,
        env: &TestEnv,
    ) -> std::result::Result<(), Escalation> {
        if !reporter.test_begin(self) {
            reporter.test_skip(self, None);
            return Ok(());
        }
        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| (self.body)(env))) {
            Ok(outcome) => outcome,
            Err(payload) => Err(Failure::Error(anyhow::anyhow!(
                "test body panicked: {}",
                panic_message(payload.as_ref())
            ))),
        };
        match outcome {
            Ok(()) => {
                if self.expect_fail {
                    reporter.test_fail(self, Some("test passed but was expected to fail"));
                } else {
                    reporter.test_pass(self);
                }
            }
            Err(Failure::Signal(sig)) => match (sig.scope, sig.disposition) {
                (Scope::Test, Disposition::Fail) => {
                    if self.expect_fail {
                        reporter.test_pass(self);
                    } else {
                        let text = sig.render();
                        reporter.test_fail(self, text.as_deref());
                    }
                }
                (Scope::Test, Disposition::Skip) => {
                    let text = sig.render();
                    reporter.test_skip(self, text.as_deref());
                }
                (Scope::Module, _) => return Err(Escalation::Module(sig)),
            },
            Err(Failure::Error(err)) => {
                let text = format!("{:?}", err);
                reporter.test_fail(self, Some(&text));
            }
            Err(Failure::Interrupted) => return Err(Escalation::Interrupted),
        }
        Ok(())
    }
}

/// The registration scope handed to a module body while it loads.
pub struct ModuleContext<'a> {
    module_name: &'a str,
    env: &'a TestEnv,
    tests: Vec<Test>,
}

impl<'a> ModuleContext<'a> {
    fn new(module: &'a Module, env: &'a TestEnv) -> Self {
        ModuleContext {
            module_name: &module.name,
            env,
            tests: Vec::new(),
        }
    }

    /// The capability environment, for probing during load (for example to
    /// decide on a module skip).
    pub fn env(&self) -> &TestEnv {
        self.env
    }

    /// Register a test. Duplicate names abort the whole load; no tests from
    /// the module run.
    pub fn register<F>(&mut self, name: impl Into<String>, options: TestOptions, body: F) -> Result<()>
    where
        F: Fn(&TestEnv) -> std::result::Result<(), Failure> + 'static,
    {
        let name = name.into();
        if self.tests.iter().any(|t| t.name == name) {
            return Err(Error::DuplicateTestName {
                module: self.module_name.to_string(),
                name,
            });
        }
        self.tests.push(Test {
            name,
            expect_fail: options.expect_fail,
            body: Box::new(body),
        });
        Ok(())
    }
}

/// One discovered test-module source file.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    path: PathBuf,
}

impl Module {
    /// Dotted name derived from the path relative to the suite root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory tests of this module run in.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    fn load(&self, env: &TestEnv, loader: &dyn ModuleLoader) -> std::result::Result<Vec<Test>, Failure> {
        let mut ctx = ModuleContext::new(self, env);
        loader.load(self, &mut ctx)?;
        Ok(ctx.tests)
    }

    /// Load the module and run its tests, reporting every outcome.
    ///
    /// The working directory is scoped to the module's own directory and
    /// restored on every exit path. Module-scope signals from the load or
    /// from a test body are absorbed here; interrupts propagate.
    pub fn run(
        &self,
        reporter: &mut dyn Reporter,
        env: &TestEnv,
        loader: &dyn ModuleLoader,
    ) -> Result<()> {
        if !reporter.module_begin(self) {
            reporter.module_skip(self, None);
            return Ok(());
        }
        let _guard = WorkdirGuard::enter(self.dir())?;
        let tests = match self.load(env, loader) {
            Ok(tests) => tests,
            Err(Failure::Signal(sig)) => {
                let text = sig.render();
                match sig.disposition {
                    // A test-scope signal during load is a structural
                    // mistake; the module as a whole fails.
                    Disposition::Fail => reporter.module_fail(self, text.as_deref()),
                    Disposition::Skip if sig.scope == Scope::Module => {
                        reporter.module_skip(self, text.as_deref())
                    }
                    Disposition::Skip => reporter.module_fail(self, text.as_deref()),
                }
                return Ok(());
            }
            Err(Failure::Error(err)) => {
                let text = format!("{:?}", err);
                reporter.module_fail(self, Some(&text));
                return Ok(());
            }
            Err(Failure::Interrupted) => return Err(Error::Interrupted),
        };
        for test in &tests {
            match test.run(reporter, env) {
                Ok(()) => {}
                Err(Escalation::Module(sig)) => {
                    let text = sig.render();
                    match sig.disposition {
                        Disposition::Fail => reporter.module_fail(self, text.as_deref()),
                        Disposition::Skip => reporter.module_skip(self, text.as_deref()),
                    }
                    return Ok(());
                }
                Err(Escalation::Interrupted) => return Err(Error::Interrupted),
            }
        }
        reporter.module_pass(self);
        Ok(())
    }
}

/// An entire suite of tests, spread across a directory tree.
#[derive(Debug)]
pub struct Suite {
    root: PathBuf,
    extension: String,
    driver: Option<String>,
    modules: Vec<Module>,
}

impl Suite {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Suite {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            driver: None,
            modules: Vec::new(),
        }
    }

    /// Override the extension recognized as a test-module source file.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Name a root-level driver file to exclude from discovery.
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Scan the root directory tree for test modules.
    ///
    /// Hidden directories are pruned entirely; hidden files and the
    /// root-level driver file are skipped. Modules are sorted by dotted
    /// name. A scan yielding zero modules is a fatal configuration error.
    pub fn scan(&mut self) -> Result<()> {
        let mut modules = Vec::new();
        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if entry.depth() == 1 {
                if let Some(driver) = &self.driver {
                    if entry.file_name().to_str() == Some(driver.as_str()) {
                        continue;
                    }
                }
            }
            let rel = path
                .strip_prefix(&self.root)
                .map_err(|e| Error::Other(e.to_string()))?;
            modules.push(Module {
                name: dotted_name(rel),
                path: path.to_path_buf(),
            });
        }
        if modules.is_empty() {
            return Err(Error::NoModulesFound(self.root.clone()));
        }
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        self.modules = modules;
        Ok(())
    }

    /// Run every discovered module in order.
    pub fn run(
        &self,
        reporter: &mut dyn Reporter,
        env: &TestEnv,
        loader: &dyn ModuleLoader,
    ) -> Result<()> {
        for module in &self.modules {
            module.run(reporter, env, loader)?;
        }
        Ok(())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Root-relative path with separators replaced by `.` and the extension
/// stripped. Root-level files get no prefix.
fn dotted_name(rel: &Path) -> String {
    let stem = rel
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = String::new();
    if let Some(parent) = rel.parent() {
        for component in parent.components() {
            name.push_str(&component.as_os_str().to_string_lossy());
            name.push('.');
        }
    }
    name.push_str(&stem);
    name
}

/// Scoped working-directory change, restored on drop — including during
/// unwinding.
pub struct WorkdirGuard {
    prev: PathBuf,
}

impl WorkdirGuard {
    pub fn enter(dir: &Path) -> std::io::Result<Self> {
        let prev = std::env::current_dir()?;
        std::env::set_current_dir(dir)?;
        Ok(WorkdirGuard { prev })
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        // Drop cannot report failure; restoration is best effort.
        let _ = std::env::set_current_dir(&self.prev);
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessRunner;
    use crate::testutil::CWD_LOCK;
    use std::fs;
    use tempfile::TempDir;

    fn test_env() -> TestEnv {
        TestEnv::new(ProcessRunner::new(&[]).unwrap())
    }

    fn make_suite(files: &[&str]) -> (TempDir, Suite) {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }
        let suite = Suite::new(dir.path());
        (dir, suite)
    }

    #[test]
    fn test_scan_dotted_names() {
        let (_dir, mut suite) = make_suite(&[
            "zeta.test",
            "alpha.test",
            "sub/inner.test",
            "sub/deep/leaf.test",
            "notes.txt",
        ]);
        suite.scan().unwrap();
        let names: Vec<&str> = suite.modules().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["alpha", "sub.deep.leaf", "sub.inner", "zeta"]);
    }

    #[test]
    fn test_scan_skips_hidden() {
        let (_dir, mut suite) = make_suite(&[
            "visible.test",
            ".hidden.test",
            ".hiddendir/inside.test",
        ]);
        suite.scan().unwrap();
        let names: Vec<&str> = suite.modules().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["visible"]);
    }

    #[test]
    fn test_scan_skips_driver() {
        let (_dir, suite) = make_suite(&["suite.test", "other.test", "sub/suite.test"]);
        let mut suite = suite.with_driver("suite.test");
        suite.scan().unwrap();
        let names: Vec<&str> = suite.modules().iter().map(|m| m.name()).collect();
        // Only the root-level driver is excluded.
        assert_eq!(names, vec!["other", "sub.suite"]);
    }

    #[test]
    fn test_scan_empty_tree_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut suite = Suite::new(dir.path());
        assert!(matches!(suite.scan(), Err(Error::NoModulesFound(_))));
    }

    #[test]
    fn test_duplicate_registration() {
        let env = test_env();
        let module = Module {
            name: "mod".to_string(),
            path: PathBuf::from("mod.test"),
        };
        let mut ctx = ModuleContext::new(&module, &env);
        ctx.register("t1", TestOptions::default(), |_| Ok(())).unwrap();
        let err = ctx
            .register("t1", TestOptions::default(), |_| Ok(()))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateTestName { .. }));
    }

    #[test]
    fn test_workdir_guard_restores() {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let dir = TempDir::new().unwrap();
        let before = std::env::current_dir().unwrap();
        {
            let _guard = WorkdirGuard::enter(dir.path()).unwrap();
            assert_eq!(
                std::env::current_dir().unwrap(),
                dir.path().canonicalize().unwrap()
            );
        }
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_workdir_guard_restores_on_unwind() {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let dir = TempDir::new().unwrap();
        let before = std::env::current_dir().unwrap();
        let dir_path = dir.path().to_path_buf();
        let result = std::panic::catch_unwind(move || {
            let _guard = WorkdirGuard::enter(&dir_path).unwrap();
            panic!("boom");
        });
        assert!(result.is_err());
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_dotted_name_root_level() {
        assert_eq!(dotted_name(Path::new("mod.test")), "mod");
        assert_eq!(dotted_name(Path::new("a/b/mod.test")), "a.b.mod");
    }

    #[test]
    fn test_panic_message_from_boxed_payload() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");
        let payload: Box<dyn std::any::Any + Send> = Box::new(format!("code {}", 7));
        assert_eq!(panic_message(payload.as_ref()), "code 7");
        let payload: Box<dyn std::any::Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(payload.as_ref()), "non-string panic payload");
    }
}
