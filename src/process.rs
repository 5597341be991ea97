//! Process execution and output verification
//!
//! This module provides the [`ProcessRunner`], which resolves executables,
//! spawns them with controlled input, classifies how they terminated, and
//! verifies captured output against an expectation. Verification failures are
//! surfaced as structured test-fail signals carrying multi-section
//! diagnostics: command line, working directory, input, diff, stderr.

use crate::error::{Error, Result};
use crate::signal::{Failure, Signal};
use difference::{Changeset, Difference};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// Where a spawned process's input comes from.
#[derive(Debug, Clone, Default)]
pub enum Input {
    #[default]
    None,
    Text(String),
    Bytes(Vec<u8>),
    File(PathBuf),
}

impl Input {
    /// Parse the `@path` shorthand: a leading `@` names a file, anything
    /// else is literal text.
    pub fn parse(s: &str) -> Input {
        match s.strip_prefix('@') {
            Some(path) => Input::File(PathBuf::from(path)),
            None => Input::Text(s.to_string()),
        }
    }

    fn decorate(&self, msg: &mut String) {
        match self {
            Input::None => {}
            Input::Text(s) => write_stream("stdin", s.as_bytes(), msg),
            Input::Bytes(b) => write_stream("stdin", b, msg),
            Input::File(path) => msg.push_str(&format!("input file: {}\n", path.display())),
        }
    }
}

/// Expected stdout. `Bytes` is binary-significant: comparison is byte-exact
/// and mismatches render as escaped byte listings.
#[derive(Debug, Clone)]
pub enum Expected {
    Text(String),
    Bytes(Vec<u8>),
    File(PathBuf),
}

impl Expected {
    /// The expectation's bytes and whether they are binary-significant.
    fn contents(&self) -> Result<(Vec<u8>, bool)> {
        match self {
            Expected::Text(s) => Ok((s.as_bytes().to_vec(), false)),
            Expected::Bytes(b) => Ok((b.clone(), true)),
            Expected::File(path) => Ok((std::fs::read(path)?, false)),
        }
    }
}

/// Exit-status check policy. Signal termination is fatal regardless of
/// policy.
#[derive(Clone, Copy)]
pub enum StatusPolicy {
    /// The exit code must equal the given value.
    Exact(i32),
    /// The exit code must satisfy the predicate.
    Predicate(fn(i32) -> bool),
    /// Any exit code is accepted.
    Any,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        StatusPolicy::Exact(0)
    }
}

impl std::fmt::Debug for StatusPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusPolicy::Exact(code) => write!(f, "Exact({})", code),
            StatusPolicy::Predicate(_) => write!(f, "Predicate(..)"),
            StatusPolicy::Any => write!(f, "Any"),
        }
    }
}

/// Everything needed to run and verify one process.
#[derive(Debug, Clone, Default)]
pub struct ProcessSpec {
    pub argv: Vec<String>,
    pub executable: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
    pub input: Input,
    pub capture_stderr: bool,
    pub status: StatusPolicy,
    pub expected: Option<Expected>,
}

impl ProcessSpec {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProcessSpec {
            argv: argv.into_iter().map(Into::into).collect(),
            capture_stderr: true,
            ..Default::default()
        }
    }

    pub fn input(mut self, input: Input) -> Self {
        self.input = input;
        self
    }

    pub fn text_input(self, text: impl Into<String>) -> Self {
        self.input(Input::Text(text.into()))
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn status(mut self, policy: StatusPolicy) -> Self {
        self.status = policy;
        self
    }

    pub fn expect(mut self, expected: Expected) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn expect_text(self, text: impl Into<String>) -> Self {
        self.expect(Expected::Text(text.into()))
    }

    pub fn no_stderr_capture(mut self) -> Self {
        self.capture_stderr = false;
        self
    }
}

/// The observed outcome of one spawned process.
#[derive(Debug, Clone, Default)]
pub struct ProcessResult {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Terminating signal number, if any.
    pub signal: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Option<Vec<u8>>,
    /// The process closed its input stream before consuming all of it, while
    /// still terminating on its own.
    pub broken_pipe: bool,
}

/// Runs programs for a test suite.
///
/// The runner configuration is immutable: an ordered executable search path
/// (explicit directories first, then the environment's `PATH`), an optional
/// wrapper command prepended to every invocation, and the default stderr
/// capture behavior. Resolved executables are cached for the lifetime of the
/// runner.
#[derive(Debug)]
pub struct ProcessRunner {
    paths: Vec<PathBuf>,
    wrap: Vec<String>,
    capture_stderr: bool,
    cache: RefCell<HashMap<String, PathBuf>>,
}

impl ProcessRunner {
    pub fn new(exec_paths: &[PathBuf]) -> Result<Self> {
        let base = std::env::current_dir()?;
        let mut paths: Vec<PathBuf> = exec_paths.iter().map(|p| absolutize(&base, p)).collect();
        if let Some(ospaths) = std::env::var_os("PATH") {
            for ospath in std::env::split_paths(&ospaths) {
                if ospath.as_os_str().is_empty() {
                    continue;
                }
                paths.push(absolutize(&base, &ospath));
            }
        }
        Ok(ProcessRunner {
            paths,
            wrap: Vec::new(),
            capture_stderr: true,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// Prepend a wrapper command (split on whitespace) to every invocation.
    pub fn with_wrap(mut self, wrap: &str) -> Self {
        self.wrap = wrap.split_whitespace().map(str::to_string).collect();
        self
    }

    /// Let spawned processes write stderr straight to the terminal instead
    /// of capturing it.
    pub fn passthrough_stderr(mut self) -> Self {
        self.capture_stderr = false;
        self
    }

    /// Find an executable in the search path.
    ///
    /// Names starting with `./`, `../`, or `/` are returned unchanged.
    /// Otherwise each search directory is tried in order and the first
    /// existing regular file wins.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.starts_with("./") || name.starts_with("../") || name.starts_with('/') {
            return Ok(PathBuf::from(name));
        }
        if let Some(path) = self.cache.borrow().get(name) {
            return Ok(path.clone());
        }
        for dir in &self.paths {
            let candidate = dir.join(name);
            if candidate.is_file() {
                self.cache
                    .borrow_mut()
                    .insert(name.to_string(), candidate.clone());
                return Ok(candidate);
            }
        }
        Err(Error::ProcessNotFound(name.to_string()))
    }

    /// Spawn the process described by `spec`, deliver its input, and wait for
    /// termination.
    ///
    /// A broken pipe while delivering inline input is recorded on the result
    /// but is not fatal here; the process is still waited to completion.
    pub fn run(&self, spec: &ProcessSpec) -> std::result::Result<ProcessResult, Failure> {
        let program = match &spec.executable {
            Some(path) => path.clone(),
            None => {
                let name = spec
                    .argv
                    .first()
                    .ok_or_else(|| self.failure(spec, None, "empty command".to_string()))?;
                self.resolve(name)
                    .map_err(|e| self.failure(spec, None, e.to_string()))?
            }
        };

        let mut command = match self.wrap.split_first() {
            Some((wrapper, wrap_args)) => {
                let mut command = Command::new(wrapper);
                command.args(wrap_args).arg(&program);
                command.args(spec.argv.iter().skip(1));
                command
            }
            None => {
                let mut command = Command::new(&program);
                command.args(spec.argv.iter().skip(1));
                command
            }
        };
        if let Some(cwd) = &spec.cwd {
            command.current_dir(cwd);
        }
        command.stdout(Stdio::piped());
        let capture_stderr = spec.capture_stderr && self.capture_stderr;
        command.stderr(if capture_stderr {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });

        let inline_input = match &spec.input {
            Input::None => {
                command.stdin(Stdio::null());
                None
            }
            Input::Text(s) => {
                command.stdin(Stdio::piped());
                Some(s.as_bytes().to_vec())
            }
            Input::Bytes(b) => {
                command.stdin(Stdio::piped());
                Some(b.clone())
            }
            Input::File(path) => {
                let file = File::open(path).map_err(|e| {
                    self.failure(
                        spec,
                        None,
                        format!("cannot open input file {}: {}", path.display(), e),
                    )
                })?;
                command.stdin(Stdio::from(file));
                None
            }
        };

        let mut child = command
            .spawn()
            .map_err(|e| self.failure(spec, None, format!("failed to spawn process: {}", e)))?;

        // Deliver inline input from a separate thread so a child that never
        // reads cannot deadlock us against a full pipe.
        let writer = match (inline_input, child.stdin.take()) {
            (Some(data), Some(mut stdin)) => Some(thread::spawn(
                move || -> std::io::Result<bool> {
                    match stdin.write_all(&data).and_then(|_| stdin.flush()) {
                        Ok(()) => Ok(false),
                        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(true),
                        Err(e) => Err(e),
                    }
                },
            )),
            _ => None,
        };

        let stderr_reader = child.stderr.take().map(|mut stderr| {
            thread::spawn(move || -> std::io::Result<Vec<u8>> {
                let mut buf = Vec::new();
                stderr.read_to_end(&mut buf)?;
                Ok(buf)
            })
        });

        let mut stdout = Vec::new();
        if let Some(mut out) = child.stdout.take() {
            out.read_to_end(&mut stdout).map_err(Failure::from)?;
        }

        let status = child.wait().map_err(Failure::from)?;

        let broken_pipe = match writer {
            Some(handle) => match handle.join() {
                Ok(res) => res?,
                Err(_) => false,
            },
            None => false,
        };

        let stderr = match stderr_reader {
            Some(handle) => match handle.join() {
                Ok(res) => Some(res?),
                Err(_) => None,
            },
            None => None,
        };

        Ok(ProcessResult {
            code: status.code(),
            signal: exit_signal(&status),
            stdout,
            stderr,
            broken_pipe,
        })
    }

    /// Check the process termination against the spec's status policy.
    ///
    /// Signal termination always fails. A recorded broken pipe fails even
    /// under [`StatusPolicy::Any`]: the caller expected a well-behaved full
    /// consumption of input.
    pub fn check_exit(
        &self,
        spec: &ProcessSpec,
        result: &ProcessResult,
    ) -> std::result::Result<(), Failure> {
        if let Some(signal) = result.signal {
            return Err(self.result_failure(
                spec,
                result,
                format!("process received {}", signame(signal)),
            ));
        }
        let code = match result.code {
            Some(code) => code,
            None => {
                return Err(self.result_failure(
                    spec,
                    result,
                    "process terminated abnormally".to_string(),
                ))
            }
        };
        match spec.status {
            StatusPolicy::Exact(want) => {
                if code != want {
                    return Err(self.result_failure(
                        spec,
                        result,
                        format!("process returned failure ({})", code),
                    ));
                }
            }
            StatusPolicy::Predicate(accept) => {
                if !accept(code) {
                    return Err(self.result_failure(
                        spec,
                        result,
                        format!("process returned unexpected status ({})", code),
                    ));
                }
            }
            StatusPolicy::Any => {}
        }
        if result.broken_pipe {
            return Err(self.result_failure(
                spec,
                result,
                "process closed stdin unexpectedly".to_string(),
            ));
        }
        Ok(())
    }

    /// Compare captured stdout against the spec's expectation, if any.
    pub fn check_output(
        &self,
        spec: &ProcessSpec,
        result: &ProcessResult,
    ) -> std::result::Result<(), Failure> {
        let expected = match &spec.expected {
            Some(expected) => expected,
            None => return Ok(()),
        };
        let (expected, binary) = expected.contents()?;

        if !binary {
            match (
                std::str::from_utf8(&expected),
                std::str::from_utf8(&result.stdout),
            ) {
                (Ok(expected_text), Ok(actual_text)) => {
                    if expected_text == actual_text {
                        return Ok(());
                    }
                    let mut msg = String::new();
                    self.decorate_front(spec, &mut msg);
                    write_diff(expected_text, actual_text, &mut msg);
                    self.decorate_stderr(result, &mut msg);
                    return Err(output_failure(msg));
                }
                _ => {
                    // Fall through to the byte comparison below.
                }
            }
        }

        if expected == result.stdout {
            return Ok(());
        }
        let mut msg = String::new();
        self.decorate_front(spec, &mut msg);
        if !binary {
            msg.push_str("<invalid UTF-8 encountered, comparing bytes>\n");
        }
        write_diff(
            &escape_lines(&expected),
            &escape_lines(&result.stdout),
            &mut msg,
        );
        self.decorate_stderr(result, &mut msg);
        Err(output_failure(msg))
    }

    /// Run a program and return its stdout after checking the exit status.
    pub fn get_output(&self, spec: &ProcessSpec) -> std::result::Result<Vec<u8>, Failure> {
        let result = self.run(spec)?;
        self.check_exit(spec, &result)?;
        Ok(result.stdout)
    }

    /// Run a program and verify both its exit status and its output.
    pub fn check(&self, spec: &ProcessSpec) -> std::result::Result<(), Failure> {
        let result = self.run(spec)?;
        self.check_exit(spec, &result)?;
        self.check_output(spec, &result)
    }

    fn decorate_front(&self, spec: &ProcessSpec, msg: &mut String) {
        let command: Vec<&str> = self
            .wrap
            .iter()
            .chain(spec.argv.iter())
            .map(String::as_str)
            .collect();
        msg.push_str(&format!("command: {}\n", command.join(" ")));
        if let Some(cwd) = &spec.cwd {
            msg.push_str(&format!("cwd: {}\n", cwd.display()));
        }
        spec.input.decorate(msg);
    }

    fn decorate_stderr(&self, result: &ProcessResult, msg: &mut String) {
        if let Some(stderr) = &result.stderr {
            write_stream("stderr", stderr, msg);
        }
    }

    fn failure(&self, spec: &ProcessSpec, result: Option<&ProcessResult>, reason: String) -> Failure {
        let mut sig = Signal::test_fail(Some(reason));
        let mut msg = String::new();
        self.decorate_front(spec, &mut msg);
        if let Some(result) = result {
            self.decorate_stderr(result, &mut msg);
        }
        sig.write(&msg);
        sig.into()
    }

    fn result_failure(&self, spec: &ProcessSpec, result: &ProcessResult, reason: String) -> Failure {
        self.failure(spec, Some(result), reason)
    }
}

fn output_failure(msg: String) -> Failure {
    let mut sig = Signal::test_fail(Some("incorrect output".to_string()));
    sig.write(&msg);
    sig.into()
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(unix)]
fn exit_signal(status: &std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &std::process::ExitStatus) -> Option<i32> {
    None
}

fn signame(signal: i32) -> String {
    let name = match signal {
        1 => "SIGHUP",
        2 => "SIGINT",
        3 => "SIGQUIT",
        4 => "SIGILL",
        6 => "SIGABRT",
        8 => "SIGFPE",
        9 => "SIGKILL",
        11 => "SIGSEGV",
        13 => "SIGPIPE",
        15 => "SIGTERM",
        _ => return format!("signal {}", signal),
    };
    format!("signal {} ({})", signal, name)
}

/// Render a captured stream as a labeled section. Valid UTF-8 renders as
/// indented text lines; anything else as escaped bytes under a `<binary>`
/// marker.
fn write_stream(name: &str, stream: &[u8], msg: &mut String) {
    if stream.is_empty() {
        return;
    }
    msg.push_str(&format!("=== {} ===\n", name));
    // NUL bytes are valid UTF-8 but never readable output; treat them as
    // binary too.
    match std::str::from_utf8(stream).ok().filter(|_| !stream.contains(&0)) {
        Some(text) => {
            for line in text.lines() {
                msg.push_str(&format!("  {}\n", line));
            }
            if !text.ends_with('\n') {
                msg.push_str("<no newline at end of stream>\n");
            }
        }
        None => {
            msg.push_str("<binary>\n");
            for line in byte_lines(stream) {
                msg.push_str(&format!("  {}\n", line.escape_ascii()));
            }
            if !stream.ends_with(b"\n") {
                msg.push_str("<no newline at end of stream>\n");
            }
        }
    }
}

/// Split a byte stream on newlines, dropping the terminator of a trailing
/// newline the way `str::lines` does.
fn byte_lines(stream: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = stream.split(|&b| b == b'\n').collect();
    if stream.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

/// One escaped line per input line, for byte-level diffs.
fn escape_lines(stream: &[u8]) -> String {
    byte_lines(stream)
        .iter()
        .map(|line| line.escape_ascii().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a line-oriented edit script between expected and actual text.
fn write_diff(expected: &str, actual: &str, msg: &mut String) {
    msg.push_str("=== diff ===\n");
    let changeset = Changeset::new(expected, actual, "\n");
    for diff in &changeset.diffs {
        let (prefix, text) = match diff {
            Difference::Same(text) => ("  ", text),
            Difference::Rem(text) => ("- ", text),
            Difference::Add(text) => ("+ ", text),
        };
        for line in text.split('\n') {
            msg.push_str(prefix);
            msg.push_str(line);
            msg.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{Disposition, Scope};
    use std::fs;
    use tempfile::TempDir;

    fn runner() -> ProcessRunner {
        ProcessRunner::new(&[]).unwrap()
    }

    fn reason_of(failure: Failure) -> String {
        match failure {
            Failure::Signal(sig) => {
                assert_eq!(sig.scope, Scope::Test);
                assert_eq!(sig.disposition, Disposition::Fail);
                sig.render().unwrap()
            }
            other => panic!("expected signal failure, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_relative_passthrough() {
        let r = runner();
        assert_eq!(r.resolve("./prog").unwrap(), PathBuf::from("./prog"));
        assert_eq!(r.resolve("../prog").unwrap(), PathBuf::from("../prog"));
        assert_eq!(r.resolve("/bin/prog").unwrap(), PathBuf::from("/bin/prog"));
    }

    #[test]
    fn test_resolve_missing() {
        let r = runner();
        let err = r.resolve("definitely-not-a-real-program-745").unwrap_err();
        assert!(matches!(err, Error::ProcessNotFound(_)));
    }

    #[test]
    fn test_resolve_explicit_path_first() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("mytool"), "#!/bin/sh\n").unwrap();
        let r = ProcessRunner::new(&[dir.path().to_path_buf()]).unwrap();
        let resolved = r.resolve("mytool").unwrap();
        assert_eq!(resolved, dir.path().join("mytool"));
        // Second lookup is served from the cache.
        assert_eq!(r.resolve("mytool").unwrap(), resolved);
    }

    #[test]
    fn test_check_exit_exact() {
        let r = runner();
        let spec = ProcessSpec::new(["prog"]);
        let ok = ProcessResult {
            code: Some(0),
            ..Default::default()
        };
        assert!(r.check_exit(&spec, &ok).is_ok());

        let bad = ProcessResult {
            code: Some(1),
            ..Default::default()
        };
        let reason = reason_of(r.check_exit(&spec, &bad).unwrap_err());
        assert!(reason.contains("process returned failure (1)"));
        assert!(reason.contains("command: prog"));
    }

    #[test]
    fn test_check_exit_signal_fatal_under_any() {
        let r = runner();
        let spec = ProcessSpec::new(["prog"]).status(StatusPolicy::Any);
        let result = ProcessResult {
            signal: Some(15),
            ..Default::default()
        };
        let reason = reason_of(r.check_exit(&spec, &result).unwrap_err());
        assert!(reason.contains("signal 15 (SIGTERM)"));
    }

    #[test]
    fn test_check_exit_predicate() {
        let r = runner();
        let spec = ProcessSpec::new(["prog"]).status(StatusPolicy::Predicate(|c| c > 0));
        let result = ProcessResult {
            code: Some(2),
            ..Default::default()
        };
        assert!(r.check_exit(&spec, &result).is_ok());
        let zero = ProcessResult {
            code: Some(0),
            ..Default::default()
        };
        assert!(r.check_exit(&spec, &zero).is_err());
    }

    #[test]
    fn test_check_exit_broken_pipe_under_any() {
        let r = runner();
        let spec = ProcessSpec::new(["prog"]).status(StatusPolicy::Any);
        let result = ProcessResult {
            code: Some(0),
            broken_pipe: true,
            ..Default::default()
        };
        let reason = reason_of(r.check_exit(&spec, &result).unwrap_err());
        assert!(reason.contains("closed stdin unexpectedly"));
    }

    #[test]
    fn test_check_output_text_diff() {
        let r = runner();
        let spec = ProcessSpec::new(["prog"]).expect_text("a\nb\n");
        let result = ProcessResult {
            code: Some(0),
            stdout: b"a\nc\n".to_vec(),
            ..Default::default()
        };
        let reason = reason_of(r.check_output(&spec, &result).unwrap_err());
        assert!(reason.starts_with("incorrect output"));
        assert!(reason.contains("=== diff ==="));
        assert!(reason.contains("- b"));
        assert!(reason.contains("+ c"));
    }

    #[test]
    fn test_check_output_binary_mismatch() {
        let r = runner();
        let spec = ProcessSpec::new(["prog"]).expect(Expected::Bytes(vec![0, 1, 2]));
        let result = ProcessResult {
            code: Some(0),
            stdout: vec![0, 1, 3],
            ..Default::default()
        };
        let reason = reason_of(r.check_output(&spec, &result).unwrap_err());
        assert!(reason.contains("=== diff ==="));
        assert!(reason.contains("\\x00\\x01"));
    }

    #[test]
    fn test_check_output_invalid_utf8_falls_back() {
        let r = runner();
        let spec = ProcessSpec::new(["prog"]).expect_text("hi\n");
        let result = ProcessResult {
            code: Some(0),
            stdout: vec![0xff, 0xfe],
            ..Default::default()
        };
        let reason = reason_of(r.check_output(&spec, &result).unwrap_err());
        assert!(reason.contains("invalid UTF-8"));
    }

    #[test]
    fn test_check_output_no_expectation() {
        let r = runner();
        let spec = ProcessSpec::new(["prog"]);
        let result = ProcessResult {
            code: Some(3),
            stdout: b"whatever".to_vec(),
            ..Default::default()
        };
        assert!(r.check_output(&spec, &result).is_ok());
    }

    #[test]
    fn test_input_parse() {
        assert!(matches!(Input::parse("hello"), Input::Text(_)));
        match Input::parse("@data/in.txt") {
            Input::File(path) => assert_eq!(path, PathBuf::from("data/in.txt")),
            other => panic!("expected file input, got {:?}", other),
        }
    }

    #[test]
    fn test_write_stream_text() {
        let mut msg = String::new();
        write_stream("stdin", b"one\ntwo\n", &mut msg);
        assert_eq!(msg, "=== stdin ===\n  one\n  two\n");
    }

    #[test]
    fn test_write_stream_no_trailing_newline() {
        let mut msg = String::new();
        write_stream("stdin", b"one", &mut msg);
        assert_eq!(msg, "=== stdin ===\n  one\n<no newline at end of stream>\n");
    }

    #[test]
    fn test_write_stream_binary() {
        let mut msg = String::new();
        write_stream("stdout", &[0x00, 0x01, b'\n'], &mut msg);
        assert!(msg.contains("<binary>"));
        assert!(msg.contains("\\x00\\x01"));
    }

    #[test]
    fn test_write_stream_empty() {
        let mut msg = String::new();
        write_stream("stderr", b"", &mut msg);
        assert!(msg.is_empty());
    }

    #[test]
    fn test_signame() {
        assert_eq!(signame(9), "signal 9 (SIGKILL)");
        assert_eq!(signame(64), "signal 64");
    }
}
