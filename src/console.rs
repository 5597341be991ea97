//! Console reporter
//!
//! Renders suite progress as one line per test with bracket-boxed statuses,
//! per-module failure blocks, and a final summary. Name filtering is wired
//! here: prefix matching gates module descent, full matching on the
//! `module.test` dotted name gates individual tests.

use crate::filter::NameFilter;
use crate::reporter::Reporter;
use crate::suite::{Module, Test};
use console::style;
use std::io::Write;

/// A [`Reporter`] that renders to stdout.
pub struct ConsoleReporter {
    filter: Option<NameFilter>,
    current_module: String,
    partial_line: bool,
    npass: usize,
    nskip: usize,
    nfail: usize,
    mpass: usize,
    mskip: usize,
    mfail: usize,
    failures: Vec<(String, usize)>,
}

impl ConsoleReporter {
    pub fn new(filter: Option<NameFilter>) -> Self {
        ConsoleReporter {
            filter,
            current_module: String::new(),
            partial_line: false,
            npass: 0,
            nskip: 0,
            nfail: 0,
            mpass: 0,
            mskip: 0,
            mfail: 0,
            failures: Vec::new(),
        }
    }

    /// True if no test or module failed.
    pub fn success(&self) -> bool {
        self.nfail == 0
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        (self.npass, self.nskip, self.nfail)
    }

    pub fn print_summary(&self) {
        println!("tests passed: {}", self.npass);
        if self.nskip > 0 {
            println!("tests skipped: {}", self.nskip);
        }
        if self.nfail > 0 {
            println!("tests failed: {}", self.nfail);
            for (module, mfail) in &self.failures {
                println!("  {}: {} failures", module, mfail);
            }
            println!("test suite: {}", style("FAILED").red().bold());
        } else {
            println!("test suite: {}", style("passed").green());
        }
    }

    fn clearline(&mut self) {
        if self.partial_line {
            println!();
            self.partial_line = false;
        }
    }

    fn module_end(&mut self) {
        if self.mfail > 0 {
            self.failures
                .push((self.current_module.clone(), self.mfail));
        }
        self.npass += self.mpass;
        self.nskip += self.mskip;
        self.nfail += self.mfail;
        println!();
    }
}

fn print_reason(reason: Option<&str>, indent: usize) {
    let reason = match reason {
        Some(reason) if !reason.is_empty() => reason,
        _ => return,
    };
    let pad = " ".repeat(indent);
    for line in reason.lines() {
        println!("{}{}", pad, line);
    }
    println!();
}

/// Center `text` between square brackets of inner width `width`.
fn boxed(width: usize, text: impl std::fmt::Display, text_len: usize) -> String {
    let n = width.saturating_sub(text_len);
    let m = n / 2;
    format!("[{}{}{}]", " ".repeat(n - m), text, " ".repeat(m))
}

impl Reporter for ConsoleReporter {
    fn module_begin(&mut self, module: &Module) -> bool {
        println!("{}", module.name());
        self.current_module = module.name().to_string();
        self.mpass = 0;
        self.mskip = 0;
        self.mfail = 0;
        match &self.filter {
            Some(filter) => filter.prefix_match(module.name()),
            None => true,
        }
    }

    fn module_pass(&mut self, _module: &Module) {
        self.module_end();
    }

    fn module_fail(&mut self, _module: &Module, reason: Option<&str>) {
        self.mfail += 1;
        self.clearline();
        println!("    {}", style("MODULE FAILED").red().bold());
        print_reason(reason, 4);
        self.module_end();
    }

    fn module_skip(&mut self, _module: &Module, reason: Option<&str>) {
        self.mskip += 1;
        self.clearline();
        println!("    {}", style("module skipped").blue());
        print_reason(reason, 4);
        self.module_end();
    }

    fn test_begin(&mut self, test: &Test) -> bool {
        print!("  {:<20} ", test.name());
        let _ = std::io::stdout().flush();
        self.partial_line = true;
        match &self.filter {
            Some(filter) => {
                filter.full_match(&format!("{}.{}", self.current_module, test.name()))
            }
            None => true,
        }
    }

    fn test_pass(&mut self, _test: &Test) {
        println!("{}", boxed(6, style("ok").green(), 2));
        self.mpass += 1;
        self.partial_line = false;
    }

    fn test_fail(&mut self, _test: &Test, reason: Option<&str>) {
        println!("{}", boxed(6, style("FAILED").red().bold(), 6));
        print_reason(reason, 4);
        self.mfail += 1;
        self.partial_line = false;
    }

    fn test_skip(&mut self, _test: &Test, reason: Option<&str>) {
        println!("{}", boxed(6, style("skip").blue(), 4));
        print_reason(reason, 4);
        self.mskip += 1;
        self.partial_line = false;
    }
}
