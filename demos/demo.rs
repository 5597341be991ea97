//! A tiny self-contained driver: builds a throwaway suite tree, registers
//! module bodies for it, and runs it with the console reporter.
//!
//!     cargo run --example demo

use std::fs;
use std::process::ExitCode;
use treetest::loader::ModuleRegistry;
use treetest::process::{ProcessSpec, StatusPolicy};
use treetest::signal::{fail, skip};
use treetest::suite::TestOptions;

fn main() -> treetest::Result<ExitCode> {
    let root = std::env::temp_dir().join("treetest-demo");
    fs::create_dir_all(root.join("subdir"))?;
    fs::write(root.join("echo.test"), "")?;
    fs::write(root.join("subdir").join("proc.test"), "")?;

    let mut modules = ModuleRegistry::new();

    modules.register("echo", |ctx| {
        ctx.register("echo_abc", TestOptions::default(), |env| {
            let spec = ProcessSpec::new(["echo", "abc"]).expect_text("abc\n");
            env.proc.check(&spec)
        })?;
        ctx.register("sanity", TestOptions::default(), |_env| {
            if 2 + 2 != 4 {
                return Err(fail("arithmetic is broken"));
            }
            Ok(())
        })?;
        ctx.register("known_bad", TestOptions::expected_failure(), |_env| {
            Err(fail("this failure is the point"))
        })?;
        Ok(())
    });

    modules.register("subdir.proc", |ctx| {
        ctx.register("cat_round_trip", TestOptions::default(), |env| {
            let spec = ProcessSpec::new(["cat"])
                .text_input("hello\n")
                .expect_text("hello\n");
            env.proc.check(&spec)
        })?;
        ctx.register("false_exits_one", TestOptions::default(), |env| {
            let spec = ProcessSpec::new(["false"]).status(StatusPolicy::Exact(1));
            env.proc.check(&spec)
        })?;
        ctx.register("skipped_on_purpose", TestOptions::default(), |_env| {
            Err(skip("demonstrates a skip"))
        })?;
        Ok(())
    });

    treetest::run::run(&root, &[], &modules)
}
