//! Module body loading
//!
//! Discovered module files identify and order the modules; their executable
//! bodies are compiled units supplied through the [`ModuleLoader`] trait. A
//! [`ModuleRegistry`] maps dotted names to body closures for the common
//! embedding case.

use crate::signal::{Failure, Signal};
use crate::suite::{Module, ModuleContext};
use std::collections::HashMap;

/// Supplies the executable body for a discovered module.
pub trait ModuleLoader {
    /// Populate the context with the module's tests. Module-scope signals
    /// raised here are reported as the module's outcome; a duplicate test
    /// name aborts the load.
    fn load(&self, module: &Module, ctx: &mut ModuleContext<'_>) -> Result<(), Failure>;
}

/// A registered module body.
pub type ModuleBody = Box<dyn Fn(&mut ModuleContext<'_>) -> Result<(), Failure>>;

/// Maps dotted module names to bodies. A discovered module with no
/// registered body loads as a module skip.
#[derive(Default)]
pub struct ModuleRegistry {
    bodies: HashMap<String, ModuleBody>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn(&mut ModuleContext<'_>) -> Result<(), Failure> + 'static,
    {
        self.bodies.insert(name.into(), Box::new(body));
    }
}

impl ModuleLoader for ModuleRegistry {
    fn load(&self, module: &Module, ctx: &mut ModuleContext<'_>) -> Result<(), Failure> {
        match self.bodies.get(module.name()) {
            Some(body) => body(ctx),
            None => Err(Signal::module_skip(Some(format!(
                "no body registered for module {}",
                module.name()
            )))
            .into()),
        }
    }
}
