// Environment for name bindings
// Owned by the caller of the evaluator and read-only while an evaluation runs.

use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::values::{Function, Value};
use std::collections::HashMap;

/// The set of bindings an expression is evaluated against.
///
/// Environments are assembled before a session starts (typically the standard
/// library merged with user variables) and only borrowed immutably by the
/// evaluator, so no evaluation can add, remove or change a binding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates a new, empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a new binding or replaces an existing one.
    ///
    /// The value is stored unchecked; it must hold only finite numbers. Use
    /// [`Environment::try_define`] for values from outside the crate.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Like [`Environment::define`], rejecting values with non-finite numbers.
    pub fn try_define(&mut self, name: &str, value: Value) -> RuntimeResult<()> {
        value
            .check_representable()
            .map_err(|reason| RuntimeError::InvalidBinding {
                name: name.to_string(),
                reason,
            })?;
        self.define(name, value);
        Ok(())
    }

    /// Binds a native function under its own name.
    pub fn define_function(&mut self, function: Function) {
        self.bindings
            .insert(function.name().to_string(), Value::Function(function));
    }

    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.define(name, value);
        self
    }

    /// Looks up a name.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn symbol_names(&self) -> Vec<String> {
        let mut names = self.bindings.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
}
