//! Lion Runtime System
//!
//! High-level runtime entry points and small helpers. The heavy logic is
//! implemented in the submodules listed below.

pub mod environment;
pub mod error;
pub mod evaluator;
pub mod special_forms;
pub mod stdlib;
pub mod values;

pub use environment::Environment;
pub use error::{NativeError, RuntimeError, RuntimeResult};
pub use evaluator::{Evaluator, EvaluatorOptions};
pub use stdlib::{StandardLibrary, StdlibModule};
pub use values::{Arity, BuiltinFunction, Function, NativeFunction, Value};

use crate::ast::Expression;
use crate::parser;

/// Evaluates `expression` against `env`.
///
/// This is the whole evaluation API; everything else in the crate builds
/// environments or converts to and from text.
pub fn evaluate(expression: &Expression, env: &Environment) -> RuntimeResult<Value> {
    Evaluator::new(env).evaluate(expression)
}

/// A reusable session: one environment and evaluator options, many inputs.
#[derive(Debug, Clone)]
pub struct Runtime {
    env: Environment,
    options: EvaluatorOptions,
}

impl Runtime {
    pub fn new(env: Environment) -> Self {
        Self::with_options(env, EvaluatorOptions::default())
    }

    pub fn with_options(env: Environment, options: EvaluatorOptions) -> Self {
        Self { env, options }
    }

    /// A runtime over the full standard library.
    pub fn with_stdlib() -> Self {
        Self::new(StandardLibrary::create_global_environment())
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn run(&self, expression: &Expression) -> RuntimeResult<Value> {
        Evaluator::with_options(&self.env, self.options.clone()).evaluate(expression)
    }

    /// Parses `input` as JSON and evaluates it.
    pub fn evaluate(&self, input: &str) -> RuntimeResult<Value> {
        let expression = parser::parse(input)?;
        self.run(&expression)
    }
}
