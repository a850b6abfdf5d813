//! Lion Standard Library
//!
//! Native functions grouped into modules that can be bound independently:
//! - `math`: arithmetic and numeric comparison
//! - `logic`: boolean operators and `if`
//! - `list`: list construction and access
//! - `func`: `identity` and `apply`
//! - `object`: map accessors
//!
//! Every function follows the native calling contract and never sees
//! unevaluated arguments; control over evaluation order belongs to the special
//! forms in the evaluator.

mod func;
mod list;
mod logic;
mod math;
mod object;

use crate::runtime::environment::Environment;
use crate::runtime::error::{NativeError, RuntimeError};
use crate::runtime::values::{Function, Value};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StdlibModule {
    Math,
    Logic,
    List,
    Func,
    Object,
}

impl StdlibModule {
    pub const ALL: [StdlibModule; 5] = [
        StdlibModule::Math,
        StdlibModule::Logic,
        StdlibModule::List,
        StdlibModule::Func,
        StdlibModule::Object,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StdlibModule::Math => "math",
            StdlibModule::Logic => "logic",
            StdlibModule::List => "list",
            StdlibModule::Func => "func",
            StdlibModule::Object => "object",
        }
    }

    pub fn functions(self) -> Vec<Function> {
        match self {
            StdlibModule::Math => math::functions(),
            StdlibModule::Logic => logic::functions(),
            StdlibModule::List => list::functions(),
            StdlibModule::Func => func::functions(),
            StdlibModule::Object => object::functions(),
        }
    }
}

impl fmt::Display for StdlibModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StdlibModule {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StdlibModule::ALL
            .into_iter()
            .find(|module| module.name() == s)
            .ok_or_else(|| RuntimeError::Config(format!("unknown stdlib module '{}'", s)))
    }
}

/// The Standard Library for the Lion runtime.
pub struct StandardLibrary;

impl StandardLibrary {
    /// Creates an environment holding every standard library function.
    pub fn create_global_environment() -> Environment {
        Self::create_environment(&StdlibModule::ALL)
    }

    /// Creates an environment holding the functions of the given modules.
    pub fn create_environment(modules: &[StdlibModule]) -> Environment {
        let mut env = Environment::new();
        for module in modules {
            Self::load_module(&mut env, *module);
        }
        env
    }

    pub fn load_module(env: &mut Environment, module: StdlibModule) {
        for function in module.functions() {
            env.define_function(function);
        }
    }
}

// Argument helpers shared by the modules.

fn type_error(expected: &str, actual: &Value, operation: &str) -> NativeError {
    NativeError::TypeError {
        expected: expected.to_string(),
        actual: actual.type_name().to_string(),
        operation: operation.to_string(),
    }
}

fn expect_number(value: &Value, operation: &str) -> Result<f64, NativeError> {
    value
        .as_number()
        .ok_or_else(|| type_error("number", value, operation))
}

fn expect_bool(value: &Value, operation: &str) -> Result<bool, NativeError> {
    value
        .as_bool()
        .ok_or_else(|| type_error("boolean", value, operation))
}

fn expect_list<'a>(value: &'a Value, operation: &str) -> Result<&'a [Value], NativeError> {
    value
        .as_list()
        .ok_or_else(|| type_error("list", value, operation))
}

fn expect_map<'a>(
    value: &'a Value,
    operation: &str,
) -> Result<&'a IndexMap<String, Value>, NativeError> {
    value
        .as_map()
        .ok_or_else(|| type_error("map", value, operation))
}

fn numbers(args: &[Value], operation: &str) -> Result<Vec<f64>, NativeError> {
    args.iter().map(|arg| expect_number(arg, operation)).collect()
}
