//! Configuration types and parsing for Lion
//!
//! A config file selects the standard library modules to bind, adds user
//! variables on top of them, and tunes evaluation and output. Files ending in
//! `.json` are read as JSON, everything else as TOML:
//!
//! ```toml
//! [runtime]
//! max_depth = 512
//!
//! [stdlib]
//! modules = ["math", "list", "logic", "func", "object"]
//!
//! [output]
//! pretty = true
//!
//! [bindings]
//! pi = 3.14159
//! ```

use crate::ast::Expression;
use crate::runtime::environment::Environment;
use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::evaluator::{EvaluatorOptions, DEFAULT_MAX_DEPTH};
use crate::runtime::stdlib::{StandardLibrary, StdlibModule};
use crate::runtime::values::Value;
use crate::runtime::Runtime;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LionConfig {
    pub runtime: RuntimeConfig,
    pub stdlib: StdlibConfig,
    pub output: OutputConfig,
    /// User variables, bound after the standard library so they can shadow it
    pub bindings: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub max_depth: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StdlibConfig {
    pub modules: Vec<String>,
}

impl Default for StdlibConfig {
    fn default() -> Self {
        Self {
            modules: StdlibModule::ALL
                .iter()
                .map(|m| m.name().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    /// Renders a result as JSON text.
    pub fn render(&self, value: &Value) -> String {
        let json = value.to_json();
        if self.pretty {
            format!("{:#}", json)
        } else {
            json.to_string()
        }
    }
}

/// Parses a `NAME=JSON` command-line binding.
pub fn parse_binding(spec: &str) -> RuntimeResult<(String, Value)> {
    let (name, json) = spec
        .split_once('=')
        .ok_or_else(|| RuntimeError::Config(format!("binding '{}' is not NAME=JSON", spec)))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(RuntimeError::Config(format!("binding '{}' has an empty name", spec)));
    }
    let expr = crate::parser::parse(json)
        .map_err(|e| RuntimeError::Config(format!("binding '{}': {}", name, e)))?;
    Ok((name.to_string(), Value::from(expr)))
}

impl LionConfig {
    /// Loads a config file, choosing the format from its extension.
    pub fn load(path: &Path) -> RuntimeResult<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            RuntimeError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let config = if is_json {
            Self::from_json_str(&data)?
        } else {
            Self::from_toml_str(&data)?
        };
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(data: &str) -> RuntimeResult<Self> {
        toml::from_str(data).map_err(|e| RuntimeError::Config(e.to_string()))
    }

    pub fn from_json_str(data: &str) -> RuntimeResult<Self> {
        serde_json::from_str(data).map_err(|e| RuntimeError::Config(e.to_string()))
    }

    pub fn stdlib_modules(&self) -> RuntimeResult<Vec<StdlibModule>> {
        self.stdlib
            .modules
            .iter()
            .map(|name| name.parse::<StdlibModule>())
            .collect()
    }

    pub fn evaluator_options(&self) -> EvaluatorOptions {
        EvaluatorOptions {
            max_depth: self.runtime.max_depth,
        }
    }

    /// Builds the session environment: selected stdlib modules, then `[bindings]`.
    pub fn build_environment(&self) -> RuntimeResult<Environment> {
        let modules = self.stdlib_modules()?;
        if modules.is_empty() {
            warn!("no stdlib modules selected; only user bindings will be available");
        }
        let mut env = StandardLibrary::create_environment(&modules);

        for (name, json) in &self.bindings {
            let expr = Expression::try_from(json.clone()).map_err(|e| {
                RuntimeError::Config(format!("binding '{}': {}", name, e))
            })?;
            env.try_define(name, Value::from(expr))?;
        }
        Ok(env)
    }

    pub fn build_runtime(&self) -> RuntimeResult<Runtime> {
        Ok(Runtime::with_options(
            self.build_environment()?,
            self.evaluator_options(),
        ))
    }
}
