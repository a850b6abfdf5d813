// Error handling for the Lion runtime

use crate::ast::Expression;
use itertools::Itertools;
use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Failures that can occur while evaluating a Lion expression.
///
/// Every failure short-circuits evaluation and is returned to the outermost caller;
/// the evaluator never recovers locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// A special form was given fewer arguments than it requires
    #[error(
        "{function_name} requires {} argument(s) [{}], got {}",
        .expected_args.len(),
        .expected_args.join(", "),
        .passed_args.len()
    )]
    TooFewArguments {
        function_name: String,
        passed_args: Vec<Expression>,
        expected_args: Vec<String>,
    },

    /// A special form argument failed its shape check
    #[error(
        "invalid argument for {function_name}: expected [{}], got [{}]",
        .expected_args.join(", "),
        .passed_args.iter().join(", ")
    )]
    InvalidArgumentType {
        function_name: String,
        passed_args: Vec<Expression>,
        expected_args: Vec<String>,
    },

    /// A native function reported a failure; the cause is the error source
    #[error("function '{function}' failed")]
    NativeFunctionFailure {
        function: String,
        #[source]
        source: NativeError,
    },

    /// The input does not conform to the expression grammar
    #[error("malformed expression: {reason}")]
    MalformedExpression { reason: String },

    /// A native function returned something outside the value grammar
    #[error("function '{function}' returned an invalid value: {reason}")]
    InvalidValue { function: String, reason: String },

    /// A value bound in an environment is outside the value grammar
    #[error("binding '{name}' holds an invalid value: {reason}")]
    InvalidBinding { name: String, reason: String },

    /// Nesting exceeded the configured evaluation depth
    #[error("evaluation exceeded the maximum depth of {limit}")]
    RecursionLimitExceeded { limit: usize },

    /// Configuration could not be loaded or applied
    #[error("configuration error: {0}")]
    Config(String),
}

impl RuntimeError {
    pub fn too_few_arguments(function_name: &str, passed_args: &[Expression], expected: &[&str]) -> Self {
        RuntimeError::TooFewArguments {
            function_name: function_name.to_string(),
            passed_args: passed_args.to_vec(),
            expected_args: expected.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn invalid_argument_type(
        function_name: &str,
        passed_args: &[Expression],
        expected: &[&str],
    ) -> Self {
        RuntimeError::InvalidArgumentType {
            function_name: function_name.to_string(),
            passed_args: passed_args.to_vec(),
            expected_args: expected.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Name of the special form or function the failure is attributed to, if any.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            RuntimeError::TooFewArguments { function_name, .. }
            | RuntimeError::InvalidArgumentType { function_name, .. } => Some(function_name),
            RuntimeError::NativeFunctionFailure { function, .. }
            | RuntimeError::InvalidValue { function, .. } => Some(function),
            _ => None,
        }
    }
}

/// Failures raised by native functions themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// Wrong number of arguments
    #[error("{function} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Wrong type of argument
    #[error("{operation} expected {expected}, got {actual}")]
    TypeError {
        expected: String,
        actual: String,
        operation: String,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Failures of user-supplied functions
    #[error("{0}")]
    Custom(String),
}

impl NativeError {
    pub fn new(message: &str) -> NativeError {
        NativeError::Custom(message.to_string())
    }
}
