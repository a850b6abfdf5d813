// Lion Evaluator - walks expression trees against a read-only environment

use crate::ast::{Expression, Primitive};
use crate::runtime::environment::Environment;
use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::special_forms::{self, SpecialForm};
use crate::runtime::values::{Function, Value};
use indexmap::IndexMap;
use tracing::trace;

/// Default bound on evaluation nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum nesting of sub-evaluations, `eval` re-entry included.
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Tree-walking evaluator.
///
/// Lists, maps and primitives are dispatched exhaustively. Lists headed by a
/// special form name are handed to [`special_forms`]; any other list is applied
/// in applicative order, falling back to a plain data list when its head does
/// not evaluate to a function. Sub-expressions are always evaluated left to
/// right, so the first failure in source order is the one reported.
#[derive(Debug, Clone)]
pub struct Evaluator<'env> {
    env: &'env Environment,
    options: EvaluatorOptions,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Self::with_options(env, EvaluatorOptions::default())
    }

    pub fn with_options(env: &'env Environment, options: EvaluatorOptions) -> Self {
        Evaluator { env, options }
    }

    /// Evaluate an expression in this evaluator's environment
    pub fn evaluate(&self, expr: &Expression) -> RuntimeResult<Value> {
        self.eval_expr(expr, 0)
    }

    pub(crate) fn eval_expr(&self, expr: &Expression, depth: usize) -> RuntimeResult<Value> {
        if depth > self.options.max_depth {
            return Err(RuntimeError::RecursionLimitExceeded {
                limit: self.options.max_depth,
            });
        }

        match expr {
            Expression::Primitive(primitive) => self.eval_primitive(primitive),
            Expression::List(items) => self.eval_list(items, depth),
            Expression::Map(map) => self.eval_map(map, depth),
        }
    }

    fn eval_primitive(&self, primitive: &Primitive) -> RuntimeResult<Value> {
        match primitive {
            Primitive::String(name) => Ok(self.eval_reference(name)),
            Primitive::Number(n) if !n.is_finite() => Err(RuntimeError::MalformedExpression {
                reason: format!("number literal {} is not finite", n),
            }),
            other => Ok(Value::Primitive(other.clone())),
        }
    }

    /// Strings are identifiers. Unbound ones evaluate to themselves.
    fn eval_reference(&self, name: &str) -> Value {
        match self.env.lookup(name) {
            Some(value) => value.clone(),
            None => {
                trace!(symbol = name, "unbound symbol evaluates to itself");
                Value::from(name)
            }
        }
    }

    fn eval_list(&self, items: &[Expression], depth: usize) -> RuntimeResult<Value> {
        let Some((head, args)) = items.split_first() else {
            return Ok(Value::List(Vec::new()));
        };

        match head.as_str().and_then(SpecialForm::from_name) {
            Some(SpecialForm::Quote) => special_forms::eval_quote(args),
            Some(SpecialForm::Eval) => special_forms::eval_eval(self, args, depth),
            None => self.eval_application(items, depth),
        }
    }

    fn eval_application(&self, items: &[Expression], depth: usize) -> RuntimeResult<Value> {
        let mut values = items
            .iter()
            .map(|item| self.eval_expr(item, depth + 1))
            .collect::<RuntimeResult<Vec<_>>>()?;

        match values.first() {
            Some(Value::Function(function)) => {
                let function = function.clone();
                let args = values.split_off(1);
                self.call_function(&function, args)
            }
            // Not a function call: the list is just data.
            _ => Ok(Value::List(values)),
        }
    }

    fn eval_map(&self, map: &IndexMap<String, Expression>, depth: usize) -> RuntimeResult<Value> {
        let mut result = IndexMap::with_capacity(map.len());
        for (key, value_expr) in map {
            let value = self.eval_expr(value_expr, depth + 1)?;
            result.insert(key.clone(), value);
        }
        Ok(Value::Map(result))
    }

    /// Invokes a native function and validates what it returns.
    pub fn call_function(&self, function: &Function, args: Vec<Value>) -> RuntimeResult<Value> {
        trace!(function = function.name(), argc = args.len(), "applying function");

        let result = function
            .invoke(args)
            .map_err(|source| RuntimeError::NativeFunctionFailure {
                function: function.name().to_string(),
                source,
            })?;

        result
            .check_representable()
            .map_err(|reason| RuntimeError::InvalidValue {
                function: function.name().to_string(),
                reason,
            })?;

        Ok(result)
    }
}
