// Runtime value system for Lion
// Values have the same shapes as expressions plus one extra variant: native functions.

use crate::ast::{Expression, Primitive};
use crate::runtime::error::{NativeError, RuntimeError, RuntimeResult};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Primitive(Primitive),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Function(Function),
}

impl Value {
    pub fn null() -> Self {
        Value::Primitive(Primitive::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Primitive(p) => p.type_name(),
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Primitive(Primitive::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Primitive(Primitive::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Primitive(Primitive::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Converts the value to JSON for printing.
    ///
    /// Functions have no JSON form and are rendered as `"#<function NAME>"`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Primitive(p) => p.to_json(),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Function(f) => serde_json::Value::String(f.to_string()),
        }
    }

    /// Checks that the value stays inside the value grammar: every number must be finite.
    pub fn check_representable(&self) -> Result<(), String> {
        match self {
            Value::Primitive(Primitive::Number(n)) if !n.is_finite() => {
                Err(format!("number {} is not finite", n))
            }
            Value::Primitive(_) | Value::Function(_) => Ok(()),
            Value::List(items) => items.iter().try_for_each(Value::check_representable),
            Value::Map(map) => map.values().try_for_each(Value::check_representable),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        Value::Primitive(p)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Primitive(Primitive::Boolean(b))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Primitive(Primitive::Number(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Primitive(Primitive::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Primitive(Primitive::String(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Expression> for Value {
    fn from(expr: Expression) -> Self {
        match expr {
            Expression::Primitive(p) => Value::Primitive(p),
            Expression::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Expression::Map(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl TryFrom<Value> for Expression {
    type Error = RuntimeError;

    /// Re-validates a value as an expression. Fails if a function occurs anywhere inside.
    fn try_from(value: Value) -> RuntimeResult<Self> {
        match value {
            Value::Primitive(p) => Ok(Expression::Primitive(p)),
            Value::List(items) => items
                .into_iter()
                .map(Expression::try_from)
                .collect::<RuntimeResult<Vec<_>>>()
                .map(Expression::List),
            Value::Map(map) => {
                let mut exprs = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    exprs.insert(key, Expression::try_from(value)?);
                }
                Ok(Expression::Map(exprs))
            }
            Value::Function(f) => Err(RuntimeError::MalformedExpression {
                reason: format!("{} cannot be used as an expression", f),
            }),
        }
    }
}

/// The calling contract for functions bound in an environment: positional
/// arguments in, a value or a failure out.
pub trait NativeFunction: Send + Sync {
    fn name(&self) -> &str;

    fn invoke(&self, args: Vec<Value>) -> Result<Value, NativeError>;
}

/// A shared handle to a native function.
#[derive(Clone)]
pub struct Function(Arc<dyn NativeFunction>);

impl Function {
    pub fn new(func: impl NativeFunction + 'static) -> Self {
        Function(Arc::new(func))
    }

    /// Wraps a closure as an arity-checked builtin.
    pub fn builtin<F>(name: &str, arity: Arity, func: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, NativeError> + Send + Sync + 'static,
    {
        Function::new(BuiltinFunction {
            name: name.to_string(),
            arity,
            func: Arc::new(func),
        })
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn invoke(&self, args: Vec<Value>) -> Result<Value, NativeError> {
        self.0.invoke(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<function {}>", self.name())
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

type BuiltinFn = dyn Fn(Vec<Value>) -> Result<Value, NativeError> + Send + Sync;

#[derive(Clone)]
pub struct BuiltinFunction {
    pub name: String,
    pub arity: Arity,
    pub func: Arc<BuiltinFn>,
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

impl NativeFunction for BuiltinFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, args: Vec<Value>) -> Result<Value, NativeError> {
        if !self.arity.accepts(args.len()) {
            return Err(NativeError::ArityMismatch {
                function: self.name.clone(),
                expected: self.arity.to_string(),
                actual: args.len(),
            });
        }
        (self.func)(args)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Arity {
    Fixed(usize),
    Variadic(usize), // Minimum number of arguments
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => count == *n,
            Arity::Variadic(min) => count >= *min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::Variadic(min) => write!(f, "at least {}", min),
        }
    }
}
