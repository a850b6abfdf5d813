// Lion syntax tree
// The source language is structured data, so the tree is the data model itself:
// primitives, ordered lists and keyed maps. Nothing here can hold a callable.

use crate::runtime::error::{RuntimeError, RuntimeResult};
use indexmap::IndexMap;
use std::fmt;

/// Integral numbers up to this magnitude are printed without a fractional part.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Atomic data shared by expressions and evaluated values.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl Primitive {
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Boolean(_) => "boolean",
            Primitive::Number(_) => "number",
            Primitive::String(_) => "string",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Primitive::Null => serde_json::Value::Null,
            Primitive::Boolean(b) => serde_json::Value::Bool(*b),
            Primitive::Number(n) => number_to_json(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Primitive::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Boolean(b)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Primitive::Number(n)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::String(s.to_string())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::String(s)
    }
}

/// An expression tree: a primitive, a list of expressions, or a map of expressions.
///
/// Map keys keep their insertion order so that evaluated records print the way they
/// were written.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Primitive(Primitive),
    List(Vec<Expression>),
    Map(IndexMap<String, Expression>),
}

impl Expression {
    pub fn null() -> Self {
        Expression::Primitive(Primitive::Null)
    }

    pub fn symbol(name: &str) -> Self {
        Expression::Primitive(Primitive::String(name.to_string()))
    }

    /// The string held by a primitive string expression, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expression::Primitive(Primitive::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Expression::Primitive(p) => p.to_json(),
            Expression::List(items) => {
                serde_json::Value::Array(items.iter().map(Expression::to_json).collect())
            }
            Expression::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<Primitive> for Expression {
    fn from(p: Primitive) -> Self {
        Expression::Primitive(p)
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Expression::Primitive(Primitive::Boolean(b))
    }
}

impl From<f64> for Expression {
    fn from(n: f64) -> Self {
        Expression::Primitive(Primitive::Number(n))
    }
}

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Expression::Primitive(Primitive::String(s.to_string()))
    }
}

impl From<String> for Expression {
    fn from(s: String) -> Self {
        Expression::Primitive(Primitive::String(s))
    }
}

impl From<Vec<Expression>> for Expression {
    fn from(items: Vec<Expression>) -> Self {
        Expression::List(items)
    }
}

impl TryFrom<serde_json::Value> for Expression {
    type Error = RuntimeError;

    fn try_from(json: serde_json::Value) -> RuntimeResult<Self> {
        match json {
            serde_json::Value::Null => Ok(Expression::null()),
            serde_json::Value::Bool(b) => Ok(Expression::from(b)),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => Ok(Expression::from(f)),
                _ => Err(RuntimeError::MalformedExpression {
                    reason: format!("number {} is not representable", n),
                }),
            },
            serde_json::Value::String(s) => Ok(Expression::from(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Expression::try_from)
                .collect::<RuntimeResult<Vec<_>>>()
                .map(Expression::List),
            serde_json::Value::Object(obj) => {
                let mut map = IndexMap::with_capacity(obj.len());
                for (key, value) in obj {
                    map.insert(key, Expression::try_from(value)?);
                }
                Ok(Expression::Map(map))
            }
        }
    }
}

/// Converts a number for JSON output, dropping the fraction of integral values.
pub(crate) fn number_to_json(n: f64) -> Option<serde_json::Number> {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Some(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n)
    }
}
