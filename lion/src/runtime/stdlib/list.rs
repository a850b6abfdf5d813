// List construction and access

use super::expect_list;
use crate::runtime::error::NativeError;
use crate::runtime::values::{Arity, Function, Value};

pub(super) fn functions() -> Vec<Function> {
    vec![
        Function::builtin("list", Arity::Variadic(0), |args| Ok(Value::List(args))),
        Function::builtin("head", Arity::Fixed(1), |args| head(args, "head")),
        Function::builtin("first", Arity::Fixed(1), |args| head(args, "first")),
        Function::builtin("tail", Arity::Fixed(1), |args| tail(args, "tail")),
        Function::builtin("rest", Arity::Fixed(1), |args| tail(args, "rest")),
        Function::builtin("length", Arity::Fixed(1), length),
        Function::builtin("concat", Arity::Variadic(0), concat),
    ]
}

/// First element, or null for an empty list
fn head(args: Vec<Value>, operation: &str) -> Result<Value, NativeError> {
    let items = expect_list(&args[0], operation)?;
    Ok(items.first().cloned().unwrap_or_else(Value::null))
}

/// Every element but the first
fn tail(args: Vec<Value>, operation: &str) -> Result<Value, NativeError> {
    let items = expect_list(&args[0], operation)?;
    Ok(Value::List(items.iter().skip(1).cloned().collect()))
}

fn length(args: Vec<Value>) -> Result<Value, NativeError> {
    let items = expect_list(&args[0], "length")?;
    Ok(Value::from(items.len() as f64))
}

fn concat(args: Vec<Value>) -> Result<Value, NativeError> {
    let mut result = Vec::new();
    for arg in &args {
        result.extend_from_slice(expect_list(arg, "concat")?);
    }
    Ok(Value::List(result))
}
