// Map accessors

use super::{expect_map, type_error};
use crate::runtime::error::NativeError;
use crate::runtime::values::{Arity, Function, Value};

pub(super) fn functions() -> Vec<Function> {
    vec![
        Function::builtin("get", Arity::Fixed(2), get),
        Function::builtin("keys", Arity::Fixed(1), keys),
        Function::builtin("values", Arity::Fixed(1), values),
    ]
}

/// `["get", map, key]`, null when the key is absent
fn get(args: Vec<Value>) -> Result<Value, NativeError> {
    let map = expect_map(&args[0], "get")?;
    let key = args[1]
        .as_str()
        .ok_or_else(|| type_error("string", &args[1], "get"))?;
    Ok(map.get(key).cloned().unwrap_or_else(Value::null))
}

fn keys(args: Vec<Value>) -> Result<Value, NativeError> {
    let map = expect_map(&args[0], "keys")?;
    Ok(Value::List(map.keys().map(|k| Value::from(k.as_str())).collect()))
}

fn values(args: Vec<Value>) -> Result<Value, NativeError> {
    let map = expect_map(&args[0], "values")?;
    Ok(Value::List(map.values().cloned().collect()))
}
