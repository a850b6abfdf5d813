// Boolean logic

use super::expect_bool;
use crate::runtime::error::NativeError;
use crate::runtime::values::{Arity, Function, Value};

pub(super) fn functions() -> Vec<Function> {
    vec![
        Function::builtin("not", Arity::Fixed(1), not),
        Function::builtin("and", Arity::Variadic(0), and),
        Function::builtin("or", Arity::Variadic(0), or),
        Function::builtin("if", Arity::Fixed(3), if_),
    ]
}

fn not(args: Vec<Value>) -> Result<Value, NativeError> {
    Ok(Value::from(!expect_bool(&args[0], "not")?))
}

fn and(args: Vec<Value>) -> Result<Value, NativeError> {
    let mut result = true;
    for arg in &args {
        result &= expect_bool(arg, "and")?;
    }
    Ok(Value::from(result))
}

fn or(args: Vec<Value>) -> Result<Value, NativeError> {
    let mut result = false;
    for arg in &args {
        result |= expect_bool(arg, "or")?;
    }
    Ok(Value::from(result))
}

/// `["if", condition, then, else]`
///
/// Both branches have already been evaluated by the time `if` runs; it only
/// selects one of them.
fn if_(args: Vec<Value>) -> Result<Value, NativeError> {
    let condition = expect_bool(&args[0], "if")?;
    let mut args = args.into_iter().skip(1);
    let (then, otherwise) = (args.next(), args.next());
    let chosen = if condition { then } else { otherwise };
    Ok(chosen.unwrap_or_else(Value::null))
}
