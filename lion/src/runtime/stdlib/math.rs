// Arithmetic and numeric comparison

use super::{expect_number, numbers};
use crate::runtime::error::NativeError;
use crate::runtime::values::{Arity, Function, Value};

pub(super) fn functions() -> Vec<Function> {
    vec![
        Function::builtin("+", Arity::Variadic(0), add),
        Function::builtin("-", Arity::Variadic(0), subtract),
        Function::builtin("*", Arity::Variadic(0), multiply),
        Function::builtin("/", Arity::Variadic(0), divide),
        Function::builtin("=", Arity::Variadic(0), equals),
        Function::builtin("<", Arity::Fixed(2), |args| compare(args, "<", |a, b| a < b)),
        Function::builtin(">", Arity::Fixed(2), |args| compare(args, ">", |a, b| a > b)),
        Function::builtin("<=", Arity::Fixed(2), |args| compare(args, "<=", |a, b| a <= b)),
        Function::builtin(">=", Arity::Fixed(2), |args| compare(args, ">=", |a, b| a >= b)),
    ]
}

/// `["+", a, b, ...]`, `0` with no arguments
fn add(args: Vec<Value>) -> Result<Value, NativeError> {
    Ok(Value::from(numbers(&args, "+")?.into_iter().sum::<f64>()))
}

/// `["-", a]` negates, `["-", a, b, ...]` subtracts left to right
fn subtract(args: Vec<Value>) -> Result<Value, NativeError> {
    let nums = numbers(&args, "-")?;
    let result = match nums.as_slice() {
        [] => 0.0,
        [a] => -a,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, n| acc - n),
    };
    Ok(Value::from(result))
}

/// `["*", a, b, ...]`, `1` with no arguments
fn multiply(args: Vec<Value>) -> Result<Value, NativeError> {
    Ok(Value::from(numbers(&args, "*")?.into_iter().product::<f64>()))
}

/// `["/", a]` is the reciprocal, `["/", a, b, ...]` divides left to right
fn divide(args: Vec<Value>) -> Result<Value, NativeError> {
    let nums = numbers(&args, "/")?;
    let (first, divisors) = match nums.as_slice() {
        [] => return Ok(Value::from(1.0)),
        [a] => (1.0, std::slice::from_ref(a)),
        [first, rest @ ..] => (*first, rest),
    };

    let mut result = first;
    for divisor in divisors {
        if *divisor == 0.0 {
            return Err(NativeError::DivisionByZero);
        }
        result /= divisor;
    }
    Ok(Value::from(result))
}

/// Structural equality of all arguments
fn equals(args: Vec<Value>) -> Result<Value, NativeError> {
    let all_equal = match args.split_first() {
        Some((first, rest)) => rest.iter().all(|arg| arg == first),
        None => true,
    };
    Ok(Value::from(all_equal))
}

fn compare(args: Vec<Value>, operation: &str, op: fn(f64, f64) -> bool) -> Result<Value, NativeError> {
    let a = expect_number(&args[0], operation)?;
    let b = expect_number(&args[1], operation)?;
    Ok(Value::from(op(a, b)))
}
