// Function helpers

use super::{expect_list, type_error};
use crate::runtime::error::NativeError;
use crate::runtime::values::{Arity, Function, Value};

pub(super) fn functions() -> Vec<Function> {
    vec![
        Function::builtin("identity", Arity::Fixed(1), identity),
        Function::builtin("apply", Arity::Fixed(2), apply),
    ]
}

fn identity(mut args: Vec<Value>) -> Result<Value, NativeError> {
    Ok(args.swap_remove(0))
}

/// `["apply", f, [a, b, ...]]` calls `f` with the list elements as arguments
fn apply(args: Vec<Value>) -> Result<Value, NativeError> {
    let function = args[0]
        .as_function()
        .ok_or_else(|| type_error("function", &args[0], "apply"))?;
    let call_args = expect_list(&args[1], "apply")?.to_vec();
    function.invoke(call_args)
}
