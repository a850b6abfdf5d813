// End-to-end evaluation tests over the standard library

use lion::runtime::{Arity, NativeError};
use lion::{evaluate, Environment, Expression, Function, RuntimeError, StandardLibrary, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

fn expr(json: serde_json::Value) -> Expression {
    Expression::try_from(json).expect("test expression should be valid")
}

fn value(json: serde_json::Value) -> Value {
    Value::from(expr(json))
}

fn stdlib() -> Environment {
    StandardLibrary::create_global_environment()
}

fn run(env: &Environment, program: serde_json::Value) -> Result<Value, RuntimeError> {
    evaluate(&expr(program), env)
}

#[test]
fn test_primitives_evaluate_to_themselves() {
    let env = Environment::new();
    for program in [json!(42), json!(0), json!(-3.14), json!(true), json!(false), json!(null)] {
        assert_eq!(run(&env, program.clone()), Ok(value(program)));
    }
    assert_eq!(run(&env, json!("unknown-var")), Ok(Value::from("unknown-var")));
}

#[test]
fn test_variable_lookup() {
    let env = Environment::new()
        .with("x", Value::from(10.0))
        .with("name", Value::from("Alice"))
        .with("data", value(json!({"nested": 42})))
        .with("nullVal", Value::null());

    assert_eq!(run(&env, json!("x")), Ok(Value::from(10.0)));
    assert_eq!(run(&env, json!("name")), Ok(Value::from("Alice")));
    assert_eq!(run(&env, json!("y")), Ok(Value::from("y")));
    assert_eq!(run(&env, json!("data")), Ok(value(json!({"nested": 42}))));
    assert_eq!(run(&env, json!("nullVal")), Ok(Value::null()));
}

#[test]
fn test_symbol_lookup_returns_functions() {
    let env = stdlib();
    let result = run(&env, json!("+")).unwrap();
    assert_eq!(result.as_function().map(Function::name), Some("+"));
    assert_eq!(result.to_string(), r##""#<function +>""##);
}

#[test]
fn test_empty_list_is_empty_list() {
    assert_eq!(run(&Environment::new(), json!([])), Ok(Value::List(vec![])));
}

#[test]
fn test_arithmetic_application() {
    let env = stdlib();
    assert_eq!(run(&env, json!(["+", 1, 2])), Ok(Value::from(3.0)));
    assert_eq!(run(&env, json!(["+", 1, 2, 3, 4])), Ok(Value::from(10.0)));
    assert_eq!(run(&env, json!(["-", 10, 3])), Ok(Value::from(7.0)));
    assert_eq!(run(&env, json!(["*", 3, 4])), Ok(Value::from(12.0)));
    assert_eq!(run(&env, json!(["/", 10, 2])), Ok(Value::from(5.0)));
    assert_eq!(run(&env, json!(["+", 5])), Ok(Value::from(5.0)));
    assert_eq!(run(&env, json!(["+", -1, -2])), Ok(Value::from(-3.0)));
}

#[test]
fn test_comparison_and_logic() {
    let env = stdlib();
    assert_eq!(run(&env, json!(["=", 1, 1])), Ok(Value::from(true)));
    assert_eq!(run(&env, json!(["=", 1, 2])), Ok(Value::from(false)));
    assert_eq!(run(&env, json!(["<=", 2, 2])), Ok(Value::from(true)));
    assert_eq!(run(&env, json!(["not", false])), Ok(Value::from(true)));
    assert_eq!(
        run(&env, json!(["and", [">", 5, 3], ["<", 2, 4]])),
        Ok(Value::from(true))
    );
    assert_eq!(
        run(&env, json!(["or", ["<", 5, 3], [">", 2, 4]])),
        Ok(Value::from(false))
    );
    assert_eq!(run(&env, json!(["if", true, 1, 2])), Ok(Value::from(1.0)));
    assert_eq!(run(&env, json!(["if", false, 1, 2])), Ok(Value::from(2.0)));
}

#[test]
fn test_list_functions() {
    let env = stdlib();
    assert_eq!(run(&env, json!(["list", 1, 2, 3])), Ok(value(json!([1, 2, 3]))));
    assert_eq!(run(&env, json!(["first", ["list", 1, 2, 3]])), Ok(Value::from(1.0)));
    assert_eq!(run(&env, json!(["rest", ["list", 1, 2, 3]])), Ok(value(json!([2, 3]))));
    assert_eq!(run(&env, json!(["length", ["list"]])), Ok(Value::from(0.0)));
    assert_eq!(
        run(&env, json!(["concat", ["list", 1, 2], ["list", 3, 4]])),
        Ok(value(json!([1, 2, 3, 4])))
    );
    assert_eq!(
        run(&env, json!(["first", ["rest", ["list", 1, 2, 3]]])),
        Ok(Value::from(2.0))
    );
}

#[test]
fn test_arguments_are_evaluated_first() {
    let env = stdlib().with("x", Value::from(5.0)).with("y", Value::from(3.0));
    assert_eq!(run(&env, json!(["+", ["+", 1, 2], ["+", 3, 4]])), Ok(Value::from(10.0)));
    assert_eq!(run(&env, json!(["+", "x", "y"])), Ok(Value::from(8.0)));
    assert_eq!(run(&env, json!(["*", "x", ["+", "y", 1]])), Ok(Value::from(20.0)));
}

#[test]
fn test_conditional_over_variables() {
    let env = stdlib().with("x", Value::from(2.0)).with("y", Value::from(3.0));
    assert_eq!(
        run(&env, json!(["if", ["<", "x", "y"], ["*", "x", "y"], ["+", "x", "y"]])),
        Ok(Value::from(6.0))
    );
}

#[test]
fn test_non_function_head_returns_data() {
    let env = stdlib();
    assert_eq!(run(&Environment::new(), json!([1, 2, 3])), Ok(value(json!([1, 2, 3]))));
    assert_eq!(
        run(&env, json!(["not-a-fn", 1, 2])),
        Ok(value(json!(["not-a-fn", 1, 2])))
    );
    assert_eq!(run(&env, json!([1, ["+", 1, 2], 3])), Ok(value(json!([1, 3, 3]))));
    assert_eq!(
        run(&Environment::new(), json!([1, "hello", true, null])),
        Ok(value(json!([1, "hello", true, null])))
    );
}

#[test]
fn test_map_values_are_evaluated_in_order() {
    let env = stdlib().with("x", Value::from(10.0));
    let result = run(&env, json!({"a": ["+", 1, 2], "b": 3, "x": "x"})).unwrap();
    assert_eq!(result.to_string(), r#"{"a":3,"b":3,"x":10}"#);

    assert_eq!(
        run(
            &env,
            json!({"numbers": ["list", 1, 2, 3], "nested": {"value": ["*", 2, 3]}})
        ),
        Ok(value(json!({"numbers": [1, 2, 3], "nested": {"value": 6}})))
    );
}

#[test]
fn test_object_accessors() {
    let env = stdlib().with("obj", value(json!({"name": "Alice", "age": 30})));
    assert_eq!(run(&env, json!(["get", "obj", "name"])), Ok(Value::from("Alice")));
    assert_eq!(run(&env, json!(["keys", "obj"])), Ok(value(json!(["name", "age"]))));
    assert_eq!(run(&env, json!(["values", "obj"])), Ok(value(json!(["Alice", 30]))));
}

#[test]
fn test_quote_returns_argument_unevaluated() {
    let env = stdlib();
    assert_eq!(run(&env, json!(["quote", ["+", 1, 2]])), Ok(value(json!(["+", 1, 2]))));
    assert_eq!(run(&env, json!(["quote", 42])), Ok(Value::from(42.0)));
    assert_eq!(run(&env, json!(["quote", "+"])), Ok(Value::from("+")));
    let nested = json!(["list", ["quote", 1], ["quote", 2]]);
    assert_eq!(run(&env, json!(["quote", nested.clone()])), Ok(value(nested)));
}

#[test]
fn test_quote_and_eval_require_an_argument() {
    let env = stdlib();
    assert_eq!(
        run(&env, json!(["quote"])),
        Err(RuntimeError::TooFewArguments {
            function_name: "quote".to_string(),
            passed_args: vec![],
            expected_args: vec!["quotedValue".to_string()],
        })
    );
    assert_eq!(
        run(&env, json!(["eval"])),
        Err(RuntimeError::TooFewArguments {
            function_name: "eval".to_string(),
            passed_args: vec![],
            expected_args: vec!["expression".to_string()],
        })
    );
}

#[test]
fn test_eval_runs_data_as_code() {
    let env = stdlib().with("expr", value(json!(["+", 1, 2])));
    assert_eq!(run(&env, json!(["eval", "expr"])), Ok(Value::from(3.0)));
    assert_eq!(run(&env, json!(["eval", ["quote", ["+", 1, 2]]])), Ok(Value::from(3.0)));
    // Data built at run time can be evaluated.
    assert_eq!(
        run(&env, json!(["eval", ["list", ["quote", "*"], 6, 7]])),
        Ok(Value::from(42.0))
    );
}

#[test]
fn test_eval_rejects_function_values() {
    let returns_function = Function::builtin("fn", Arity::Fixed(0), |_| {
        Ok(Value::Function(Function::builtin("inner", Arity::Fixed(0), |_| {
            Ok(Value::null())
        })))
    });
    let mut env = stdlib();
    env.define_function(returns_function);

    let err = run(&env, json!(["eval", ["fn"]])).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::InvalidArgumentType {
            function_name: "eval".to_string(),
            passed_args: vec![expr(json!(["fn"]))],
            expected_args: vec!["expression".to_string()],
        }
    );
}

#[test]
fn test_native_failures_are_wrapped() {
    let env = stdlib();
    assert_eq!(
        run(&env, json!(["/", 1, 0])),
        Err(RuntimeError::NativeFunctionFailure {
            function: "/".to_string(),
            source: NativeError::DivisionByZero,
        })
    );
    assert!(matches!(
        run(&env, json!(["+", 1, "two"])),
        Err(RuntimeError::NativeFunctionFailure {
            source: NativeError::TypeError { .. },
            ..
        })
    ));
}

#[test]
fn test_higher_order_functions() {
    let make_adder = Function::builtin("makeAdder", Arity::Fixed(1), |args| {
        let n = args[0].as_number().unwrap_or(0.0);
        Ok(Value::Function(Function::builtin("adder", Arity::Fixed(1), move |args| {
            Ok(Value::from(n + args[0].as_number().unwrap_or(0.0)))
        })))
    });
    let double = Function::builtin("double", Arity::Fixed(1), |args| {
        Ok(Value::from(args[0].as_number().unwrap_or(0.0) * 2.0))
    });
    let mut env = stdlib();
    env.define_function(make_adder);
    env.define_function(double);

    let add5 = run(&env, json!(["makeAdder", 5])).unwrap();
    let add5 = add5.as_function().expect("makeAdder returns a function");
    assert_eq!(add5.invoke(vec![Value::from(3.0)]), Ok(Value::from(8.0)));

    // A list whose head evaluates to a function is an application.
    assert_eq!(run(&env, json!([["makeAdder", 5], 3])), Ok(Value::from(8.0)));
    assert_eq!(run(&env, json!(["apply", "double", [5]])), Ok(Value::from(10.0)));
}

#[test]
fn test_invalid_native_result() {
    let mut env = Environment::new();
    env.define_function(Function::builtin("badFn", Arity::Fixed(0), |_| {
        Ok(Value::from(f64::NAN))
    }));
    assert!(matches!(
        run(&env, json!(["badFn"])),
        Err(RuntimeError::InvalidValue { ref function, .. }) if function == "badFn"
    ));
}
