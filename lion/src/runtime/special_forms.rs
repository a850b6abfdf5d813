//! Special forms
//!
//! `quote` and `eval` are the only list heads that change evaluation order.
//! `["quote", X]` returns `X` untouched, and `["eval", X]` evaluates `X`, checks
//! that the result is itself an expression, and evaluates that a second time.
//! Together they give `["eval", ["quote", X]]` the same meaning as `X`.
//!
//! Both forms take exactly one argument. Additional trailing elements are
//! ignored; a missing argument is a `TooFewArguments` failure.

use crate::ast::Expression;
use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::evaluator::Evaluator;
use crate::runtime::values::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialForm {
    Quote,
    Eval,
}

impl SpecialForm {
    pub const QUOTE: &'static str = "quote";
    pub const EVAL: &'static str = "eval";

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::QUOTE => Some(SpecialForm::Quote),
            Self::EVAL => Some(SpecialForm::Eval),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Quote => Self::QUOTE,
            SpecialForm::Eval => Self::EVAL,
        }
    }

    /// Names of the arguments the form expects, used in error reports.
    pub fn expected_args(self) -> &'static [&'static str] {
        match self {
            SpecialForm::Quote => &["quotedValue"],
            SpecialForm::Eval => &["expression"],
        }
    }
}

/// `["quote", X]`
pub fn eval_quote(args: &[Expression]) -> RuntimeResult<Value> {
    let quoted = single_argument(SpecialForm::Quote, args)?;
    Ok(Value::from(quoted.clone()))
}

/// `["eval", X]`
pub fn eval_eval(evaluator: &Evaluator<'_>, args: &[Expression], depth: usize) -> RuntimeResult<Value> {
    let form = SpecialForm::Eval;
    let argument = single_argument(form, args)?;

    let intermediate = evaluator.eval_expr(argument, depth + 1)?;
    let expression = Expression::try_from(intermediate).map_err(|_| {
        RuntimeError::invalid_argument_type(form.name(), args, form.expected_args())
    })?;

    debug!(expression = %expression, "eval re-entering evaluation");
    evaluator.eval_expr(&expression, depth + 1)
}

fn single_argument(form: SpecialForm, args: &[Expression]) -> RuntimeResult<&Expression> {
    match args {
        [] => Err(RuntimeError::too_few_arguments(
            form.name(),
            args,
            form.expected_args(),
        )),
        [argument] => Ok(argument),
        [argument, extra @ ..] => {
            debug!(form = form.name(), ignored = extra.len(), "ignoring extra arguments");
            Ok(argument)
        }
    }
}
