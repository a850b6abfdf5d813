//! Lion: a Lisp-like expression language written in JSON.
//!
//! Programs are JSON documents. Strings name bindings, lists are applications,
//! maps are records. Two special forms, `quote` and `eval`, move between code
//! and data, so programs can be built as data and then run:
//!
//! ```
//! use lion::Runtime;
//!
//! let runtime = Runtime::with_stdlib();
//! let value = runtime.evaluate(r#"["eval", ["quote", ["+", 1, 2]]]"#).unwrap();
//! assert_eq!(value.to_string(), "3");
//! ```

pub mod ast;
pub mod config;
pub mod input_handling;
pub mod logging;
pub mod parser;
pub mod runtime;

pub use ast::{Expression, Primitive};
pub use config::LionConfig;
pub use parser::parse;
pub use runtime::{
    evaluate, Environment, Function, NativeError, Runtime, RuntimeError, RuntimeResult,
    StandardLibrary, Value,
};
