//! Reads Lion source text.
//!
//! Lion programs are JSON documents, so parsing is JSON decoding followed by a
//! conversion into [`Expression`]. Object key order is preserved.

use crate::ast::Expression;
use crate::runtime::error::{RuntimeError, RuntimeResult};

/// Parses a single JSON document into an expression.
pub fn parse(input: &str) -> RuntimeResult<Expression> {
    let json: serde_json::Value =
        serde_json::from_str(input).map_err(|e| RuntimeError::MalformedExpression {
            reason: e.to_string(),
        })?;
    Expression::try_from(json)
}

/// True when `input` is a prefix of a JSON document that ran out before it was
/// complete, e.g. an unclosed list. Blank input is not incomplete.
pub fn is_incomplete(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(_) => false,
        Err(e) => e.is_eof(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_nested_document() {
        let expr = parse(r#"["if", ["<", 1, 2], {"a": null}, "no"]"#).unwrap();
        assert_eq!(
            expr,
            Expression::List(vec![
                Expression::from("if"),
                Expression::List(vec![
                    Expression::from("<"),
                    Expression::from(1.0),
                    Expression::from(2.0),
                ]),
                Expression::Map([("a".to_string(), Expression::null())].into_iter().collect()),
                Expression::from("no"),
            ])
        );
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            parse("[1, 2,]"),
            Err(RuntimeError::MalformedExpression { .. })
        ));
        assert!(matches!(
            parse("1 2"),
            Err(RuntimeError::MalformedExpression { .. })
        ));
    }

    #[test]
    fn test_is_incomplete() {
        assert!(is_incomplete(r#"["+", 1,"#));
        assert!(is_incomplete("{\n  \"a\": "));
        assert!(!is_incomplete(r#"["+", 1]"#));
        assert!(!is_incomplete(r#"["+", 1]]"#));
        assert!(!is_incomplete("   "));
    }
}
