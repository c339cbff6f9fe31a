//! Text token to typed value coercion

use datalens_core::Value;

/// Convert a condition's right-hand side into a typed value.
///
/// Rules are applied in order:
/// 1. text wrapped in matching `'` or `"` quotes is returned verbatim as a string
/// 2. `none` / `null` (any case) become `Null`
/// 3. `true` / `false` (any case) become `Bool`
/// 4. text containing `.` is tried as a float, anything else as an integer
/// 5. otherwise the text itself is returned as a string
///
/// Coercion never fails.
pub fn coerce_value(token: &str) -> Value {
    let token = token.trim();

    if let Some(inner) = strip_matching_quotes(token) {
        return Value::String(inner.to_string());
    }

    if token.eq_ignore_ascii_case("none") || token.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if token.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    let numeric = if token.contains('.') {
        token.parse::<f64>().ok().map(Value::Float)
    } else {
        token.parse::<i64>().ok().map(Value::Int)
    };

    numeric.unwrap_or_else(|| Value::String(token.to_string()))
}

fn strip_matching_quotes(token: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            Some(&token[1..token.len() - 1])
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_text_bypasses_other_rules() {
        assert_eq!(coerce_value("\"42\""), Value::String("42".into()));
        assert_eq!(coerce_value("'null'"), Value::String("null".into()));
        assert_eq!(coerce_value("' spaced '"), Value::String(" spaced ".into()));
        assert_eq!(coerce_value("\"\""), Value::String(String::new()));
    }

    #[test]
    fn mismatched_quotes_stay_text() {
        assert_eq!(coerce_value("'abc\""), Value::String("'abc\"".into()));
        assert_eq!(coerce_value("\""), Value::String("\"".into()));
    }

    #[test]
    fn null_and_bool_keywords() {
        assert_eq!(coerce_value("None"), Value::Null);
        assert_eq!(coerce_value("NULL"), Value::Null);
        assert_eq!(coerce_value("True"), Value::Bool(true));
        assert_eq!(coerce_value("false"), Value::Bool(false));
    }

    #[test]
    fn numbers() {
        assert_eq!(coerce_value("30"), Value::Int(30));
        assert_eq!(coerce_value("-7"), Value::Int(-7));
        assert_eq!(coerce_value("2.5"), Value::Float(2.5));
        assert_eq!(coerce_value(" 10.0 "), Value::Float(10.0));
    }

    #[test]
    fn unparsable_numbers_fall_through_to_text() {
        assert_eq!(coerce_value("1.2.3"), Value::String("1.2.3".into()));
        assert_eq!(coerce_value("1e5"), Value::String("1e5".into()));
        assert_eq!(coerce_value("IT"), Value::String("IT".into()));
        assert_eq!(coerce_value(""), Value::String(String::new()));
    }
}
