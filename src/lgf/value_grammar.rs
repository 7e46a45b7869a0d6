//! The LGF scalar/list value grammar: ints, floats, quoted strings, bools,
//! and single- or multi-line bracketed lists.

use crate::value::Value;

/// Parse one already-isolated value fragment (no surrounding key/equals,
/// already trimmed of the line's own leading/trailing whitespace).
pub fn parse_value(raw: &str) -> Value {
    let v = raw.trim();
    if let Some(inner) = single_line_list(v) {
        let items = split_top_level_commas(inner)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_value)
            .collect();
        return Value::List(items);
    }
    parse_scalar(v)
}

fn single_line_list(v: &str) -> Option<&str> {
    if v.starts_with('[') && v.ends_with(']') && v.len() >= 2 {
        Some(&v[1..v.len() - 1])
    } else {
        None
    }
}

/// Scalar grammar: digits-only is `Int`; anything else `f64`-parseable is
/// `Float` (this also swallows negatives, since `isdigit`/all-ASCII-digit
/// checks reject the leading `-`, matching the original parser's quirk of
/// treating negative numbers as floats); quoted text is `String` with the
/// quotes stripped; `true`/`false` case-insensitively is `Bool`; anything
/// else is a raw, unquoted `String`.
fn parse_scalar(v: &str) -> Value {
    if !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(i) = v.parse::<i64>() {
            return Value::Int(i);
        }
    }
    if let Ok(f) = v.parse::<f64>() {
        return Value::Float(f);
    }
    if v.len() >= 2 {
        let bytes = v.as_bytes();
        let quoted = (bytes[0] == b'"' && bytes[v.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[v.len() - 1] == b'\'');
        if quoted {
            return Value::String(v[1..v.len() - 1].to_string());
        }
    }
    if v.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if v.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(v.to_string())
}

/// Split `inner` on commas that are not nested inside a `[...]` pair, so a
/// list of lists isn't torn apart at its inner commas.
fn split_top_level_commas(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

/// Strip one layer of matching single or double quotes, used for
/// `import(...)` path literals.
pub fn strip_quotes(v: &str) -> &str {
    let v = v.trim();
    if v.len() >= 2 {
        let bytes = v.as_bytes();
        if (bytes[0] == b'"' && bytes[v.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[v.len() - 1] == b'\'')
        {
            return &v[1..v.len() - 1];
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_is_int() {
        assert_eq!(parse_value("30"), Value::Int(30));
    }

    #[test]
    fn negative_number_is_float_like_the_original_parser() {
        assert_eq!(parse_value("-5"), Value::Float(-5.0));
    }

    #[test]
    fn decimal_is_float() {
        assert_eq!(parse_value("3.5"), Value::Float(3.5));
    }

    #[test]
    fn quoted_strips_quotes() {
        assert_eq!(parse_value("\"Alice\""), Value::String("Alice".to_string()));
        assert_eq!(parse_value("'Bob'"), Value::String("Bob".to_string()));
    }

    #[test]
    fn bool_case_insensitive() {
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("FALSE"), Value::Bool(false));
    }

    #[test]
    fn unquoted_is_raw_string() {
        assert_eq!(parse_value("KNOWS"), Value::String("KNOWS".to_string()));
    }

    #[test]
    fn single_line_list_of_strings() {
        let v = parse_value("[\"a\", \"b\"]");
        assert_eq!(
            v,
            Value::List(vec![Value::String("a".into()), Value::String("b".into())])
        );
    }

    #[test]
    fn nested_list_commas_respected() {
        let v = parse_value("[[1, 2], 3]");
        assert_eq!(
            v,
            Value::List(vec![
                Value::List(vec![Value::Int(1), Value::Int(2)]),
                Value::Int(3)
            ])
        );
    }
}
