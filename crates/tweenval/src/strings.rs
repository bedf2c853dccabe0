use crate::value::Value;
use regex::Regex;
use std::sync::OnceLock;

fn camel_boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"))
}

fn comma_split_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s*").expect("valid regex"))
}

/// Convert camelCase to dash-case: `translateX` -> `translate-x`.
///
/// Non-camelCase input passes through lowercased; the conversion is
/// idempotent.
pub fn camel_to_dash(input: &str) -> String {
    camel_boundary_regex()
        .replace_all(input, "$1-$2")
        .to_lowercase()
}

/// Split a comma-delimited string: `"foo, bar"` -> `["foo", "bar"]`.
///
/// Whitespace after a comma is consumed; empty segments are preserved.
pub fn split_comma_delimited_str(value: &str) -> Vec<String> {
    comma_split_regex()
        .split(value)
        .map(str::to_string)
        .collect()
}

/// [`split_comma_delimited_str`] lifted to [`Value`]: a non-string value
/// comes back as a single-element list containing a clone of itself.
pub fn split_comma_delimited(value: &Value) -> Vec<Value> {
    match value {
        Value::Str(s) => split_comma_delimited_str(s)
            .into_iter()
            .map(Value::Str)
            .collect(),
        other => vec![other.clone()],
    }
}

/// Returns a closure that checks any argument for `term`:
/// `contains("needle")("haystack")`.
///
/// A non-string `term` yields a closure that is always false.
pub fn contains(term: impl Into<Value>) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    contains_value(term.into())
}

fn contains_value(term: Value) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |v| match &term {
        Value::Str(t) => v.contains(t.as_str()),
        _ => false,
    }
}

/// Returns a closure that checks whether `term` is a prefix of its
/// argument: `is_first_chars("#")("#fff")`.
///
/// Same false-for-non-string `term` policy as [`contains`].
pub fn is_first_chars(term: impl Into<Value>) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    is_first_chars_value(term.into())
}

fn is_first_chars_value(term: Value) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |v| match &term {
        Value::Str(t) => v.starts_with(t.as_str()),
        _ => false,
    }
}

/// Parse the leading numeric prefix of a string, JS `parseFloat` style:
/// `"20px"` -> `20.0`, `" -1.5e2deg"` -> `-150.0`, no numeric prefix -> NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mut has_digits = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        has_digits = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            has_digits = true;
        }
    }
    if !has_digits {
        return f64::NAN;
    }

    // An exponent only counts if at least one digit follows `e`/`E`;
    // `parseFloat("1e")` is 1, not NaN.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Extract the argument text of a function string:
/// `"translateX(20px)"` -> `"20px"`.
///
/// Preserves JS `String#substring` index semantics for malformed input
/// (a missing parenthesis behaves as index `-1`; negative indices clamp
/// to 0 and swapped bounds swap back) rather than validating the format.
pub fn function_string_value(value: &str) -> &str {
    let open = value.find('(').map(|i| i as isize).unwrap_or(-1);
    let close = value.rfind(')').map(|i| i as isize).unwrap_or(-1);
    js_substring(value, open + 1, close)
}

fn js_substring(s: &str, start: isize, end: isize) -> &str {
    let len = s.len() as isize;
    let a = start.clamp(0, len);
    let b = end.clamp(0, len);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    &s[lo as usize..hi as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_to_dash_converts_boundaries() {
        assert_eq!(camel_to_dash("translateX"), "translate-x");
        assert_eq!(camel_to_dash("backgroundColor"), "background-color");
        assert_eq!(camel_to_dash("strokeDashoffset"), "stroke-dashoffset");
        assert_eq!(camel_to_dash("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn camel_to_dash_lowercases_boundary_free_input() {
        for s in ["opacity", "x", "", "already-dashed", "UPPER"] {
            assert_eq!(camel_to_dash(s), s.to_lowercase());
        }
    }

    #[test]
    fn camel_to_dash_is_idempotent() {
        for s in ["translateX", "opacity", "borderTopLeftRadius", "UPPER"] {
            let once = camel_to_dash(s);
            assert_eq!(camel_to_dash(&once), once);
        }
    }

    #[test]
    fn split_comma_delimited_str_handles_optional_whitespace() {
        assert_eq!(split_comma_delimited_str("foo,bar"), ["foo", "bar"]);
        assert_eq!(split_comma_delimited_str("foo, bar"), ["foo", "bar"]);
        assert_eq!(split_comma_delimited_str("foo,  bar, baz"), ["foo", "bar", "baz"]);
        assert_eq!(split_comma_delimited_str("10,20,30"), ["10", "20", "30"]);
    }

    #[test]
    fn split_comma_delimited_str_preserves_empty_segments() {
        assert_eq!(split_comma_delimited_str("a,,b"), ["a", "", "b"]);
        assert_eq!(split_comma_delimited_str("a,"), ["a", ""]);
        assert_eq!(split_comma_delimited_str(""), [""]);
    }

    #[test]
    fn split_comma_delimited_wraps_non_strings() {
        assert_eq!(
            split_comma_delimited(&Value::from("foo,bar")),
            vec![Value::from("foo"), Value::from("bar")]
        );
        assert_eq!(split_comma_delimited(&Value::from(5.0)), vec![Value::from(5.0)]);
    }

    #[test]
    fn contains_is_a_substring_check() {
        assert!(contains("ee")("needle"));
        assert!(contains("")("anything"));
        assert!(!contains("xyz")("needle"));
    }

    #[test]
    fn contains_with_non_string_term_is_always_false() {
        let check = contains(5.0);
        assert!(!check("needle"));
        assert!(!check("5"));
    }

    #[test]
    fn is_first_chars_is_a_prefix_check() {
        assert!(is_first_chars("#")("#fff"));
        assert!(!is_first_chars("#")("fff"));
        assert!(is_first_chars("rgb")("rgba(0,0,0,1)"));
        assert!(!is_first_chars(1.0)("1px"));
    }

    #[test]
    fn parse_float_reads_the_numeric_prefix() {
        assert_eq!(parse_float("20px"), 20.0);
        assert_eq!(parse_float("-1.5"), -1.5);
        assert_eq!(parse_float("+.5deg"), 0.5);
        assert_eq!(parse_float("  42  "), 42.0);
        assert_eq!(parse_float("3."), 3.0);
        assert_eq!(parse_float("1e3s"), 1000.0);
        assert_eq!(parse_float("-1.5e2deg"), -150.0);
    }

    #[test]
    fn parse_float_ignores_a_dangling_exponent() {
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
        assert_eq!(parse_float("2Epx"), 2.0);
    }

    #[test]
    fn parse_float_is_nan_without_a_numeric_prefix() {
        for s in ["", "px", "px20", ".", "-", "e5", "--1"] {
            assert!(parse_float(s).is_nan(), "expected NaN for {s:?}");
        }
    }

    #[test]
    fn parse_float_handles_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_float("Infinitypx"), f64::INFINITY);
    }

    #[test]
    fn function_string_value_extracts_arguments() {
        assert_eq!(function_string_value("translateX(20px)"), "20px");
        assert_eq!(function_string_value("rgba(0, 0, 0, 1)"), "0, 0, 0, 1");
        assert_eq!(function_string_value("url(a(b)c)"), "a(b)c");
        assert_eq!(function_string_value("f()"), "");
    }

    #[test]
    fn function_string_value_keeps_substring_semantics_when_malformed() {
        // No parentheses: substring(0, -1) clamps and collapses to "".
        assert_eq!(function_string_value("blue"), "");
        assert_eq!(function_string_value(""), "");
        // Missing ')': the swapped bounds yield everything up to and
        // including the '('.
        assert_eq!(function_string_value("rgb(10"), "rgb(");
        // Missing '(': everything before the ')'.
        assert_eq!(function_string_value("10px)"), "10px");
    }
}
