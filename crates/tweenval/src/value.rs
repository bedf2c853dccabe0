use indexmap::IndexMap;
use ryu_js::Buffer;
use std::fmt;
use std::sync::Arc;

/// Numeric transform applied to a parsed value (easing, scaling, ...).
pub type Transformer = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// The small set of shapes that flow through an animation/styling pipeline.
///
/// A tagged union, so the type predicates below are total and unambiguous.
#[derive(Clone)]
pub enum Value {
    Str(String),
    Num(f64),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Func(Transformer),
}

impl Value {
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_num(&self) -> bool {
        matches!(self, Value::Num(_))
    }

    /// True for the `List` variant only. Unlike a `constructor === Array`
    /// check there is no cross-realm caveat here.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// True for the `Map` variant only; there is no null value in this model,
    /// so nothing else sneaks through an object check.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Value::Func(_))
    }

    /// True iff the value is a string with a `#`, `rgb` or `hsl` prefix.
    pub fn is_color(&self) -> bool {
        match self {
            Value::Str(s) => crate::color::is_color(s),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }
}

/// Format a number the way JS `Number#toString` would: `1` not `1.0`,
/// shortest round-trip decimal otherwise, and the literal `NaN` /
/// `Infinity` spellings for non-finite values.
pub fn fmt_js_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut b = Buffer::new();
    b.format_finite(v).to_string()
}

impl fmt::Display for Value {
    /// The attribute-string form: strings verbatim, numbers in JS shape,
    /// lists comma-joined, maps as `key: value` pairs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Num(n) => f.write_str(&fmt_js_number(*n)),
            Value::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Map(entries) => {
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                Ok(())
            }
            Value::Func(_) => f.write_str("[function]"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Num(n) => f.debug_tuple("Num").field(n).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Value::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Num(a), Value::Num(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Num(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_their_variant_only() {
        let values = [
            Value::from("abc"),
            Value::from(1.5),
            Value::List(vec![Value::from(1.0), Value::from(2.0)]),
            Value::Map(IndexMap::new()),
            Value::Func(Arc::new(|v| v * 2.0)),
        ];
        let checks: [fn(&Value) -> bool; 5] = [
            Value::is_string,
            Value::is_num,
            Value::is_list,
            Value::is_map,
            Value::is_func,
        ];
        for (i, v) in values.iter().enumerate() {
            for (j, check) in checks.iter().enumerate() {
                assert_eq!(check(v), i == j, "value {i} against predicate {j}");
            }
        }
    }

    #[test]
    fn is_color_only_accepts_prefixed_strings() {
        assert!(Value::from("#fff").is_color());
        assert!(Value::from("rgb(0,0,0)").is_color());
        assert!(Value::from("hsl(120, 50%, 50%)").is_color());
        assert!(!Value::from("blue").is_color());
        assert!(!Value::from(255.0).is_color());
    }

    #[test]
    fn display_uses_js_number_shape() {
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(-0.25).to_string(), "-0.25");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn display_joins_lists_with_commas() {
        let v = Value::List(vec![Value::from(10.0), Value::from("20px")]);
        assert_eq!(v.to_string(), "10,20px");
    }

    #[test]
    fn display_renders_maps_as_pairs() {
        let mut m = IndexMap::new();
        m.insert("x".to_string(), Value::from(1.0));
        m.insert("y".to_string(), Value::from(2.0));
        assert_eq!(Value::Map(m).to_string(), "x: 1; y: 2");
    }

    #[test]
    fn func_values_compare_by_identity() {
        let f: Transformer = Arc::new(|v| v);
        let a = Value::Func(f.clone());
        let b = Value::Func(f);
        let c = Value::Func(Arc::new(|v| v));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
