use crate::strings::{contains, parse_float};
use crate::value::fmt_js_number;

/// Recognizer/parser/formatter bundle for one CSS value type.
///
/// `test` detects the type from a raw string, `parse` pulls out the
/// numeric part, `transform` turns a number back into the string form.
pub struct UnitType {
    pub test: Box<dyn Fn(&str) -> bool + Send + Sync>,
    pub parse: fn(&str) -> f64,
    pub transform: Box<dyn Fn(f64) -> String + Send + Sync>,
}

/// Build a unit type whose `test` looks for `ty` anywhere in the value.
/// Parsing is always float parsing, regardless of the tag.
pub fn create_unit_type(
    ty: &str,
    transform: impl Fn(f64) -> String + Send + Sync + 'static,
) -> UnitType {
    UnitType {
        test: Box::new(contains(ty)),
        parse: parse_float,
        transform: Box::new(transform),
    }
}

fn suffixed(suffix: &'static str) -> impl Fn(f64) -> String + Send + Sync + 'static {
    move |v| format!("{}{suffix}", fmt_js_number(v))
}

pub fn px() -> UnitType {
    create_unit_type("px", suffixed("px"))
}

pub fn percent() -> UnitType {
    create_unit_type("%", suffixed("%"))
}

pub fn degrees() -> UnitType {
    create_unit_type("deg", suffixed("deg"))
}

pub fn seconds() -> UnitType {
    create_unit_type("s", suffixed("s"))
}
