#![forbid(unsafe_code)]

//! String-parsing and type-predicate helpers for CSS-like animation values:
//! colors (`#fff`, `rgb(...)`, `hsl(...)`), unit-suffixed numbers (`20px`,
//! `90deg`) and transform function strings (`translateX(20px)`).
//!
//! Everything here is permissive by design: malformed input degrades to a
//! default or pass-through result instead of an error. The one strict entry
//! point is [`color::parse_color_checked`].

pub mod attrs;
pub mod color;
pub mod strings;
pub mod unit;
pub mod value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unrecognized color value: {value}")]
    UnrecognizedColor { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub use attrs::{SetAttribute, SvgElement, set_attrs};
pub use color::{
    is_color, is_hex, is_hsl, is_rgb, parse_color, parse_color_checked, parse_hex, parse_hsla,
    parse_rgba, split_color_values,
};
pub use strings::{
    camel_to_dash, contains, function_string_value, is_first_chars, parse_float,
    split_comma_delimited, split_comma_delimited_str,
};
pub use unit::{UnitType, create_unit_type, degrees, percent, px, seconds};
pub use value::Value;
