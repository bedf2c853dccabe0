use crate::strings::{
    function_string_value, is_first_chars, parse_float, split_comma_delimited_str,
};
use crate::{Error, Result};
use indexmap::IndexMap;
use tracing::trace;

/// Channel names for `rgb()` / `rgba()` values.
pub const RGBA_TERMS: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Channel names for `hsl()` / `hsla()` values.
pub const HSLA_TERMS: [&str; 4] = ["hue", "saturation", "lightness", "alpha"];

pub fn is_hex(v: &str) -> bool {
    is_first_chars("#")(v)
}

pub fn is_rgb(v: &str) -> bool {
    is_first_chars("rgb")(v)
}

pub fn is_hsl(v: &str) -> bool {
    is_first_chars("hsl")(v)
}

/// True for any value the color parsers below understand. Named colors
/// (`"blue"`) are not colors here.
pub fn is_color(v: &str) -> bool {
    is_hex(v) || is_rgb(v) || is_hsl(v)
}

/// Returns a parser that splits a color function string into named
/// channels: `split_color_values(&RGBA_TERMS)("rgba(0,0,0,1)")`.
///
/// Channels without a matching segment default to `1.0`, so `rgb(...)`
/// input gets an implicit opaque alpha. A segment that is present but not
/// numeric stays NaN.
pub fn split_color_values<'a>(terms: &'a [&'a str]) -> impl Fn(&str) -> IndexMap<String, f64> + 'a {
    move |v| {
        let segments = split_comma_delimited_str(function_string_value(v));
        terms
            .iter()
            .enumerate()
            .map(|(i, &term)| {
                let parsed = segments.get(i).map(|s| parse_float(s)).unwrap_or(1.0);
                (term.to_string(), parsed)
            })
            .collect()
    }
}

/// Parse an `rgb()`/`rgba()` string into red/green/blue/alpha channels.
pub fn parse_rgba(v: &str) -> IndexMap<String, f64> {
    split_color_values(&RGBA_TERMS)(v)
}

/// Parse an `hsl()`/`hsla()` string into hue/saturation/lightness/alpha
/// channels. No unit handling: `"50%"` parses as `50`.
pub fn parse_hsla(v: &str) -> IndexMap<String, f64> {
    split_color_values(&HSLA_TERMS)(v)
}

/// Expand a 3- or 6-digit hex color into 0-255 red/green/blue channels
/// plus an opaque alpha. Returns `None` for any other shape.
pub fn parse_hex(v: &str) -> Option<IndexMap<String, f64>> {
    let hex = v.trim().strip_prefix('#')?;
    // Length checks and channel slicing below are byte-based; a multi-byte
    // body can never be valid hex, only a panic hazard.
    if !hex.is_ascii() {
        return None;
    }
    let (r, g, b) = match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            (r, g, b)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            (r, g, b)
        }
        _ => return None,
    };
    let mut channels = IndexMap::with_capacity(4);
    channels.insert("red".to_string(), r as f64);
    channels.insert("green".to_string(), g as f64);
    channels.insert("blue".to_string(), b as f64);
    channels.insert("alpha".to_string(), 1.0);
    Some(channels)
}

/// Parse any supported color form into its named channels, or `None`
/// when the value has no recognizable color prefix.
pub fn parse_color(v: &str) -> Option<IndexMap<String, f64>> {
    if is_hex(v) {
        trace!(value = v, "parsing hex color");
        return parse_hex(v);
    }
    if is_rgb(v) {
        trace!(value = v, "parsing rgb color");
        return Some(parse_rgba(v));
    }
    if is_hsl(v) {
        trace!(value = v, "parsing hsl color");
        return Some(parse_hsla(v));
    }
    None
}

/// Strict variant of [`parse_color`] for callers that need a hard failure
/// on unrecognized input.
pub fn parse_color_checked(v: &str) -> Result<IndexMap<String, f64>> {
    parse_color(v).ok_or_else(|| Error::UnrecognizedColor {
        value: v.to_string(),
    })
}
