use crate::value::Value;
use indexmap::IndexMap;
use std::fmt::Write as _;

/// The mutable element boundary: anything that can accept string
/// attributes, DOM-style.
pub trait SetAttribute {
    fn set_attribute(&mut self, name: &str, value: String);
}

/// Write every entry of `attrs`, in insertion order, onto `element`.
/// Values are stringified through their attribute [`Display`](std::fmt::Display) form.
pub fn set_attrs<T: SetAttribute>(element: &mut T, attrs: &IndexMap<String, Value>) {
    for (name, value) in attrs {
        element.set_attribute(name, value.to_string());
    }
}

/// In-memory SVG element, for building fragments without a DOM.
#[derive(Debug, Clone, Default)]
pub struct SvgElement {
    tag: String,
    attrs: IndexMap<String, String>,
}

impl SvgElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Render as a self-closing tag with attributes in insertion order.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let _ = write!(&mut out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(&mut out, r#" {}="{}""#, name, escape_attr(value));
        }
        out.push_str("/>");
        out
    }
}

impl SetAttribute for SvgElement {
    fn set_attribute(&mut self, name: &str, value: String) {
        self.attrs.insert(name.to_string(), value);
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
