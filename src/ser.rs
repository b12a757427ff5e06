//! JSON serialization.
//!
//! This module produces the two textual forms the classifier hands out:
//!
//! - [`to_string`]: the compact form, no whitespace at all (used for the
//!   "copy minified" selector and the container statistic)
//! - [`to_string_pretty`]: the canonical form, two spaces per nesting level,
//!   object keys in insertion order
//!
//! ## Usage
//!
//! ```rust
//! use jsonsift::{from_str, to_string, to_string_pretty};
//!
//! let value = from_str(r#"{"b":1,"a":[1,2]}"#).unwrap();
//!
//! assert_eq!(to_string(&value), r#"{"b":1,"a":[1,2]}"#);
//! assert_eq!(
//!     to_string_pretty(&value),
//!     "{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}"
//! );
//! ```
//!
//! Key order is never changed by either form. Non-finite floats have no JSON
//! representation and serialize as `null`.

use crate::{Map, Number, Value};

/// Width of one indentation level in the canonical pretty form.
pub const INDENT_WIDTH: usize = 2;

/// Serializes a [`Value`] to its compact JSON form.
///
/// # Examples
///
/// ```rust
/// use jsonsift::{jsonsift, to_string};
///
/// let value = jsonsift!({"a": 1});
/// assert_eq!(to_string(&value), r#"{"a":1}"#);
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    let mut writer = Writer::new(false);
    writer.write_value(value);
    writer.into_inner()
}

/// Serializes a [`Value`] to its canonical pretty-printed JSON form.
///
/// Two spaces per nesting level, one member per line, empty containers on a
/// single line.
///
/// # Examples
///
/// ```rust
/// use jsonsift::{jsonsift, to_string_pretty};
///
/// let value = jsonsift!({"a": 1});
/// assert_eq!(to_string_pretty(&value), "{\n  \"a\": 1\n}");
/// ```
#[must_use]
pub fn to_string_pretty(value: &Value) -> String {
    let mut writer = Writer::new(true);
    writer.write_value(value);
    writer.into_inner()
}

/// The JSON writer backing both output forms.
struct Writer {
    output: String,
    pretty: bool,
    indent_level: usize,
}

impl Writer {
    fn new(pretty: bool) -> Self {
        Writer {
            output: String::with_capacity(256),
            pretty,
            indent_level: 0,
        }
    }

    fn into_inner(self) -> String {
        self.output
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(n),
            Value::String(s) => self.write_string(s),
            Value::Array(arr) => self.write_array(arr),
            Value::Object(obj) => self.write_object(obj),
        }
    }

    fn write_object(&mut self, map: &Map) {
        if map.is_empty() {
            self.output.push_str("{}");
            return;
        }

        self.output.push('{');
        self.indent_level += 1;
        let len = map.len();
        for (i, (key, value)) in map.iter().enumerate() {
            self.write_line_break();
            self.write_string(key);
            self.output.push(':');
            if self.pretty {
                self.output.push(' ');
            }
            self.write_value(value);
            if i + 1 < len {
                self.output.push(',');
            }
        }
        self.indent_level -= 1;
        self.write_line_break();
        self.output.push('}');
    }

    fn write_array(&mut self, elements: &[Value]) {
        if elements.is_empty() {
            self.output.push_str("[]");
            return;
        }

        self.output.push('[');
        self.indent_level += 1;
        let len = elements.len();
        for (i, element) in elements.iter().enumerate() {
            self.write_line_break();
            self.write_value(element);
            if i + 1 < len {
                self.output.push(',');
            }
        }
        self.indent_level -= 1;
        self.write_line_break();
        self.output.push(']');
    }

    fn write_line_break(&mut self) {
        if self.pretty {
            self.output.push('\n');
            for _ in 0..(self.indent_level * INDENT_WIDTH) {
                self.output.push(' ');
            }
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                ch if (ch as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04x}", ch as u32));
                }
                ch => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn write_number(&mut self, number: &Number) {
        match number {
            Number::Integer(i) => self.output.push_str(&i.to_string()),
            Number::Float(f) => {
                if f.is_finite() {
                    // Display for f64 never uses exponent notation, so the
                    // only integral-looking output is a plain digit run. A
                    // float that prints as an integer keeps a ".0" so it
                    // parses back as a float.
                    let repr = f.to_string();
                    self.output.push_str(&repr);
                    if !repr.contains('.') {
                        self.output.push_str(".0");
                    }
                } else {
                    self.output.push_str("null");
                }
            }
        }
    }
}
