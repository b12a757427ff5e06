//! JSON parsing.
//!
//! This module provides the hand-written recursive-descent parser that turns
//! JSON text into a [`Value`]. Object member order is preserved exactly as it
//! appears in the document.
//!
//! ## Overview
//!
//! - **Single-pass parsing**: O(n) with one character of lookahead
//! - **Order fidelity**: object keys keep their document order
//! - **Error reporting**: errors carry line/column information
//! - **Bounded recursion**: nesting is capped at [`MAX_DEPTH`] levels
//!
//! ## Usage
//!
//! ```rust
//! use jsonsift::from_str;
//!
//! let value = from_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert!(value.is_object());
//! ```
//!
//! Leading and trailing whitespace around the document is tolerated; anything
//! else after the top-level value is rejected:
//!
//! ```rust
//! use jsonsift::from_str;
//!
//! assert!(from_str("  [1, 2]  ").is_ok());
//! assert!(from_str("[1, 2] extra").is_err());
//! ```

use crate::{Error, Map, Number, Result, Value};

/// Maximum nesting depth the parser accepts.
///
/// Consumers that walk the parsed value recursively (such as the tree model
/// builder) can rely on input depth never exceeding this.
pub const MAX_DEPTH: usize = 128;

/// Parses a string of JSON text into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use jsonsift::{from_str, Value};
///
/// let value = from_str(r#"[1, 2, 3]"#).unwrap();
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not a single well-formed JSON document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.at_end() {
        Ok(value)
    } else {
        Err(Error::trailing_characters(parser.line, parser.column))
    }
}

/// The JSON parser.
///
/// Tracks position, line, and column while consuming the input one character
/// at a time. Created internally by [`from_str`].
struct Parser<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    column: usize,
    depth: usize,
}

impl<'de> Parser<'de> {
    fn new(input: &'de str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn begin_nested(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            Err(Error::RecursionLimit(MAX_DEPTH))
        } else {
            Ok(())
        }
    }

    fn end_nested(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek_char() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('"') => self.parse_string().map(Value::String),
            Some('t') | Some('f') => self.parse_bool().map(Value::Bool),
            Some('n') => self.parse_null().map(|_| Value::Null),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number().map(Value::Number),
            Some(ch) => Err(Error::syntax(
                self.line,
                self.column,
                &format!("unexpected character '{}'", ch),
            )),
            None => Err(Error::unexpected_eof(self.line, self.column, "a value")),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.begin_nested()?;
        self.next_char(); // consume '{'
        self.skip_whitespace();

        let mut map = Map::new();
        if self.peek_char() == Some('}') {
            self.next_char();
            self.end_nested();
            return Ok(Value::Object(map));
        }

        loop {
            self.skip_whitespace();
            if self.peek_char() != Some('"') {
                return Err(Error::syntax(self.line, self.column, "expected object key"));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek_char() != Some(':') {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "expected ':' after object key",
                ));
            }
            self.next_char();

            self.skip_whitespace();
            let value = self.parse_value()?;
            // Duplicate keys: last value wins, first position kept.
            map.insert(key, value);

            self.skip_whitespace();
            match self.next_char() {
                Some(',') => continue,
                Some('}') => {
                    self.end_nested();
                    return Ok(Value::Object(map));
                }
                Some(ch) => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        &format!("expected ',' or '}}', found '{}'", ch),
                    ))
                }
                None => {
                    return Err(Error::unexpected_eof(self.line, self.column, "',' or '}'"))
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.begin_nested()?;
        self.next_char(); // consume '['
        self.skip_whitespace();

        let mut elements = Vec::new();
        if self.peek_char() == Some(']') {
            self.next_char();
            self.end_nested();
            return Ok(Value::Array(elements));
        }

        loop {
            self.skip_whitespace();
            elements.push(self.parse_value()?);

            self.skip_whitespace();
            match self.next_char() {
                Some(',') => continue,
                Some(']') => {
                    self.end_nested();
                    return Ok(Value::Array(elements));
                }
                Some(ch) => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        &format!("expected ',' or ']', found '{}'", ch),
                    ))
                }
                None => {
                    return Err(Error::unexpected_eof(self.line, self.column, "',' or ']'"))
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.next_char(); // consume opening quote
        let mut result = String::new();

        loop {
            match self.next_char() {
                Some('"') => return Ok(result),
                Some('\\') => match self.next_char() {
                    Some('"') => result.push('"'),
                    Some('\\') => result.push('\\'),
                    Some('/') => result.push('/'),
                    Some('b') => result.push('\u{0008}'),
                    Some('f') => result.push('\u{000C}'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('u') => result.push(self.parse_unicode_escape()?),
                    Some(other) => {
                        return Err(Error::syntax(
                            self.line,
                            self.column,
                            &format!("invalid escape sequence '\\{}'", other),
                        ))
                    }
                    None => {
                        return Err(Error::unexpected_eof(
                            self.line,
                            self.column,
                            "an escape sequence",
                        ))
                    }
                },
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "control character in string",
                    ))
                }
                Some(ch) => result.push(ch),
                None => {
                    return Err(Error::unexpected_eof(
                        self.line,
                        self.column,
                        "a closing '\"'",
                    ))
                }
            }
        }
    }

    /// Parses the four hex digits after `\u`, combining surrogate pairs.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let high = self.parse_hex4()?;
        let code_point = if (0xD800..=0xDBFF).contains(&high) {
            if self.next_char() != Some('\\') || self.next_char() != Some('u') {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "unpaired surrogate in unicode escape",
                ));
            }
            let low = self.parse_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "invalid low surrogate in unicode escape",
                ));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        } else if (0xDC00..=0xDFFF).contains(&high) {
            return Err(Error::syntax(
                self.line,
                self.column,
                "unpaired surrogate in unicode escape",
            ));
        } else {
            high
        };

        char::from_u32(code_point)
            .ok_or_else(|| Error::syntax(self.line, self.column, "invalid unicode code point"))
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let mut hex = String::with_capacity(4);
        for _ in 0..4 {
            match self.next_char() {
                Some(ch) if ch.is_ascii_hexdigit() => hex.push(ch),
                Some(_) => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "invalid unicode escape sequence (expected 4 hex digits)",
                    ))
                }
                None => {
                    return Err(Error::unexpected_eof(self.line, self.column, "4 hex digits"))
                }
            }
        }
        u32::from_str_radix(&hex, 16)
            .map_err(|_| Error::syntax(self.line, self.column, "invalid hex in unicode escape"))
    }

    fn parse_number(&mut self) -> Result<Number> {
        let start = self.position;

        if self.peek_char() == Some('-') {
            self.next_char();
        }

        // Integer part: a lone zero or a nonzero-led digit run.
        match self.peek_char() {
            Some('0') => {
                self.next_char();
            }
            Some(ch) if ch.is_ascii_digit() => {
                while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                    self.next_char();
                }
            }
            _ => return Err(Error::syntax(self.line, self.column, "expected digit")),
        }

        let mut is_float = false;

        if self.peek_char() == Some('.') {
            is_float = true;
            self.next_char();
            if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "expected digit after decimal point",
                ));
            }
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                self.next_char();
            }
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            is_float = true;
            self.next_char();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.next_char();
            }
            if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "expected digit in exponent",
                ));
            }
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                self.next_char();
            }
        }

        let number_str = &self.input[start..self.position];

        if is_float {
            number_str
                .parse::<f64>()
                .map(Number::Float)
                .map_err(|_| Error::syntax(self.line, self.column, "invalid float"))
        } else {
            // Integers beyond i64 range fall back to f64.
            match number_str.parse::<i64>() {
                Ok(i) => Ok(Number::Integer(i)),
                Err(_) => number_str
                    .parse::<f64>()
                    .map(Number::Float)
                    .map_err(|_| Error::syntax(self.line, self.column, "invalid integer")),
            }
        }
    }

    fn parse_bool(&mut self) -> Result<bool> {
        if self.input[self.position..].starts_with("true") {
            for _ in 0..4 {
                self.next_char();
            }
            Ok(true)
        } else if self.input[self.position..].starts_with("false") {
            for _ in 0..5 {
                self.next_char();
            }
            Ok(false)
        } else {
            Err(Error::syntax(self.line, self.column, "expected boolean"))
        }
    }

    fn parse_null(&mut self) -> Result<()> {
        if self.input[self.position..].starts_with("null") {
            for _ in 0..4 {
                self.next_char();
            }
            Ok(())
        } else {
            Err(Error::syntax(self.line, self.column, "expected null"))
        }
    }
}
