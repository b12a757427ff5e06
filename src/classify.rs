//! Text classification and normalization.
//!
//! This module is the front door of the crate: [`classify`] takes an
//! arbitrary block of text and decides whether it is structured data (JSON)
//! or plain prose, producing a [`ClassificationResult`] either way.
//!
//! ## The three-stage pipeline
//!
//! 1. **Direct parse** — the text is handed to the parser as-is. Success
//!    means the input was already valid JSON.
//! 2. **Escaped-document recovery** — the text is trimmed, one outer pair of
//!    matching quotes is stripped, and the common backslash escapes are
//!    decoded. This rescues JSON that was itself embedded in a string, the
//!    shape log pipelines and copy-paste from debuggers tend to produce.
//! 3. **Plain-text fallback** — the input is treated as prose; the same
//!    escape decoding is applied so `\n` in pasted log lines turns into real
//!    line breaks.
//!
//! The first stage that succeeds wins, with one refinement: when stage 1
//! parses the whole input as a single JSON string (which any quoted escaped
//! document is), stage 2 still runs, and its result replaces the string when
//! it recovers a container. Plain quoted strings stay strings.
//!
//! Stages never cascade their errors to the caller; [`classify`] is total
//! and never panics.
//!
//! ## Examples
//!
//! ```rust
//! use jsonsift::classify;
//!
//! let result = classify(r#"{"name":"Alice","age":30}"#);
//! assert!(result.is_structured);
//! assert_eq!(result.canonical_text, "{\n  \"name\": \"Alice\",\n  \"age\": 30\n}");
//!
//! let result = classify("just a sentence");
//! assert!(!result.is_structured);
//! assert_eq!(result.canonical_text, "just a sentence");
//! ```

use serde::Serialize;

use crate::{de, ser, Value};

/// The outcome of classifying a block of text.
///
/// Produced by [`classify`]; immutable once built. When the input parsed as
/// structured data, `canonical_text` holds the pretty-printed form and
/// `value` the parsed document. Otherwise `canonical_text` holds the
/// escape-decoded input and `value` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// The input exactly as received.
    pub original_text: String,
    /// The normalized form: pretty-printed JSON for structured input,
    /// escape-decoded text otherwise.
    pub canonical_text: String,
    /// Whether the input parsed as structured data.
    pub is_structured: bool,
    /// The parsed document; `Some` iff `is_structured`.
    pub value: Option<Value>,
    /// Whitespace-separated word count of the canonical text.
    pub word_count: usize,
    /// Character count (chars, not bytes) of the canonical text.
    pub character_count: usize,
    /// Line count of the canonical text (pieces after splitting on `\n`).
    pub line_count: usize,
    /// Number of containers (`{` plus `[`) in the compact re-serialization.
    /// Counted textually over the compact form; 0 for unstructured input.
    pub container_count: usize,
    /// The non-blank lines of the canonical text, in order.
    pub non_empty_lines: Vec<String>,
}

/// Selects which rendition of a classification result to copy.
///
/// The caller owns the actual clipboard write; this type only names the
/// target so [`ClassificationResult::copy_text`] and
/// [`crate::CopyFeedback`] agree on what was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopySource {
    /// The full canonical (pretty-printed or decoded) text.
    Formatted,
    /// The compact single-line serialization of the parsed value.
    Minified,
    /// A single entry of [`ClassificationResult::non_empty_lines`].
    Line(usize),
}

impl ClassificationResult {
    /// Returns the text a given copy target resolves to.
    ///
    /// `Minified` is only available for structured results; `Line` is only
    /// available in range. `Formatted` always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonsift::{classify, CopySource};
    ///
    /// let result = classify(r#"{"a": 1}"#);
    /// assert_eq!(
    ///     result.copy_text(CopySource::Minified),
    ///     Some(r#"{"a":1}"#.to_string())
    /// );
    /// assert_eq!(result.copy_text(CopySource::Line(99)), None);
    /// ```
    #[must_use]
    pub fn copy_text(&self, source: CopySource) -> Option<String> {
        match source {
            CopySource::Formatted => Some(self.canonical_text.clone()),
            CopySource::Minified => self.value.as_ref().map(ser::to_string),
            CopySource::Line(index) => self.non_empty_lines.get(index).cloned(),
        }
    }
}

/// Classifies a block of text as structured data or plain text and
/// normalizes it.
///
/// Total: every input produces a result, including empty and whitespace-only
/// input (which yields an unstructured result with empty canonical text and
/// zeroed statistics).
///
/// # Examples
///
/// ```rust
/// use jsonsift::classify;
///
/// // Valid JSON is normalized.
/// assert!(classify(r#"[1, 2, 3]"#).is_structured);
///
/// // JSON escaped inside a string literal is recovered.
/// assert!(classify(r#""{\"a\":1}""#).is_structured);
///
/// // Everything else is treated as plain text.
/// assert!(!classify("not json at all").is_structured);
/// ```
#[must_use]
pub fn classify(text: &str) -> ClassificationResult {
    if text.trim().is_empty() {
        return degenerate(text);
    }

    // A quoted, escaped document is itself a valid JSON string, so a
    // top-level string from the direct parse still gets a recovery attempt;
    // the recovered form wins only when it turns out to be a container.
    let parsed = match de::from_str(text) {
        Ok(Value::String(s)) => match de::from_str(&recover_escaped(text)) {
            Ok(inner) if inner.is_container() => Ok(inner),
            _ => Ok(Value::String(s)),
        },
        other => other.or_else(|_| de::from_str(&recover_escaped(text))),
    };

    match parsed {
        Ok(value) => {
            let canonical_text = ser::to_string_pretty(&value);
            let container_count = count_containers(&ser::to_string(&value));
            finish(text, canonical_text, Some(value), container_count)
        }
        Err(_) => {
            let canonical_text = decode_escapes(text);
            finish(text, canonical_text, None, 0)
        }
    }
}

fn degenerate(text: &str) -> ClassificationResult {
    ClassificationResult {
        original_text: text.to_string(),
        canonical_text: String::new(),
        is_structured: false,
        value: None,
        word_count: 0,
        character_count: 0,
        line_count: 0,
        container_count: 0,
        non_empty_lines: Vec::new(),
    }
}

fn finish(
    original: &str,
    canonical_text: String,
    value: Option<Value>,
    container_count: usize,
) -> ClassificationResult {
    let word_count = canonical_text.split_whitespace().count();
    let character_count = canonical_text.chars().count();
    let line_count = canonical_text.split('\n').count();
    let non_empty_lines = canonical_text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    ClassificationResult {
        original_text: original.to_string(),
        is_structured: value.is_some(),
        value,
        canonical_text,
        word_count,
        character_count,
        line_count,
        container_count,
        non_empty_lines,
    }
}

/// Prepares text for the escaped-document parse attempt: trim, strip one
/// outer quote pair, decode escapes.
fn recover_escaped(text: &str) -> String {
    decode_escapes(strip_outer_quotes(text.trim()))
}

/// Strips exactly one pair of matching outer quotes (`"…"` or `'…'`).
fn strip_outer_quotes(text: &str) -> &str {
    if text.len() >= 2 {
        let bytes = text.as_bytes();
        let (first, last) = (bytes[0], bytes[text.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Decodes the common backslash escapes.
///
/// The substitutions are sequential global replacements, each applied over
/// the output of the previous one, in this fixed order: `\n`, `\t`, `\r`,
/// `\"`, `\'`, and finally `\\`.
fn decode_escapes(text: &str) -> String {
    text.replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
        .replace("\\\"", "\"")
        .replace("\\'", "'")
        .replace("\\\\", "\\")
}

/// Counts opening braces and brackets in a compact serialization.
fn count_containers(compact: &str) -> usize {
    compact.chars().filter(|&c| c == '{' || c == '[').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_parse() {
        let result = classify(r#"{"a":1}"#);
        assert!(result.is_structured);
        assert_eq!(result.canonical_text, "{\n  \"a\": 1\n}");
        assert_eq!(result.value, Some(crate::jsonsift!({"a": 1})));
    }

    #[test]
    fn test_escaped_document_recovery() {
        let result = classify(r#""{\"a\":1}""#);
        assert!(result.is_structured);
        assert_eq!(result.value, Some(crate::jsonsift!({"a": 1})));
    }

    #[test]
    fn test_quoted_plain_string_stays_a_string() {
        let result = classify(r#""just a sentence""#);
        assert!(result.is_structured);
        assert_eq!(result.value, Some(Value::from("just a sentence")));
    }

    #[test]
    fn test_quoted_scalar_is_not_unwrapped() {
        // Recovery only replaces the string when it uncovers a container.
        let result = classify(r#""123""#);
        assert_eq!(result.value, Some(Value::from("123")));
    }

    #[test]
    fn test_single_quoted_recovery() {
        let result = classify(r#"'{"a": true}'"#);
        assert!(result.is_structured);
        assert_eq!(result.value, Some(crate::jsonsift!({"a": true})));
    }

    #[test]
    fn test_plain_text_fallback_decodes_escapes() {
        let result = classify("hello\\nworld");
        assert!(!result.is_structured);
        assert_eq!(result.canonical_text, "hello\nworld");
        assert_eq!(result.line_count, 2);
        assert!(result.value.is_none());
    }

    #[test]
    fn test_whitespace_only_input_is_degenerate() {
        for input in ["", "   ", "\n\t \n"] {
            let result = classify(input);
            assert!(!result.is_structured);
            assert_eq!(result.canonical_text, "");
            assert_eq!(result.word_count, 0);
            assert_eq!(result.character_count, 0);
            assert_eq!(result.line_count, 0);
            assert_eq!(result.container_count, 0);
            assert!(result.non_empty_lines.is_empty());
            assert_eq!(result.original_text, input);
        }
    }

    #[test]
    fn test_statistics_over_canonical_text() {
        let result = classify(r#"{"a":1,"b":[1,2]}"#);
        // Canonical form:
        // {
        //   "a": 1,
        //   "b": [
        //     1,
        //     2
        //   ]
        // }
        assert_eq!(result.line_count, 7);
        assert_eq!(result.word_count, 9);
        assert_eq!(result.container_count, 2);
        assert_eq!(result.non_empty_lines.len(), 7);
        assert_eq!(
            result.character_count,
            result.canonical_text.chars().count()
        );
    }

    #[test]
    fn test_container_count_counts_nested() {
        let result = classify(r#"{"a":{"b":[[],{}]}}"#);
        assert_eq!(result.container_count, 5);
    }

    #[test]
    fn test_plain_text_word_count() {
        let result = classify("the quick  brown\tfox");
        assert_eq!(result.word_count, 4);
        assert_eq!(result.line_count, 1);
    }

    #[test]
    fn test_non_empty_lines_skip_blanks() {
        let result = classify("first\\n\\n  \\nsecond");
        assert!(!result.is_structured);
        assert_eq!(result.line_count, 4);
        assert_eq!(result.non_empty_lines, vec!["first", "second"]);
    }

    #[test]
    fn test_scalar_json_is_structured() {
        assert!(classify("42").is_structured);
        assert!(classify("true").is_structured);
        assert!(classify("null").is_structured);
        assert!(classify(r#""a string""#).is_structured);
    }

    #[test]
    fn test_idempotent_on_structured_input() {
        let first = classify(r#"{"z":1,"a":[true,null]}"#);
        let second = classify(&first.canonical_text);
        assert!(second.is_structured);
        assert_eq!(first.canonical_text, second.canonical_text);
        assert_eq!(first.value, second.value);
    }

    #[test]
    fn test_copy_text_formatted() {
        let result = classify("plain text");
        assert_eq!(
            result.copy_text(CopySource::Formatted),
            Some("plain text".to_string())
        );
    }

    #[test]
    fn test_copy_text_minified() {
        let result = classify("{\n  \"a\": [1, 2]\n}");
        assert_eq!(
            result.copy_text(CopySource::Minified),
            Some(r#"{"a":[1,2]}"#.to_string())
        );
        assert_eq!(classify("prose").copy_text(CopySource::Minified), None);
    }

    #[test]
    fn test_copy_text_line() {
        let result = classify(r#"{"a":1}"#);
        assert_eq!(result.copy_text(CopySource::Line(0)), Some("{".to_string()));
        assert_eq!(
            result.copy_text(CopySource::Line(1)),
            Some("  \"a\": 1".to_string())
        );
        assert_eq!(result.copy_text(CopySource::Line(3)), None);
    }

    #[test]
    fn test_strip_outer_quotes() {
        assert_eq!(strip_outer_quotes(r#""abc""#), "abc");
        assert_eq!(strip_outer_quotes("'abc'"), "abc");
        assert_eq!(strip_outer_quotes(r#""abc'"#), r#""abc'"#);
        assert_eq!(strip_outer_quotes("abc"), "abc");
        assert_eq!(strip_outer_quotes(r#"""#), r#"""#);
    }

    #[test]
    fn test_decode_escapes_order() {
        assert_eq!(decode_escapes(r"a\nb"), "a\nb");
        assert_eq!(decode_escapes(r"a\tb"), "a\tb");
        // The doubled backslash is decoded last, so it does not spawn new
        // escape sequences.
        assert_eq!(decode_escapes(r"a\\nb"), "a\\\nb");
    }

    #[test]
    fn test_key_order_survives_classification() {
        let keys = ["zebra", "mango", "apple", "kiwi", "fig"];
        let doc = format!(
            "{{{}}}",
            keys.iter()
                .map(|k| format!("\"{k}\":1"))
                .collect::<Vec<_>>()
                .join(",")
        );
        let result = classify(&doc);
        let value = result.value.unwrap();
        let parsed_keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(parsed_keys, keys);
    }
}
