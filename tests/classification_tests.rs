//! Integration tests for the classification pipeline: the three-stage
//! fallback, the canonical form, statistics, and the copy-source selectors.

use jsonsift::{classify, jsonsift, CopySource, Value};

#[test]
fn classifies_valid_json_as_structured() {
    let result = classify(r#"{"name":"Alice","age":30,"active":true}"#);

    assert!(result.is_structured);
    assert_eq!(
        result.value,
        Some(jsonsift!({"name": "Alice", "age": 30, "active": true}))
    );
    assert_eq!(
        result.canonical_text,
        "{\n  \"name\": \"Alice\",\n  \"age\": 30,\n  \"active\": true\n}"
    );
}

#[test]
fn round_trips_with_deep_equality() {
    let result = classify(r#"{"a":1}"#);
    assert!(result.is_structured);
    assert_eq!(result.value, Some(jsonsift!({"a": 1})));

    // The canonical text re-parses to the same value.
    let reclassified = classify(&result.canonical_text);
    assert_eq!(reclassified.value, result.value);
}

#[test]
fn is_idempotent_on_structured_input() {
    let inputs = [
        r#"{"z":1,"m":[true,null,"x"],"a":{"nested":2.5}}"#,
        r#"[1,2,3]"#,
        r#""just a string""#,
        "42",
    ];
    for input in inputs {
        let first = classify(input);
        assert!(first.is_structured, "expected structured: {input}");
        let second = classify(&first.canonical_text);
        assert_eq!(first.canonical_text, second.canonical_text);
        assert_eq!(first.value, second.value);
    }
}

#[test]
fn recovers_json_escaped_in_a_string_literal() {
    let result = classify(r#""{\"a\":1}""#);
    assert!(result.is_structured);
    assert_eq!(result.value, Some(jsonsift!({"a": 1})));
}

#[test]
fn recovers_single_quoted_documents() {
    let result = classify(r#"'[1, 2, 3]'"#);
    assert!(result.is_structured);
    assert_eq!(result.value, Some(jsonsift!([1, 2, 3])));
}

#[test]
fn recovers_escaped_document_with_surrounding_whitespace() {
    let result = classify("  \"{\\\"k\\\":[true]}\"  ");
    assert!(result.is_structured);
    assert_eq!(result.value, Some(jsonsift!({"k": [true]})));
}

#[test]
fn falls_back_to_plain_text_with_decoded_escapes() {
    let result = classify("hello\\nworld");

    assert!(!result.is_structured);
    assert!(result.value.is_none());
    assert_eq!(result.canonical_text, "hello\nworld");
    assert_eq!(result.line_count, 2);
    assert_eq!(result.word_count, 2);
    assert_eq!(result.non_empty_lines, vec!["hello", "world"]);
}

#[test]
fn keeps_original_text_untouched() {
    let input = "  {\"a\":1}  ";
    let result = classify(input);
    assert_eq!(result.original_text, input);
}

#[test]
fn empty_and_whitespace_inputs_yield_degenerate_results() {
    for input in ["", " ", "\t\n  \r\n"] {
        let result = classify(input);
        assert!(!result.is_structured);
        assert_eq!(result.canonical_text, "");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.character_count, 0);
        assert_eq!(result.line_count, 0);
        assert_eq!(result.container_count, 0);
        assert!(result.non_empty_lines.is_empty());
    }
}

#[test]
fn counts_containers_in_compact_form() {
    assert_eq!(classify(r#"{"a":1,"b":[1,2]}"#).container_count, 2);
    assert_eq!(classify("[]").container_count, 1);
    assert_eq!(classify(r#"{"a":{"b":{"c":[]}}}"#).container_count, 4);
    assert_eq!(classify("42").container_count, 0);
    assert_eq!(classify("not json").container_count, 0);
}

#[test]
fn container_count_is_a_textual_scan() {
    // Braces inside string values are counted too; the statistic scans the
    // compact serialization rather than walking the value.
    assert_eq!(classify(r#"{"a":"{"}"#).container_count, 2);
}

#[test]
fn preserves_key_order_for_many_keys() {
    let keys = [
        "zulu", "yankee", "xray", "whiskey", "victor", "uniform", "tango", "sierra", "romeo",
        "quebec", "papa", "oscar",
    ];
    let doc = format!(
        "{{{}}}",
        keys.iter()
            .enumerate()
            .map(|(i, k)| format!("\"{k}\":{i}"))
            .collect::<Vec<_>>()
            .join(",")
    );

    let result = classify(&doc);
    let value = result.value.as_ref().unwrap();
    let parsed_keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(parsed_keys, keys);

    // The canonical text lists the keys in the same order.
    let positions: Vec<usize> = keys
        .iter()
        .map(|k| result.canonical_text.find(&format!("\"{k}\"")).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn copy_formatted_always_succeeds() {
    let structured = classify(r#"{"a":1}"#);
    assert_eq!(
        structured.copy_text(CopySource::Formatted),
        Some(structured.canonical_text.clone())
    );

    let plain = classify("some prose");
    assert_eq!(
        plain.copy_text(CopySource::Formatted),
        Some("some prose".to_string())
    );
}

#[test]
fn copy_minified_requires_structured_input() {
    let structured = classify("{\n  \"a\": [1, 2],\n  \"b\": null\n}");
    assert_eq!(
        structured.copy_text(CopySource::Minified),
        Some(r#"{"a":[1,2],"b":null}"#.to_string())
    );

    assert_eq!(classify("prose").copy_text(CopySource::Minified), None);
    assert_eq!(classify("").copy_text(CopySource::Minified), None);
}

#[test]
fn copy_line_indexes_non_empty_lines() {
    let result = classify("one\\n\\ntwo\\nthree");
    assert_eq!(result.copy_text(CopySource::Line(0)), Some("one".to_string()));
    assert_eq!(result.copy_text(CopySource::Line(1)), Some("two".to_string()));
    assert_eq!(
        result.copy_text(CopySource::Line(2)),
        Some("three".to_string())
    );
    assert_eq!(result.copy_text(CopySource::Line(3)), None);
}

#[test]
fn malformed_json_degrades_to_plain_text() {
    for input in [
        "{\"a\":1,}",
        "{'a': 1}",
        "[1, 2,",
        "{\"a\" 1}",
        "undefined",
        "NaN",
    ] {
        let result = classify(input);
        assert!(!result.is_structured, "expected plain text: {input}");
        assert!(result.value.is_none());
    }
}

#[test]
fn trailing_garbage_is_not_structured() {
    let result = classify(r#"{"a":1} extra"#);
    assert!(!result.is_structured);
}

#[test]
fn character_count_counts_chars_not_bytes() {
    let result = classify("héllo wörld");
    assert!(!result.is_structured);
    assert_eq!(result.character_count, 11);
}

#[test]
fn canonical_text_matches_pretty_serialization() {
    let result = classify(r#"[{"a":1},{"b":2}]"#);
    let value: &Value = result.value.as_ref().unwrap();
    assert_eq!(result.canonical_text, jsonsift::to_string_pretty(value));
}
