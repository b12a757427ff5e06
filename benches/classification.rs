use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonsift::{build_tree, classify, from_str, to_string_pretty};

fn sample_document(records: usize) -> String {
    let rows: Vec<String> = (0..records)
        .map(|i| {
            format!(
                r#"{{"id":{i},"name":"user-{i}","email":"user{i}@example.com","active":{},"tags":["a","b","c"]}}"#,
                i % 2 == 0
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

fn benchmark_classify_json(c: &mut Criterion) {
    let document = sample_document(50);

    c.bench_function("classify_json_document", |b| {
        b.iter(|| classify(black_box(&document)))
    });
}

fn benchmark_classify_plain_text(c: &mut Criterion) {
    let text = "line one\\nline two\\nline three with more words\\n".repeat(50);

    c.bench_function("classify_plain_text", |b| {
        b.iter(|| classify(black_box(&text)))
    });
}

fn benchmark_classify_escaped_document(c: &mut Criterion) {
    let inner = sample_document(20).replace('"', "\\\"");
    let escaped = format!("\"{inner}\"");

    c.bench_function("classify_escaped_document", |b| {
        b.iter(|| classify(black_box(&escaped)))
    });
}

fn benchmark_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for records in [10, 100, 1000] {
        let document = sample_document(records);
        group.bench_with_input(
            BenchmarkId::from_parameter(records),
            &document,
            |b, document| b.iter(|| from_str(black_box(document))),
        );
    }
    group.finish();
}

fn benchmark_pretty_print(c: &mut Criterion) {
    let value = from_str(&sample_document(100)).unwrap();

    c.bench_function("to_string_pretty", |b| {
        b.iter(|| to_string_pretty(black_box(&value)))
    });
}

fn benchmark_build_tree(c: &mut Criterion) {
    let value = from_str(&sample_document(100)).unwrap();

    c.bench_function("build_tree", |b| b.iter(|| build_tree(black_box(&value))));
}

criterion_group!(
    benches,
    benchmark_classify_json,
    benchmark_classify_plain_text,
    benchmark_classify_escaped_document,
    benchmark_parse_scaling,
    benchmark_pretty_print,
    benchmark_build_tree
);
criterion_main!(benches);
