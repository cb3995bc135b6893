use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use wirefix::{flatten, normalize, process_raw, recover, to_html};

fn sample_value() -> Value {
    let cards: Vec<Value> = (0..40)
        .map(|i| {
            json!({
                "type": "card",
                "label": format!("Card {i}"),
                "children": [
                    {"type": "heading", "text": format!("Item {i}")},
                    {"type": "text", "content": "Lorem ipsum dolor sit amet"},
                    {"type": "button", "backgroundColor": "#10B981"}
                ]
            })
        })
        .collect();
    json!({"json": {"title": "Catalog", "components": cards}})
}

fn sample_raw() -> String {
    let body = sample_value().to_string();
    // Chatty prefix, fence and a cut-off tail.
    format!("Sure, here it is:\n```json\n{body}\n```\nAnd another {{\"type\": \"tex")
}

fn recover_bench(c: &mut Criterion) {
    let raw = sample_raw();
    c.bench_function("recover_noisy_response", |b| {
        b.iter(|| {
            let found = recover(black_box(&raw)).expect("bench recover");
            black_box(found);
        });
    });
}

fn normalize_bench(c: &mut Criterion) {
    let value = sample_value();
    c.bench_function("normalize_catalog", |b| {
        b.iter(|| black_box(normalize(black_box(&value))));
    });
}

fn pipeline_bench(c: &mut Criterion) {
    let raw = sample_raw();
    c.bench_function("process_raw_then_export", |b| {
        b.iter(|| {
            let out = process_raw(black_box(&raw)).expect("bench pipeline");
            let flat = flatten(&out.document);
            black_box((to_html(&out.document), flat));
        });
    });
}

criterion_group!(pipeline_benches, recover_bench, normalize_bench, pipeline_bench);
criterion_main!(pipeline_benches);
