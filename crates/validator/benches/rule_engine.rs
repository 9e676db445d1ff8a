//! Benchmarks for single-rule and batch evaluation.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fieldcheck_validator::prelude::*;

fn bench_single_rule(c: &mut Criterion) {
    let non_empty = non_empty();
    let contains = contains("hey there!");
    let between = between("4", "6");

    c.bench_function("non_empty_pass", |b| {
        b.iter(|| validate(black_box("Greeting"), black_box("hello"), &non_empty));
    });

    c.bench_function("contains_ascii", |b| {
        b.iter(|| {
            validate(
                black_box("Greeting"),
                black_box("well, HEY THERE! how are you"),
                &contains,
            )
        });
    });

    c.bench_function("between_pass", |b| {
        b.iter(|| validate(black_box("Gear Number"), black_box("5"), &between));
    });

    c.bench_function("between_fail", |b| {
        b.iter(|| validate(black_box("Gear Number"), black_box("0"), &between));
    });
}

fn bench_batch(c: &mut Criterion) {
    let rules = [
        non_empty().with_message("Couple greeting words here?"),
        contains("hey there!"),
        is_numeric().on(|| false),
        lower("10000.00"),
    ];
    let validator = Validator::new();

    c.bench_function("batch_four_rules", |b| {
        b.iter(|| validator.validate_all(black_box("Greeting"), black_box(""), &rules));
    });

    let failures = validator.validate_all("Greeting", "", &rules);
    c.bench_function("format_messages", |b| {
        b.iter(|| validator.format_messages_for(black_box("Greeting"), &failures));
    });
}

criterion_group!(benches, bench_single_rule, bench_batch);
criterion_main!(benches);
