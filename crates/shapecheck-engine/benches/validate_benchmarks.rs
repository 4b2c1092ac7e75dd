//! Benchmarks for validation throughput
//!
//! These benchmarks measure how evaluation scales with input size for the
//! composite and combinator schemas.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use shapecheck_core::{array, intersection, number, object, string, union, Schema};
use shapecheck_engine::validate;

/// Generate an array of N user records
fn generate_users(count: usize) -> Value {
    let users: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "name": format!("user_{}", i),
                "email": format!("user_{}@example.com", i),
                "age": i % 90,
            })
        })
        .collect();
    Value::Array(users)
}

fn user_array_schema() -> Schema {
    array(object([
        ("name", Schema::from(string().required())),
        ("email", string().email().required().into()),
        ("age", number().int().min(0.0).into()),
    ]))
    .into()
}

fn bench_arrays(c: &mut Criterion) {
    let schema = user_array_schema();
    let mut group = c.benchmark_group("array_of_objects");

    for size in [10, 100, 1000] {
        let input = generate_users(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| validate(black_box(&schema), black_box(input)))
        });
    }

    group.finish();
}

fn bench_combinators(c: &mut Criterion) {
    let union_schema: Schema = union([Schema::from(number()), string().into(), array(number()).into()])
        .map(Schema::from)
        .unwrap();
    let intersection_schema: Schema = intersection([
        object([("name", string())]),
        object([("age", number())]),
    ])
    .map(Schema::from)
    .unwrap();

    c.bench_function("union_last_member", |b| {
        let input = json!([1, 2, 3]);
        b.iter(|| validate(black_box(&union_schema), black_box(&input)))
    });

    c.bench_function("intersection_merge", |b| {
        let input = json!({"name": "John", "age": 30});
        b.iter(|| validate(black_box(&intersection_schema), black_box(&input)))
    });
}

criterion_group!(benches, bench_arrays, bench_combinators);
criterion_main!(benches);
