// benches/parsing_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonenorm::PHONE_PARSER;

use phonenumber::{self as rlp, country::Id};

// Test data type: (number string, region for the comparison library)
type TestEntity = (&'static str, Id);

/// Prepares a varied set of inputs so the measurement is not dominated by a
/// single shape. Invalid inputs are included on purpose: rejection speed
/// matters for a validation library too.
fn setup_parsing_data() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        // plain US number in national format
        ("(555) 123-4567", US),
        // 11-digit US number with the leading country digit
        ("1-555-123-4567", US),
        // UK number in international format with a plus sign
        ("+44 20 7123 4567", GB),
        // US number with an extension
        ("555-123-4567x89", US),
        // long international number that gets grouped output
        ("+33 1234 5678 9012", FR),
        // invalid: too short
        ("123456", US),
        // invalid: bad area code
        ("055-123-4567", US),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("phonenorm: parse()", |b| {
        b.iter(|| {
            for (number_str, _) in &numbers_to_parse {
                // The result is ignored; only the parse cost is measured.
                let _ = PHONE_PARSER.parse(black_box(number_str));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for (number_str, region_id) in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(*region_id)), black_box(number_str));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
