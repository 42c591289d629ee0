//! Benchmarks for card_form performance testing.
//!
//! Run with: cargo bench

use card_form::view::render;
use card_form::{cvc, expiry, name, number, Event, Field, FormState, NameRule, YearMonth};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const NAME: &str = "Jane Appleseed";
const CARD_NUMBER: &str = "1234567890123456";
const EXPIRY: &str = "03/25";
const CVC: &str = "123";

fn today() -> YearMonth {
    YearMonth::new(2025, 3).expect("valid month")
}

/// Benchmark each field validator
fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validators");
    let today = today();

    group.bench_function("name_letters", |b| {
        b.iter(|| name::validate_name(black_box(NAME), NameRule::Letters))
    });

    group.bench_function("name_legacy", |b| {
        b.iter(|| name::validate_name(black_box(NAME), NameRule::Legacy))
    });

    group.bench_function("card_number", |b| {
        b.iter(|| number::validate_card_number(black_box(CARD_NUMBER)))
    });

    group.bench_function("expiry", |b| {
        b.iter(|| expiry::validate_expiry(black_box(EXPIRY), today))
    });

    group.bench_function("cvc", |b| b.iter(|| cvc::validate_cvc(black_box(CVC))));

    group.finish();
}

/// Benchmark name validation by input length
fn bench_name_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_length");

    for len in [8usize, 64, 512] {
        let input = "Jane O'Brien/".chars().cycle().take(len).collect::<String>();
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| name::validate_name(black_box(input), NameRule::Letters))
        });
    }

    group.finish();
}

/// Benchmark a full input-submit-render cycle
fn bench_form_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");
    let today = today();

    group.bench_function("fill_submit_render", |b| {
        b.iter(|| {
            let mut form = FormState::new();
            form.apply(Event::input(Field::Name, NAME), today);
            form.apply(Event::input(Field::CardNumber, CARD_NUMBER), today);
            form.apply(Event::input(Field::Expiry, EXPIRY), today);
            form.apply(Event::input(Field::Cvc, CVC), today);
            form.apply(Event::Submit, today);
            render(black_box(&form))
        })
    });

    let mut form = FormState::new();
    form.set_value(Field::Name, NAME);
    group.bench_function("render_editing", |b| b.iter(|| render(black_box(&form))));

    group.finish();
}

criterion_group!(benches, bench_validators, bench_name_lengths, bench_form_cycle);
criterion_main!(benches);
