use criterion::{criterion_group, criterion_main, Criterion};
use regform_core::text::fold_key;
use regform_core::{sort_records, CountryRecord};
use std::hint::black_box;

// Roughly the size and shape of the real remote list: ~250 names, a few
// of them non-ASCII.
fn synthetic_records() -> Vec<CountryRecord> {
    let stems = [
        "Aland", "Bénin", "Curaçao", "Dominica", "España", "Fiji", "Guinea", "Honduras",
        "Iceland", "Jordan", "Kiribati", "Lesotho", "México", "Norway", "Oman", "Perú",
        "Qatar", "Réunion", "Samoa", "Türkiye", "Uganda", "Vanuatu", "Yemen", "Zambia",
        "São Tomé",
    ];
    (0..250)
        .map(|i| {
            let stem = stems[i % stems.len()];
            CountryRecord::new(format!("{stem} {}", i / stems.len()), format!("X{i}"))
        })
        .collect()
}

fn bench_fold_key(c: &mut Criterion) {
    c.bench_function("fold_key", |b| {
        b.iter(|| fold_key(black_box("São Tomé and Príncipe")))
    });
}

fn bench_sort_records(c: &mut Criterion) {
    let records = synthetic_records();
    c.bench_function("sort_records_250", |b| {
        b.iter(|| {
            let mut list = records.clone();
            sort_records(black_box(&mut list));
            list
        })
    });
}

criterion_group!(benches, bench_fold_key, bench_sort_records);
criterion_main!(benches);
