//! Микробенчмарки кодека ACL-правил: validate, decode, translate.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use nimbic::{decode, translate, validate, LookupEntry, Lookups};

const SHORT_RULE: &str = "* VM/* CREATE";
const LONG_RULE: &str = "#5 VM+HOST+NET+IMAGE+TEMPLATE/@12 USE+MANAGE+ADMIN+CREATE #3";

fn lookups() -> Lookups {
    Lookups {
        users: (0..100)
            .map(|i| LookupEntry::new(i.to_string(), format!("user-{i}")))
            .collect(),
        groups: (0..100)
            .map(|i| LookupEntry::new(i.to_string(), format!("group-{i}")))
            .collect(),
        zones: (0..10)
            .map(|i| LookupEntry::new(i.to_string(), format!("zone-{i}")))
            .collect(),
        ..Default::default()
    }
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_short", |b| {
        b.iter(|| validate(black_box(SHORT_RULE)))
    });
    c.bench_function("validate_long", |b| {
        b.iter(|| validate(black_box(LONG_RULE)))
    });
    c.bench_function("validate_reject", |b| {
        b.iter(|| validate(black_box("#5 VM+HOST/* USE+MANAGE+")))
    });
}

fn bench_decode(c: &mut Criterion) {
    let lookups = lookups();
    c.bench_function("decode_long", |b| {
        b.iter(|| decode(black_box(LONG_RULE), &lookups).unwrap())
    });
    c.bench_function("decode_no_lookups", |b| {
        let empty = Lookups::default();
        b.iter(|| decode(black_box(LONG_RULE), &empty).unwrap())
    });
}

fn bench_translate(c: &mut Criterion) {
    let lookups = lookups();
    c.bench_function("translate_long", |b| {
        b.iter(|| translate(black_box(LONG_RULE), &lookups).unwrap())
    });
}

criterion_group!(benches, bench_validate, bench_decode, bench_translate);
criterion_main!(benches);
