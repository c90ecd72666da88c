//! Benchmarks for filter computation
//!
//! Run with: cargo bench --package pipeline
//!
//! compute_visible runs on every keystroke, so the whole pipeline pass
//! over a realistic catalog must stay comfortably sub-millisecond.

use catalog::PerkRecord;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{FilterState, MerchantSelector, directory_pipeline};

fn synthetic_catalog(size: usize) -> Vec<PerkRecord> {
    (0..size)
        .map(|i| PerkRecord {
            id: format!("perk-{}", i),
            title: format!("Perk Number {} Special Offer", i),
            merchant: format!("Merchant {}", i % 25),
        })
        .collect()
}

fn bench_name_query(c: &mut Criterion) {
    let perks = synthetic_catalog(5_000);
    let pipeline = directory_pipeline();

    let mut state = FilterState::new();
    state.set_name_query("number 42");

    c.bench_function("compute_visible_name_query", |b| {
        b.iter(|| {
            let result = pipeline.compute_visible(black_box(&perks), black_box(&state));
            black_box(result)
        })
    });
}

fn bench_merchant_selection(c: &mut Criterion) {
    let perks = synthetic_catalog(5_000);
    let pipeline = directory_pipeline();

    let mut state = FilterState::new();
    state.set_merchant(MerchantSelector::Only("Merchant 7".to_string()));

    c.bench_function("compute_visible_merchant", |b| {
        b.iter(|| {
            let result = pipeline.compute_visible(black_box(&perks), black_box(&state));
            black_box(result)
        })
    });
}

fn bench_combined_filters(c: &mut Criterion) {
    let perks = synthetic_catalog(5_000);
    let pipeline = directory_pipeline();

    let mut state = FilterState::new();
    state.set_name_query("special");
    state.set_merchant(MerchantSelector::Only("Merchant 7".to_string()));

    c.bench_function("compute_visible_combined", |b| {
        b.iter(|| {
            let result = pipeline.compute_visible(black_box(&perks), black_box(&state));
            black_box(result)
        })
    });
}

criterion_group!(
    benches,
    bench_name_query,
    bench_merchant_selection,
    bench_combined_filters
);
criterion_main!(benches);
