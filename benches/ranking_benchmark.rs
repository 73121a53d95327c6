//! Performance benchmarks for batch scoring.
//!
//! Run with: cargo bench --bench ranking_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use product_ranker::{
    extract_quantity, rank, score_products, RawProduct, SentimentMap, ShippingInfo,
};
use std::hint::black_box;

/// Generate a batch of listings with varied titles, prices and shipping.
fn generate_batch(count: usize) -> Vec<RawProduct> {
    (0..count)
        .map(|i| {
            let pack = i % 24 + 1;
            let shipping = match i % 3 {
                0 => ShippingInfo::prime(),
                1 => ShippingInfo::paid(4.99),
                _ => ShippingInfo::default(),
            };
            RawProduct::new(
                format!("item-{i}"),
                format!("Brand {} Paper Towels, {pack} Rolls", i % 7),
            )
            .with_price(5.0 + (i % 40) as f64 * 1.25)
            .with_rating(3.0 + (i % 20) as f64 / 10.0)
            .with_reviews((i as u64 * 37) % 50_000)
            .with_shipping(shipping)
        })
        .collect()
}

fn generate_sentiments(batch: &[RawProduct]) -> SentimentMap {
    batch
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.clone(), (i % 101) as f64))
        .collect()
}

fn benchmark_score_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_products");

    for size in [10, 100, 1000] {
        let batch = generate_batch(size);
        let sentiments = generate_sentiments(&batch);

        group.bench_with_input(BenchmarkId::new("plain", size), &batch, |b, batch| {
            b.iter(|| score_products(black_box(batch), None));
        });
        group.bench_with_input(
            BenchmarkId::new("with_sentiment", size),
            &batch,
            |b, batch| {
                b.iter(|| score_products(black_box(batch), Some(black_box(&sentiments))));
            },
        );
    }

    group.finish();
}

fn benchmark_rank(c: &mut Criterion) {
    let batch = generate_batch(100);
    c.bench_function("rank_100", |b| {
        b.iter(|| rank(black_box(&batch), None, None));
    });
}

fn benchmark_extract_quantity(c: &mut Criterion) {
    let titles = [
        "Vitamin C 500mg, 120 Capsules",
        "Pack of 6 Towels",
        "Wireless Mouse with USB Receiver 2.4GHz Model 2023",
        "AA Batteries (48 Count)",
    ];
    c.bench_function("extract_quantity", |b| {
        b.iter(|| {
            for title in &titles {
                black_box(extract_quantity(black_box(title)));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_score_products,
    benchmark_rank,
    benchmark_extract_quantity
);
criterion_main!(benches);
