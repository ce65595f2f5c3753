//! Benchmarks for the limit order agent.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- price_tick
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use limit_order_agent::client::NoopClient;
use limit_order_agent::types::price::SCALE;
use limit_order_agent::{LimitOrderAgent, OrderId, PriceTick, Side};

// ============================================================================
// HELPER FUNCTIONS - Deterministic population
// ============================================================================

const PRODUCTS: [&str; 4] = ["IBM", "MSFT", "AAPL", "GOOG"];

/// Base price: 100.00000000
const BASE_PRICE: u64 = 100 * SCALE;

/// Agent holding `count` orders spread over the products, none of which
/// match a tick at `BASE_PRICE`.
fn populated_agent(count: usize) -> LimitOrderAgent<NoopClient> {
    let mut agent = LimitOrderAgent::new(NoopClient);
    for i in 0..count {
        let product = PRODUCTS[i % PRODUCTS.len()];
        let (side, limit) = if i % 2 == 0 {
            (Side::Buy, BASE_PRICE - SCALE - i as u64)
        } else {
            (Side::Sell, BASE_PRICE + SCALE + i as u64)
        };
        let _ = agent.add_order(side, product, 100, limit);
    }
    agent
}

// ============================================================================
// BENCHMARK: Tick Processing
// ============================================================================

fn bench_price_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_tick");
    group.measurement_time(Duration::from_secs(10));

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(1));

        // No match: pure scan cost
        group.bench_with_input(BenchmarkId::new("no_match", size), &size, |b, &size| {
            let mut agent = populated_agent(size);
            let tick = PriceTick::new("IBM", BASE_PRICE);
            b.iter(|| black_box(agent.price_tick(&tick)));
        });

        // Every IBM order matches: scan, execute, remove, recompute root
        group.bench_with_input(BenchmarkId::new("match_all_ibm", size), &size, |b, &size| {
            b.iter_batched(
                || populated_agent(size),
                |mut agent| {
                    let sweep = PriceTick::new("IBM", BASE_PRICE - 2 * SCALE - size as u64);
                    black_box(agent.price_tick(&sweep))
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Order Operations
// ============================================================================

fn bench_order_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_operations");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("add_to_empty", |b| {
        b.iter_batched(
            || LimitOrderAgent::new(NoopClient),
            |mut agent| black_box(agent.add_order(Side::Buy, "IBM", 100, BASE_PRICE)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("add_to_1k", |b| {
        b.iter_batched(
            || populated_agent(1_000),
            |mut agent| black_box(agent.add_order(Side::Buy, "IBM", 100, BASE_PRICE)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cancel_order", |b| {
        b.iter_batched(
            || populated_agent(1_000),
            |mut agent| black_box(agent.cancel_order(OrderId(500))),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Threshold Policy
// ============================================================================

fn bench_threshold_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold_policy");

    group.bench_function("fires", |b| {
        let mut agent = LimitOrderAgent::new(NoopClient);
        let tick = PriceTick::new("IBM", 95 * SCALE);
        b.iter(|| black_box(agent.handle_market_data(&tick)));
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_price_tick, bench_order_operations, bench_threshold_policy);

criterion_main!(benches);
