use criterion::Criterion;
use lob_rs::{OrderBook, OrderId, Price, Quantity, Side};
use std::hint::black_box;

/// Register all benchmarks for order cancellation
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Cancel Orders");

    // Cancel every order of a populated level, front to back
    group.bench_function("cancel_full_level", |b| {
        b.iter(|| {
            let mut book = OrderBook::with_capacity("BENCH", 256);
            for i in 0..100u64 {
                book.process_new_order(OrderId(i), Side::Buy, Price(1_000_000), Quantity(10))
                    .expect("bench book sized for setup");
            }
            for i in 0..100u64 {
                black_box(book.process_cancel(OrderId(i)));
            }
        })
    });

    // Cancels of ids that are no longer (or never were) resting
    group.bench_function("cancel_unknown_ids", |b| {
        b.iter(|| {
            let mut book = OrderBook::with_capacity("BENCH", 16);
            for i in 0..100u64 {
                black_box(book.process_cancel(OrderId(i)));
            }
        })
    });

    group.finish();
}
