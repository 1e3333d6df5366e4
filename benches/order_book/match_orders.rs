use criterion::{BenchmarkId, Criterion};
use lob_rs::{OrderBook, OrderId, Price, Quantity, Side};
use std::hint::black_box;

/// Populate the ask side with `levels` price levels of `per_level` orders.
fn setup_deep_book(levels: u64, per_level: u64) -> OrderBook {
    let capacity = (levels * per_level) as usize + 16;
    let mut book = OrderBook::with_capacity("BENCH", capacity);
    let mut id = 0u64;
    for level in 0..levels {
        let price = Price(1_000_000 + level as i64 * 10_000);
        for _ in 0..per_level {
            id += 1;
            book.process_new_order(OrderId(id), Side::Sell, price, Quantity(10))
                .expect("bench book sized for setup");
        }
    }
    book
}

/// Register all benchmarks for aggressive order matching
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");

    // One aggressor sweeping half of a 100-level book. The book is rebuilt
    // per iteration, so the measurement includes the rest-path too.
    group.bench_function("sweep_deep_book", |b| {
        b.iter(|| {
            let mut book = setup_deep_book(100, 10);
            let _ = black_box(book.process_new_order(
                OrderId(1_000_000),
                Side::Buy,
                Price(2_000_000),
                Quantity(505),
            ));
        })
    });

    // A single full fill against the top of the book
    group.bench_function("fill_top_of_book", |b| {
        b.iter(|| {
            let mut book = setup_deep_book(1, 1);
            let _ = black_box(book.process_new_order(
                OrderId(1_000_000),
                Side::Buy,
                Price(1_000_000),
                Quantity(10),
            ));
        })
    });

    // Scaling of sweep cost with the number of levels consumed
    for levels in [1u64, 10, 50].iter() {
        group.bench_with_input(
            BenchmarkId::new("levels_swept", levels),
            levels,
            |b, &levels| {
                b.iter(|| {
                    let mut book = setup_deep_book(levels, 10);
                    let _ = black_box(book.process_new_order(
                        OrderId(1_000_000),
                        Side::Buy,
                        Price(2_000_000),
                        Quantity(levels * 100),
                    ));
                })
            },
        );
    }

    group.finish();
}
