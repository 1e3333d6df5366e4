use criterion::{BenchmarkId, Criterion};
use lob_rs::{OrderBook, OrderId, Price, Quantity, Side};
use std::hint::black_box;

/// Register all benchmarks for adding resting orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // Non-crossing limit orders spread over 100 price levels
    group.bench_function("add_resting_orders", |b| {
        b.iter(|| {
            let mut book = OrderBook::with_capacity("BENCH", 256);
            for i in 0..100u64 {
                let price = Price(1_000_000 - (i as i64 % 100) * 10_000);
                let _ = black_box(book.process_new_order(
                    OrderId(i),
                    Side::Buy,
                    price,
                    Quantity(10),
                ));
            }
        })
    });

    // All orders queue at a single price level
    group.bench_function("add_orders_single_level", |b| {
        b.iter(|| {
            let mut book = OrderBook::with_capacity("BENCH", 256);
            for i in 0..100u64 {
                let _ = black_box(book.process_new_order(
                    OrderId(i),
                    Side::Sell,
                    Price(1_000_000),
                    Quantity(10),
                ));
            }
        })
    });

    // Parametrized benchmark with different order counts
    for order_count in [10u64, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut book =
                        OrderBook::with_capacity("BENCH", order_count as usize + 1);
                    for i in 0..order_count {
                        let price = Price(1_000_000 - (i as i64 % 50) * 10_000);
                        let _ = black_box(book.process_new_order(
                            OrderId(i),
                            Side::Buy,
                            price,
                            Quantity(10),
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}
