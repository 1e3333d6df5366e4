use criterion::Criterion;
use lob_rs::{replay_events, OrderBook, OrderId, Price, Quantity, Side};
use std::hint::black_box;

/// Record a session with resting depth, sweeps and cancels.
fn recorded_session() -> OrderBook {
    let mut book = OrderBook::with_capacity("BENCH", 2048);
    for i in 0..500u64 {
        let side = if i % 2 == 0 { Side::Sell } else { Side::Buy };
        let offset = (i as i64 % 25) * 10_000;
        let price = match side {
            Side::Sell => Price(1_010_000 + offset),
            Side::Buy => Price(990_000 - offset),
        };
        book.process_new_order(OrderId(i), side, price, Quantity(10))
            .expect("bench book sized for setup");
        if i % 7 == 0 && i > 0 {
            book.process_cancel(OrderId(i - 1));
        }
    }
    // Two sweeps to generate trade records.
    book.process_new_order(OrderId(10_000), Side::Buy, Price(1_100_000), Quantity(400))
        .expect("bench book sized for setup");
    book.process_new_order(OrderId(10_001), Side::Sell, Price(900_000), Quantity(400))
        .expect("bench book sized for setup");
    book
}

/// Register benchmarks for deterministic replay
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Replay");

    let session = recorded_session();
    let events = session.event_log().to_vec();

    group.bench_function("replay_recorded_session", |b| {
        b.iter(|| {
            let replayed = replay_events("BENCH", black_box(&events))
                .expect("replay of a valid session");
            black_box(replayed.last_sequence())
        })
    });

    group.finish();
}
