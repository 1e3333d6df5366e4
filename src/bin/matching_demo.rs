// src/bin/matching_demo.rs

use lob_rs::{
    replay_events, setup_logger, OrderBook, OrderId, Price, Quantity, Side,
};
use tracing::info;

fn main() {
    setup_logger();
    info!("Deterministic matching engine demo");

    let mut book = OrderBook::with_capacity("DEMO/USD", 4096);

    seed_resting_orders(&mut book);
    display_book_state(&book);

    aggressive_sweep(&mut book);
    display_book_state(&book);

    cancel_resting_order(&mut book);
    sweep_remaining_asks(&mut book);
    display_book_state(&book);

    dump_recent_events(&book);
    verify_replay(&book);
}

fn seed_resting_orders(book: &mut OrderBook) {
    info!("Seeding resting orders");

    let asks = [(1u64, 101.0, 50u64), (2, 100.5, 30), (3, 100.0, 20)];
    for (id, price, quantity) in asks {
        book.process_new_order(
            OrderId(id),
            Side::Sell,
            Price::from_decimal(price),
            Quantity(quantity),
        )
        .expect("demo pool sized for all orders");
    }

    let bids = [(4u64, 99.0, 40u64), (5, 99.5, 35)];
    for (id, price, quantity) in bids {
        book.process_new_order(
            OrderId(id),
            Side::Buy,
            Price::from_decimal(price),
            Quantity(quantity),
        )
        .expect("demo pool sized for all orders");
    }
}

fn aggressive_sweep(book: &mut OrderBook) {
    info!("Aggressive buy sweeping multiple ask levels");
    book.process_new_order(
        OrderId(6),
        Side::Buy,
        Price::from_decimal(101.5),
        Quantity(80),
    )
    .expect("demo pool sized for all orders");
}

fn cancel_resting_order(book: &mut OrderBook) {
    info!("Cancelling order 4");
    book.process_cancel(OrderId(4));
}

fn sweep_remaining_asks(book: &mut OrderBook) {
    info!("Marketable buy against the remaining ask depth");
    book.process_new_order(
        OrderId(7),
        Side::Buy,
        Price::from_decimal(999_999.0),
        Quantity(25),
    )
    .expect("demo pool sized for all orders");
}

fn display_book_state(book: &OrderBook) {
    let snapshot = book.create_snapshot(5);

    info!("Book {} at sequence {}", book.symbol(), book.last_sequence());
    for level in &snapshot.asks {
        info!(
            "  ASK {} x {} ({} orders)",
            level.price, level.total_volume, level.order_count
        );
    }
    for level in &snapshot.bids {
        info!(
            "  BID {} x {} ({} orders)",
            level.price, level.total_volume, level.order_count
        );
    }
    match (book.best_bid(), book.best_ask()) {
        (Some(bid), Some(ask)) => info!("  touch: {} / {}", bid, ask),
        (Some(bid), None) => info!("  touch: {} / -", bid),
        (None, Some(ask)) => info!("  touch: - / {}", ask),
        (None, None) => info!("  book empty"),
    }
}

fn dump_recent_events(book: &OrderBook) {
    let events = book.event_log();
    info!("Event log holds {} events; most recent:", events.len());
    for event in events.iter().rev().take(5).rev() {
        info!("  {}", event);
    }
}

fn verify_replay(book: &OrderBook) {
    info!("Replaying the recorded log through a fresh engine");
    let replayed =
        replay_events(book.symbol(), book.event_log()).expect("replay of a valid session");

    assert_eq!(replayed.event_log(), book.event_log());
    assert_eq!(replayed.best_bid(), book.best_bid());
    assert_eq!(replayed.best_ask(), book.best_ask());
    info!(
        "Replay reproduced all {} events identically",
        replayed.event_log().len()
    );
}
