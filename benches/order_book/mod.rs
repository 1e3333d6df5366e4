pub mod add_orders;
pub mod cancel_orders;
pub mod match_orders;
pub mod replay;

// Import common benchmarks into the main bench group
pub fn register_benchmarks(c: &mut criterion::Criterion) {
    add_orders::register_benchmarks(c);
    match_orders::register_benchmarks(c);
    cancel_orders::register_benchmarks(c);
    replay::register_benchmarks(c);
}
