//! Criterion benchmarks for `faultline`. See `benches/`.
