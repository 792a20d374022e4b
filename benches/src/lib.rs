//! Benchmark-only crate, see `benches/metatools`.
