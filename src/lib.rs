// Library target for integration tests and criterion benchmarks.
// The binary entry point is main.rs, which declares the full module tree
// including the terminal UI.

pub mod config;
pub mod engine;
pub mod store;
pub mod vocab;
