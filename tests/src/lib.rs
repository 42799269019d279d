//! # Repo Lens Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Registry flows across crates
//! └── benches/           # Criterion benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lens-tests
//! cargo bench -p lens-tests
//! ```

pub mod fixtures;
pub mod integration;
