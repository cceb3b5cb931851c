//! # Interchain Test Suite
//!
//! Unified test crate for behaviour that spans crates.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs   # Reference scenarios A-E
//!     ├── lifecycle.rs   # Transactions across domains, status notices
//!     ├── routing.rs     # Closed peer tables, audit ordering, sealing
//!     └── journal.rs     # ic-node journal replay
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ic-tests
//! cargo test -p ic-tests integration::scenarios::
//! cargo bench -p ic-tests
//! ```

pub mod integration;
