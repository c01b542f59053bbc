//! The activity ledger: per-user mutable state and its mutation entry points.
//!
//! Single-writer and synchronous. Every mutation completes atomically with
//! respect to reads; there is no I/O here. Callers write the state back to
//! disk after each mutation via the `persistence` module.

pub mod logic;
pub mod types;

pub use types::LedgerState;
