//! Order ledger
//!
//! Per-table order lines and everything derived from them: totals, occupancy
//! and the line lifecycle (add, increment, decrement, partial payment,
//! delete, close, move).
//!
//! # 并发模型
//!
//! Mutations are serialized through a single async write gate and each one
//! runs in its own SQLite transaction, so a failed precondition never leaves
//! a partial write behind. Reads go straight to the pool.

mod error;
mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use ledger::OrderLedger;
