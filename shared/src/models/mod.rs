//! Data models
//!
//! Shared between the server and any client of its HTTP API.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod order_line;
pub mod product;
pub mod table;

// Re-exports
pub use order_line::*;
pub use product::*;
pub use table::*;
