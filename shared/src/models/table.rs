//! Table Model
//!
//! Tables have no stored record; everything here is derived from order lines.

use serde::{Deserialize, Serialize};

use super::OrderLineView;

/// Derived status of one table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableStatus {
    pub table_no: i32,
    pub occupied: bool,
    pub line_count: usize,
    /// Sum of line totals in currency unit
    pub total: f64,
}

/// Lines currently open on a table plus their total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableLines {
    pub table_no: i32,
    pub lines: Vec<OrderLineView>,
    pub total: f64,
}

/// Move table payload (`POST /api/tables/{no}/move`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveTableRequest {
    pub to_table_no: i32,
}

/// Result of moving a table's lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMove {
    pub from_table_no: i32,
    pub to_table_no: i32,
    pub moved_lines: u64,
}

/// Result of closing a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableClose {
    pub table_no: i32,
    pub removed_lines: u64,
}
