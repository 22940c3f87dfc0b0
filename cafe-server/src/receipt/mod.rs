//! Receipt formatting
//!
//! [`format_receipt`] turns a table's lines into a [`Receipt`]; rendering to
//! plain text or ESC/POS bytes lives in [`renderer`]. Writing the document to
//! disk follows the `receipt_<table>_<YYYYMMDDHHMMSS>.txt` naming convention.

pub mod renderer;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use shared::models::OrderLineView;

use crate::order_money;

/// One printed entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptEntry {
    pub name: String,
    pub quantity: i32,
    pub line_total: f64,
    /// `None` when the line has no note
    pub note: Option<String>,
}

/// Receipt for one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub table_no: i32,
    pub entries: Vec<ReceiptEntry>,
    pub total: f64,
}

impl Receipt {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the receipt document for a table's lines
pub fn format_receipt(table_no: i32, lines: &[OrderLineView]) -> Receipt {
    let entries = lines
        .iter()
        .map(|line| ReceiptEntry {
            name: line.product_name.clone(),
            quantity: line.quantity,
            line_total: order_money::to_f64(order_money::line_total(line.unit_price, line.quantity)),
            note: Some(line.note.trim())
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        })
        .collect();

    Receipt {
        table_no,
        entries,
        total: order_money::to_f64(order_money::lines_total(lines)),
    }
}

/// `receipt_<table>_<YYYYMMDDHHMMSS>.txt`
pub fn receipt_file_name(table_no: i32, at: DateTime<Local>) -> String {
    format!("receipt_{}_{}.txt", table_no, shared::util::file_timestamp(at))
}

/// Render the receipt as text and write it into `dir`
///
/// Returns the path of the written file.
pub async fn write_receipt(
    dir: &Path,
    receipt: &Receipt,
    width: usize,
    at: DateTime<Local>,
) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(receipt_file_name(receipt.table_no, at));
    tokio::fs::write(&path, renderer::render_text(receipt, width)).await?;
    tracing::info!(table_no = receipt.table_no, path = %path.display(), "Receipt written");
    Ok(path)
}
