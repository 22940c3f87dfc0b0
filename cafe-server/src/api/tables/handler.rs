//! Table API Handlers

use std::collections::BTreeSet;

use axum::{
    Json,
    extract::{Path, State},
};
use cafe_printer::{PrintError, Printer};
use serde::Serialize;
use shared::models::{
    AddItemRequest, MoveTableRequest, OrderLineView, TableClose, TableLines, TableMove,
    TableStatus,
};

use crate::core::ServerState;
use crate::receipt::{self, Receipt, renderer};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, ok, ok_with_message};

/// Result of a receipt request
#[derive(Debug, Serialize)]
pub struct ReceiptPrint {
    /// Path of the written receipt file
    pub file: String,
    /// Whether the receipt was also sent to the network printer
    pub printed: bool,
    pub receipt: Receipt,
}

/// GET /api/tables - 全部桌台状态
pub async fn overview(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<TableStatus>>>> {
    let tables = state.ledger.table_overview().await?;
    Ok(ok(tables))
}

/// GET /api/tables/occupied - 有单的桌号
pub async fn occupied(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<BTreeSet<i32>>>> {
    let tables = state.ledger.get_occupied_tables().await?;
    Ok(ok(tables))
}

/// GET /api/tables/{no}/lines - 订单行与合计
pub async fn lines(
    State(state): State<ServerState>,
    Path(table_no): Path<i32>,
) -> AppResult<Json<ApiResponse<TableLines>>> {
    let lines = state.ledger.table_lines(table_no).await?;
    Ok(ok(lines))
}

/// POST /api/tables/{no}/lines - 点单
pub async fn add_item(
    State(state): State<ServerState>,
    Path(table_no): Path<i32>,
    Json(payload): Json<AddItemRequest>,
) -> AppResult<Json<ApiResponse<OrderLineView>>> {
    let note = payload.note.as_deref().unwrap_or("");
    let line_id = state
        .ledger
        .add_item(table_no, payload.product_id, note)
        .await?;
    let line = state.ledger.get_line(line_id).await?;
    Ok(ok(line))
}

/// POST /api/tables/{no}/close - 清台
pub async fn close(
    State(state): State<ServerState>,
    Path(table_no): Path<i32>,
) -> AppResult<Json<ApiResponse<TableClose>>> {
    let result = state.ledger.close_table(table_no).await?;
    Ok(ok_with_message(result, format!("Table {table_no} closed")))
}

/// POST /api/tables/{no}/move - 转台
pub async fn move_table(
    State(state): State<ServerState>,
    Path(table_no): Path<i32>,
    Json(payload): Json<MoveTableRequest>,
) -> AppResult<Json<ApiResponse<TableMove>>> {
    let result = state
        .ledger
        .move_table(table_no, payload.to_table_no)
        .await?;
    Ok(ok(result))
}

/// POST /api/tables/{no}/receipt - 写小票文件，配置了打印机时同时打印
pub async fn print_receipt(
    State(state): State<ServerState>,
    Path(table_no): Path<i32>,
) -> AppResult<Json<ApiResponse<ReceiptPrint>>> {
    let lines = state.ledger.get_order_lines(table_no).await?;
    let receipt = receipt::format_receipt(table_no, &lines);
    if receipt.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::TableEmpty,
            format!("Table {table_no} has no orders to print"),
        )
        .with_detail("table_no", table_no));
    }

    let width = state.config.receipt_width;
    let path = receipt::write_receipt(&state.receipts_dir(), &receipt, width, chrono::Local::now())
        .await
        .map_err(|e| AppError::storage(format!("Failed to write receipt: {e}")))?;
    let file = path.display().to_string();

    let printed = match &state.printer {
        Some(printer) => {
            let data = renderer::render_escpos(&receipt, width);
            printer
                .print(&data)
                .await
                .map_err(|e| print_error(e).with_detail("file", file.clone()))?;
            true
        }
        None => false,
    };

    Ok(ok(ReceiptPrint {
        file,
        printed,
        receipt,
    }))
}

fn print_error(err: PrintError) -> AppError {
    let code = match err {
        PrintError::Connection(_) | PrintError::Timeout(_) => ErrorCode::PrinterNotAvailable,
        PrintError::Io(_) | PrintError::InvalidConfig(_) => ErrorCode::PrintFailed,
    };
    AppError::with_message(code, err.to_string())
}
