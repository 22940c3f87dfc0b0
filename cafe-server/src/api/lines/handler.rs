//! Order Line API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{LineMutation, OrderLineView, PartialPaymentRequest, SetNoteRequest};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /api/lines/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<OrderLineView>>> {
    let line = state.ledger.get_line(id).await?;
    Ok(ok(line))
}

/// DELETE /api/lines/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<LineMutation>>> {
    let result = state.ledger.delete_line(id).await?;
    Ok(ok(result))
}

/// POST /api/lines/{id}/increase
pub async fn increase(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<LineMutation>>> {
    let result = state.ledger.increase_quantity(id).await?;
    Ok(ok(result))
}

/// POST /api/lines/{id}/decrease
pub async fn decrease(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<LineMutation>>> {
    let result = state.ledger.decrease_quantity(id).await?;
    Ok(ok(result))
}

/// PUT /api/lines/{id}/note
pub async fn set_note(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SetNoteRequest>,
) -> AppResult<Json<ApiResponse<LineMutation>>> {
    let result = state.ledger.set_note(id, &payload.note).await?;
    Ok(ok(result))
}

/// POST /api/lines/{id}/payment
pub async fn partial_payment(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PartialPaymentRequest>,
) -> AppResult<Json<ApiResponse<LineMutation>>> {
    let result = state.ledger.partial_payment(id, payload.amount).await?;
    Ok(ok(result))
}
