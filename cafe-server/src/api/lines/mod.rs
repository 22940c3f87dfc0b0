//! Order Line API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/lines/{id} | GET | 订单行详情 |
//! | /api/lines/{id} | DELETE | 删除订单行 |
//! | /api/lines/{id}/increase | POST | 数量 +1 |
//! | /api/lines/{id}/decrease | POST | 数量 -1 (到 0 删除) |
//! | /api/lines/{id}/note | PUT | 修改备注 |
//! | /api/lines/{id}/payment | POST | 部分付款 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/lines/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/api/lines/{id}/increase", post(handler::increase))
        .route("/api/lines/{id}/decrease", post(handler::decrease))
        .route("/api/lines/{id}/note", put(handler::set_note))
        .route("/api/lines/{id}/payment", post(handler::partial_payment))
}
