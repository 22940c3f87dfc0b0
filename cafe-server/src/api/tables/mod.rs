//! Table API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/tables | GET | 全部桌台状态 |
//! | /api/tables/occupied | GET | 有单的桌号 |
//! | /api/tables/{no}/lines | GET | 桌台订单行 + 合计 |
//! | /api/tables/{no}/lines | POST | 点单 |
//! | /api/tables/{no}/close | POST | 清台 |
//! | /api/tables/{no}/move | POST | 转台 |
//! | /api/tables/{no}/receipt | POST | 打印小票 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/tables", get(handler::overview))
        .route("/api/tables/occupied", get(handler::occupied))
        .route(
            "/api/tables/{table_no}/lines",
            get(handler::lines).post(handler::add_item),
        )
        .route("/api/tables/{table_no}/close", post(handler::close))
        .route("/api/tables/{table_no}/move", post(handler::move_table))
        .route("/api/tables/{table_no}/receipt", post(handler::print_receipt))
}
