//! Product API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/products | GET | 菜单列表 (?category=COFFEE) |
//! | /api/products | POST | 新增菜品 |
//! | /api/categories | GET | 固定分类列表 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/products", get(handler::list).post(handler::create))
        .route("/api/categories", get(handler::categories))
}
