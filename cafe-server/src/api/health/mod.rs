//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存活检查 + 数据库 ping + 打印机连通性 |

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use cafe_printer::Printer;
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// ok | error
    database: &'static str,
    /// online | offline | not_configured
    printer: &'static str,
    timestamp: i64,
}

async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let ping = sqlx::query("SELECT 1").execute(&state.db).await;
    let (status_code, status, database) = match ping {
        Ok(_) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::error!(error = %e, "Health check: database unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "error")
        }
    };

    // 打印机离线不影响存活状态
    let printer = match &state.printer {
        Some(printer) => {
            if printer.is_online().await {
                "online"
            } else {
                "offline"
            }
        }
        None => "not_configured",
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
            printer,
            timestamp: shared::util::now_millis(),
        }),
    )
}
