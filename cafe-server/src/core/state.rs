//! 服务器状态
//!
//! [`ServerState`] 持有所有服务的共享引用，作为 axum 的 `State` 注入处理器。
//! 所有字段都是廉价克隆（内部为 `Arc` 或连接池句柄）。

use std::path::PathBuf;

use cafe_printer::NetworkPrinter;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::{DbService, seed};
use crate::orders::OrderLedger;
use crate::services::CatalogService;
use crate::utils::AppError;

/// 服务器状态
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 服务器配置 |
/// | db | SQLite 连接池 |
/// | catalog | 菜单服务 |
/// | ledger | 桌台订单账本 |
/// | printer | 可选的网络小票打印机 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: SqlitePool,
    pub catalog: CatalogService,
    pub ledger: OrderLedger,
    pub printer: Option<NetworkPrinter>,
}

impl ServerState {
    /// 用已打开的连接池组装状态
    pub fn new(config: Config, db: SqlitePool) -> Self {
        let printer = config
            .receipt_printer_addr
            .as_deref()
            .and_then(|addr| match NetworkPrinter::from_addr(addr) {
                Ok(printer) => Some(printer),
                Err(e) => {
                    tracing::warn!(addr, error = %e, "Ignoring invalid receipt printer address");
                    None
                }
            });

        Self {
            catalog: CatalogService::new(db.clone()),
            ledger: OrderLedger::new(db.clone(), config.table_count),
            config,
            db,
            printer,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录结构
    /// 2. 打开数据库 (WORK_DIR/database/cafe.db) 并执行迁移
    /// 3. 按需写入默认菜单
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::storage(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_path()).await?;

        if config.seed_catalog {
            seed::seed_catalog_if_empty(&db_service.pool).await?;
        }

        let state = Self::new(config.clone(), db_service.pool);
        tracing::info!(
            table_count = state.config.table_count,
            printer = ?state.printer.as_ref().map(|p| p.addr()),
            "Server state initialized"
        );
        Ok(state)
    }

    /// 获取小票目录
    pub fn receipts_dir(&self) -> PathBuf {
        self.config.receipts_dir()
    }
}
