//! Cafe Server - 单店咖啡馆桌台点单账本
//!
//! # 架构概述
//!
//! - **账本** (`orders`): 每桌订单行的增减、部分付款、清台、转台
//! - **菜单** (`services/catalog_service`): 菜品定义
//! - **数据库** (`db`): 嵌入式 SQLite (sqlx)，含迁移、默认菜单、备份恢复
//! - **小票** (`receipt`): 文本小票 + ESC/POS 打印
//! - **HTTP API** (`api`): RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── services/      # 菜单服务、HTTP 应用组装
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、校验
//! ├── db/            # 数据库层
//! ├── orders/        # 订单账本
//! ├── order_money/   # 金额计算 (rust_decimal)
//! └── receipt/       # 小票格式化
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod order_money;
pub mod orders;
pub mod receipt;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use orders::{LedgerError, LedgerResult, OrderLedger};
pub use services::app::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 读取配置并创建工作目录
/// 3. 初始化日志 (stdout + WORK_DIR/logs 滚动文件，生产环境强制 JSON)
pub fn setup_environment() -> std::io::Result<Config> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let logs_dir = config.logs_dir();
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.log_json || config.is_production(),
        Some(logs_dir.as_path()),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ( (
    ) )
  ........
  |      |]   Cafe Server
  \      /    table ledger
   `----'
    "#
    );
}
