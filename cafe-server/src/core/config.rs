use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（启动时先加载 `.env`）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、小票、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | TABLE_COUNT | 15 | 桌台数量，桌号范围 1..=TABLE_COUNT |
/// | RECEIPT_WIDTH | 48 | 小票每行字符数 (80mm) |
/// | RECEIPT_PRINTER_ADDR | - | 网络小票打印机 host:port |
/// | SEED_CATALOG | true | 空菜单时写入默认咖啡 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/cafe TABLE_COUNT=20 cargo run -p cafe-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 桌台数量
    pub table_count: i32,
    /// 小票宽度 (字符)
    pub receipt_width: usize,
    /// 网络打印机地址，未设置时只写文件
    pub receipt_printer_addr: Option<String>,
    /// 空菜单时写入默认咖啡
    pub seed_catalog: bool,
    pub log_level: String,
    pub log_json: bool,
    /// 运行环境: development | production
    pub environment: String,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: env_parse("HTTP_PORT").unwrap_or(3000),
            table_count: env_parse("TABLE_COUNT")
                .filter(|n: &i32| *n >= 1)
                .unwrap_or(15),
            receipt_width: env_parse("RECEIPT_WIDTH")
                .filter(|w: &usize| (16..=96).contains(w))
                .unwrap_or(48),
            receipt_printer_addr: std::env::var("RECEIPT_PRINTER_ADDR")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            seed_catalog: env_parse("SEED_CATALOG").unwrap_or(true),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON").unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
    }

    pub fn database_dir(&self) -> PathBuf {
        self.work_dir().join("database")
    }

    /// `WORK_DIR/database/cafe.db`
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("cafe.db")
    }

    pub fn receipts_dir(&self) -> PathBuf {
        self.work_dir().join("receipts")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.work_dir().join("logs")
    }

    /// 创建工作目录结构
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        for dir in [self.database_dir(), self.receipts_dir(), self.logs_dir()] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let config = Config::with_overrides("/srv/cafe", 8080);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database_path(), PathBuf::from("/srv/cafe/database/cafe.db"));
        assert_eq!(config.receipts_dir(), PathBuf::from("/srv/cafe/receipts"));
        assert_eq!(config.logs_dir(), PathBuf::from("/srv/cafe/logs"));
    }

    #[test]
    fn test_ensure_work_dir_structure() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        config.ensure_work_dir_structure().unwrap();
        assert!(config.database_dir().is_dir());
        assert!(config.receipts_dir().is_dir());
        assert!(config.logs_dir().is_dir());
    }
}
