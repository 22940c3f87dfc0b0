/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Compact local timestamp used in generated file names (`YYYYMMDDHHMMSS`)
pub fn file_timestamp(at: chrono::DateTime<chrono::Local>) -> String {
    at.format("%Y%m%d%H%M%S").to_string()
}
