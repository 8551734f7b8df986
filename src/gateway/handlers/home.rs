//! 存活检查处理器

/// 固定的问候语，同时作为存活检查的响应
pub const GREETING: &str = "Hello World";

/// GET /
pub async fn handle_home() -> &'static str {
    GREETING
}
