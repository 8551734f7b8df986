//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址、端口和请求超时
//! - Gemini API 密钥、模型和接口地址
//! - 代码评审使用的系统指令

use anyhow::{Context, Result};

use crate::providers::gemini::constants::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_SYSTEM_INSTRUCTION,
};

/// 应用配置
///
/// 包含服务器运行所需的所有配置项
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 单个请求的超时时间（秒）
    pub request_timeout_secs: u64,
    /// Gemini API 密钥，只有 `serve` 命令需要
    pub gemini_api_key: Option<String>,
    /// Gemini 模型名称
    pub gemini_model: String,
    /// Gemini API 基础地址
    pub gemini_base_url: String,
    /// 发送给模型的系统指令
    pub system_instruction: String,
    /// 是否以 JSON 格式输出日志
    pub json_logs: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `REVIEWER_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `REVIEWER_PORT`: 服务器监听端口（默认: 3000）
    /// - `REVIEWER_REQUEST_TIMEOUT_SECS`: 请求超时（默认: 300）
    /// - `GOOGLE_GEMINI_KEY`: Gemini API 密钥
    /// - `GEMINI_MODEL`: 模型名称（默认: "gemini-2.0-flash"）
    /// - `GEMINI_BASE_URL`: API 基础地址
    /// - `REVIEWER_SYSTEM_INSTRUCTION`: 覆盖内置的评审指令
    /// - `REVIEWER_LOG_FORMAT`: 设为 "json" 时输出 JSON 日志（默认: 文本）
    ///
    /// # 错误
    ///
    /// - 如果 `REVIEWER_PORT` 不是有效的端口号
    /// - 如果 `REVIEWER_REQUEST_TIMEOUT_SECS` 不是有效的整数
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("REVIEWER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("REVIEWER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("REVIEWER_PORT must be a valid port number")?;

        let request_timeout_secs = lookup("REVIEWER_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "300".to_string())
            .parse()
            .context("REVIEWER_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        let gemini_api_key = lookup("GOOGLE_GEMINI_KEY").filter(|k| !k.trim().is_empty());

        let gemini_model =
            lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let gemini_base_url = lookup("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let system_instruction = lookup("REVIEWER_SYSTEM_INSTRUCTION")
            .unwrap_or_else(|| DEFAULT_SYSTEM_INSTRUCTION.to_string());

        let json_logs = lookup("REVIEWER_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            system_instruction,
            json_logs,
        })
    }

    /// 获取 Gemini API 密钥
    ///
    /// # 错误
    ///
    /// 如果 `GOOGLE_GEMINI_KEY` 未设置或为空
    pub fn gemini_api_key(&self) -> Result<&str> {
        self.gemini_api_key
            .as_deref()
            .context("GOOGLE_GEMINI_KEY environment variable is required")
    }
}
