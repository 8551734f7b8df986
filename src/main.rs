//! Reviewer - 代码评审 API 服务
//!
//! 一个轻量级的 HTTP 后端，把用户提交的代码片段转发给 Google Gemini，
//! 并返回模型生成的评审意见。
//!
//! # HTTP 接口
//!
//! - `GET /`: 存活检查，返回 "Hello World"
//! - `POST /ai/get-review`: 提交 `{ "code": ... }`，返回 `{ "reply": ... }`
//!
//! # 命令行接口
//!
//! - `serve`: 启动 API 服务器
//! - `test`: 向本地服务器发送测试请求

mod commands;
mod config;
mod gateway;
mod providers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reviewer CLI
#[derive(Parser)]
#[command(name = "reviewer")]
#[command(about = "AI Code Review Service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// 可用的命令
#[derive(Subcommand)]
enum Commands {
    /// 启动 API 服务器
    Serve,
    /// 向本地服务器发送测试请求
    Test {
        /// 要提交评审的代码（默认使用内置示例）
        #[arg(short, long)]
        code: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（如果存在）
    if let Ok(dotenv_path) = std::env::var("REVIEWER_ENV_FILE") {
        dotenvy::from_path(&dotenv_path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    // 解析命令行参数和配置
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // 初始化日志系统，REVIEWER_LOG_FORMAT=json 时输出 JSON
    let json_logs = config.json_logs;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewer=info".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
        }))
        .init();

    // 执行相应的命令
    match cli.command {
        Commands::Serve => commands::serve_command(config).await,
        Commands::Test { code } => commands::test_command(config, code).await,
    }
}
