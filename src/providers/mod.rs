//! Provider 抽象层
//!
//! 定义内容生成服务的统一接口，当前实现为 Google Gemini

pub mod gemini;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use gemini::{GeminiConfig, GeminiProvider};

/// Provider Trait - 内容生成服务的统一接口
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider 名称（用于日志和标识）
    fn name(&self) -> &str;

    /// 将代码原样交给模型，返回模型生成的文本
    async fn generate_content(&self, code: &str) -> Result<String>;
}

/// 根据应用配置创建 Provider
pub fn create_provider(config: &Config) -> Result<Arc<dyn Provider>> {
    let provider = GeminiProvider::new(GeminiConfig {
        api_key: config.gemini_api_key()?.to_string(),
        model: config.gemini_model.clone(),
        base_url: config.gemini_base_url.clone(),
        system_instruction: config.system_instruction.clone(),
    })?;

    tracing::info!(
        provider = provider.name(),
        model = %config.gemini_model,
        "Provider ready"
    );

    Ok(Arc::new(provider))
}
