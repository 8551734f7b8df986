//! 代码评审处理器

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::gateway::state::AppState;

/// 生成失败时返回给客户端的固定文本
pub const GENERATION_FAILED: &str = "Error generating content";

/// 评审请求体
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// 待评审的代码，缺失时按空字符串转发
    pub code: Option<String>,
}

/// 评审响应体
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub reply: String,
}

/// POST /ai/get-review
///
/// 只有两种结果：Provider 返回文本时响应 200 和 `{ "reply": ... }`，
/// Provider 返回任何错误时记录日志并响应 500 纯文本。
pub async fn handle_get_review(
    State(state): State<AppState>,
    Json(body): Json<ReviewRequest>,
) -> Response {
    let provider = state.provider();

    let code = body.code.unwrap_or_else(|| {
        tracing::warn!("request has no code field, forwarding empty input");
        String::new()
    });

    tracing::debug!(provider = provider.name(), code_len = code.len(), "review");

    match provider.generate_content(&code).await {
        Ok(reply) => (StatusCode::OK, Json(ReviewResponse { reply })).into_response(),
        Err(err) => {
            tracing::error!(provider = provider.name(), "generation failed: {:#}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED).into_response()
        }
    }
}
