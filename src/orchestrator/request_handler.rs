//! 请求处理器 - 编排层
//!
//! 把 `{"url": "..."}` 形式的请求转换为带状态码的响应：
//! 成功返回报告 JSON（200），失败返回 `{"error": "..."}` 和对应状态码。

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{error, info};

use crate::clients::ReportClient;
use crate::error::{AppError, AppResult, RequestError};
use crate::workflow::ReportFlow;

/// 请求体
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub url: Option<String>,
}

/// 响应（状态码 + JSON 体）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: JsonValue,
}

impl ApiResponse {
    fn ok(body: JsonValue) -> Self {
        Self { status: 200, body }
    }

    fn from_error(err: &AppError) -> Self {
        Self {
            status: err.status_code(),
            body: serde_json::to_value(err.to_payload()).unwrap_or(JsonValue::Null),
        }
    }
}

/// 请求处理器
pub struct RequestHandler {
    client: Arc<ReportClient>,
    flow: Arc<ReportFlow>,
}

impl RequestHandler {
    pub fn new(client: Arc<ReportClient>, flow: Arc<ReportFlow>) -> Self {
        Self { client, flow }
    }

    /// 处理一次请求
    pub async fn handle(&self, body: &str) -> ApiResponse {
        match self.try_handle(body).await {
            Ok(report) => ApiResponse::ok(report),
            Err(e) => {
                error!("❌ 请求处理失败 ({}): {}", e.status_code(), e);
                ApiResponse::from_error(&e)
            }
        }
    }

    async fn try_handle(&self, body: &str) -> AppResult<JsonValue> {
        let url = parse_request(body)?;
        info!("📥 收到解析请求: {}", url);

        let document_text = self.client.fetch(&url).await?;
        let report = self.flow.parse(&document_text)?;
        Ok(serde_json::to_value(report)?)
    }
}

/// 解析请求体，取出 `url`
pub fn parse_request(body: &str) -> AppResult<String> {
    let request: ParseRequest = serde_json::from_str(body)
        .map_err(|source| RequestError::InvalidJson { source })?;

    request
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| RequestError::MissingUrl.into())
}
