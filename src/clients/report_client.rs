//! 报告页面客户端
//!
//! 负责按 URL 拉取考试结果页面的原始 HTML
use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError, FetchError};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// 报告页面客户端
pub struct ReportClient {
    http: reqwest::Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl ReportClient {
    /// 创建新的报告客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.fetch_user_agent.as_str())
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|source| ConfigError::HttpClientBuildFailed { source })?;

        Ok(Self {
            http,
            max_retries: config.fetch_max_retries,
            retry_delay: Duration::from_millis(500),
        })
    }

    /// 拉取页面文本
    ///
    /// 超时、连接失败和 5xx 会按线性退避重试，403 / 404 直接返回。
    pub async fn fetch(&self, url: &str) -> AppResult<String> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.max_retries && is_retryable(&e) => {
                    attempt += 1;
                    warn!("拉取失败 ({}), 第 {} 次重试: {}", url, attempt, e);
                    sleep(self.retry_delay * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        let status = response.status();
        debug!("响应状态: {} ({})", status, url);
        check_status(url, status)?;

        response
            .text()
            .await
            .map_err(|e| classify_transport_error(url, e))
    }
}

fn classify_transport_error(url: &str, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
        .into()
    } else {
        AppError::fetch_failed(url, err)
    }
}

/// 非 2xx 状态码转换为对应错误
fn check_status(url: &str, status: StatusCode) -> AppResult<()> {
    let url = url.to_string();
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::FORBIDDEN => Err(FetchError::AccessDenied { url }.into()),
        StatusCode::NOT_FOUND => Err(FetchError::NotFound { url }.into()),
        s => Err(FetchError::BadStatus {
            url,
            status: s.as_u16(),
        }
        .into()),
    }
}

fn is_retryable(err: &AppError) -> bool {
    match err {
        AppError::Fetch(FetchError::Timeout { .. }) => true,
        AppError::Fetch(FetchError::BadStatus { status, .. }) => *status >= 500,
        AppError::Fetch(FetchError::RequestFailed { source, .. }) => source.is_connect(),
        _ => false,
    }
}
