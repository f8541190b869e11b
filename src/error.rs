use serde::Serialize;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文档结构错误（缺少必需的锚点元素）
    #[error("Parsing error: {0}")]
    Structure(#[from] StructureError),
    /// 拉取报告页面失败
    #[error("{0}")]
    Fetch(#[from] FetchError),
    /// 文件操作错误
    #[error("File error: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// 请求体错误
    #[error("{0}")]
    Request(#[from] RequestError),
}

/// 文档结构错误
///
/// 报告级或分区级的锚点缺失，整个解析直接失败，不返回部分结果。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("main info panel not found")]
    MainInfoPanelNotFound,
    #[error("participant table not found")]
    ParticipantTableNotFound,
    #[error("no participant details")]
    NoParticipantDetails,
    #[error("no sections found")]
    NoSectionsFound,
    #[error("section label not found")]
    SectionLabelNotFound,
}

/// 拉取报告页面的错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 请求超时
    #[error("Request timed out while fetching URL: {url}")]
    Timeout { url: String },
    /// 403
    #[error("Access denied (403 Forbidden) for {url}. Check if URL requires authentication or additional headers.")]
    AccessDenied { url: String },
    /// 404
    #[error("Report not found (404) at {url}")]
    NotFound { url: String },
    /// 其他非 2xx 响应
    #[error("HTTP error: {status} for {url}")]
    BadStatus { url: String, status: u16 },
    /// 网络层失败
    #[error("Failed to fetch URL {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML {path}: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize report: {source}")]
    JsonSerializeFailed {
        #[source]
        source: serde_json::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 构建 HTTP 客户端失败
    #[error("failed to build HTTP client: {source}")]
    HttpClientBuildFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// 请求体错误
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Missing 'url' in payload")]
    MissingUrl,
    #[error("Invalid JSON payload: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::JsonSerializeFailed { source: err })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建网络请求失败错误
    pub fn fetch_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Fetch(FetchError::RequestFailed {
            url: url.into(),
            source,
        })
    }

    /// 对外暴露时使用的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Request(_) => 400,
            AppError::Fetch(FetchError::AccessDenied { .. }) => 403,
            AppError::Fetch(FetchError::NotFound { .. }) => 404,
            AppError::Fetch(FetchError::Timeout { .. }) => 504,
            AppError::Fetch(_)
            | AppError::Structure(_)
            | AppError::File(_)
            | AppError::Config(_) => 500,
        }
    }

    /// 转换为错误响应体
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.to_string(),
        }
    }
}

/// 错误响应体：`{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_message() {
        let err: AppError = StructureError::MainInfoPanelNotFound.into();
        assert_eq!(err.to_string(), "Parsing error: main info panel not found");
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_status_codes_for_transport_failures() {
        let timeout: AppError = FetchError::Timeout {
            url: "https://example.com/r.html".to_string(),
        }
        .into();
        let denied: AppError = FetchError::AccessDenied {
            url: "https://example.com/r.html".to_string(),
        }
        .into();
        let missing: AppError = FetchError::NotFound {
            url: "https://example.com/r.html".to_string(),
        }
        .into();

        assert_eq!(timeout.status_code(), 504);
        assert_eq!(denied.status_code(), 403);
        assert_eq!(missing.status_code(), 404);
        assert_eq!(AppError::from(RequestError::MissingUrl).status_code(), 400);
    }

    #[test]
    fn test_payload_carries_message() {
        let payload = AppError::from(RequestError::MissingUrl).to_payload();
        assert_eq!(payload.error, "Missing 'url' in payload");
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"error":"Missing 'url' in payload"}"#
        );
    }
}
