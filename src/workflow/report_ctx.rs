//! 报告处理上下文
//!
//! 封装"我正在处理第几份报告、来源是什么"这一信息

use std::fmt::Display;

/// 报告来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    /// 远程地址
    Url(String),
    /// 本地 HTML 文件
    File(String),
}

impl ReportSource {
    /// 以 http(s):// 开头的视为远程地址，其余视为本地路径
    pub fn detect(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(s) | Self::File(s) => s,
        }
    }
}

/// 报告处理上下文
#[derive(Debug, Clone)]
pub struct ReportCtx {
    /// 报告索引（从1开始，仅用于日志显示）
    pub report_index: usize,

    pub source: ReportSource,
}

impl ReportCtx {
    pub fn new(report_index: usize, source: ReportSource) -> Self {
        Self {
            report_index,
            source,
        }
    }
}

impl Display for ReportCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[报告 #{}]", self.report_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_source() {
        assert_eq!(
            ReportSource::detect("https://cdn.example.com/r.html"),
            ReportSource::Url("https://cdn.example.com/r.html".to_string())
        );
        assert_eq!(
            ReportSource::detect("reports/r.html"),
            ReportSource::File("reports/r.html".to_string())
        );
    }
}
