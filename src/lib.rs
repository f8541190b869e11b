//! # Exam Report Scorer
//!
//! 从考试结果页面（HTML）中抽取考生信息、分区和逐题作答情况，并按计分规则算分。
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 文档树查询能力，只暴露 find / text / sibling
//! - `HtmlDocument` - 基于 `scraper` 的真实 HTML
//! - `SyntheticDocument` - 测试用的内存树
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `extractor` - 结构抽取（考生信息、分区、原始题目）
//! - `classifier` - 题型识别
//! - `scorer` - 按题型计分
//! - `aggregator` - 分区 / 报告汇总
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份报告"的完整处理流程
//! - `ReportFlow` - 抽取 → 计分 → 汇总
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量处理器，管理资源和并发
//! - `orchestrator/request_handler` - `{"url": ...}` 请求 → 带状态码的响应
//!
//! ## 用法
//!
//! ```no_run
//! # fn example(html: &str) -> exam_report_scorer::AppResult<()> {
//! let report = exam_report_scorer::parse(html)?;
//! println!("{}", report.summary.marks_scored);
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::ReportClient;
pub use config::Config;
pub use error::{AppError, AppResult, StructureError};
pub use models::{AssessmentReport, Question, ScoringScheme};
pub use orchestrator::{App, RequestHandler};
pub use workflow::ReportFlow;

/// 用默认计分方案解析报告
pub fn parse(document_text: &str) -> AppResult<AssessmentReport> {
    ReportFlow::default().parse(document_text)
}

/// 用指定计分方案解析报告
pub fn parse_with_scheme(document_text: &str, scheme: &ScoringScheme) -> AppResult<AssessmentReport> {
    ReportFlow::new(scheme.clone()).parse(document_text)
}
