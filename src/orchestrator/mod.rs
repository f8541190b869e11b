//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责加载报告来源、调度解析流程、输出结果，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量报告处理器
//! - 管理应用生命周期（初始化、运行）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `report_processor` - 单份报告处理器
//! - 拉取 / 读取报告原文
//! - 调用 `ReportFlow` 解析计分
//! - 写出 JSON 结果
//!
//! ### `request_handler` - 请求处理器
//! - 接收 `{"url": ...}` 请求体
//! - 把错误转换为带状态码的错误响应
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor / request_handler
//!     ↓
//! report_processor
//!     ↓
//! workflow::ReportFlow (处理单份报告)
//!     ↓
//! services (能力层：extract / classify / score / aggregate)
//!     ↓
//! infrastructure (基础设施：文档树查询)
//! ```

pub mod batch_processor;
pub mod report_processor;
pub mod request_handler;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use report_processor::process_report;
pub use request_handler::{ApiResponse, RequestHandler};
