//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::Result;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::AssessmentReport;

/// 初始化 tracing 订阅者
///
/// `RUST_LOG` 优先；否则按 `verbose` 选择 debug / info。重复调用无副作用。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n报告解析日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(max_concurrent: usize, total_sources: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 考试报告解析");
    info!("📄 待处理报告: {}", total_sources);
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 记录单份报告的得分概况
pub fn log_report_summary(prefix: &str, report: &AssessmentReport) {
    let s = &report.summary;
    info!(
        "{} ✓ 解析完成: {} 个分区, {} 道题, 得分 {}/{}, 正确率 {:.2}%",
        prefix,
        report.sections.len(),
        s.total_questions,
        s.marks_scored,
        s.max_possible_marks,
        s.overall_accuracy
    );
    for section in &report.sections {
        info!(
            "{}   - {}: 正确 {} / 错误 {} / 未答 {} → {} 分",
            prefix,
            section.name,
            section.summary.correct,
            section.summary.incorrect,
            section.summary.not_answered,
            section.summary.marks_scored
        );
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `output_dir`: 结果目录
pub fn print_final_stats(success: usize, failed: usize, total: usize, output_dir: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_dir);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Quantitative Ability SA", 12), "Quantitative...");
    }
}
