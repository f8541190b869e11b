//! 单份报告处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **加载原文**：远程地址走 `ReportClient`，本地路径直接读文件
//! 2. **流程调度**：交给 `ReportFlow` 解析计分
//! 3. **结果落盘**：以 JSON 写入输出目录
//! 4. **运行日志**：向日志文件追加一行处理结果

use anyhow::{Context, Result};
use regex::Regex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::clients::ReportClient;
use crate::models::AssessmentReport;
use crate::utils::logging::{log_report_summary, truncate_text};
use crate::workflow::{ReportCtx, ReportFlow, ReportSource};

/// 读取报告原文
pub async fn load_document(client: &ReportClient, source: &ReportSource) -> Result<String> {
    match source {
        ReportSource::Url(url) => Ok(client.fetch(url).await?),
        ReportSource::File(path) => fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取报告文件: {}", path)),
    }
}

/// 处理单份报告，返回写出的 JSON 路径
pub async fn process_report(
    client: &ReportClient,
    flow: &ReportFlow,
    ctx: &ReportCtx,
    output_dir: &Path,
) -> Result<PathBuf> {
    info!("{} 📥 加载: {}", ctx, truncate_text(ctx.source.as_str(), 80));

    let document_text = load_document(client, &ctx.source).await?;
    debug!("{} 原文长度: {} 字节", ctx, document_text.len());

    let report = flow
        .parse(&document_text)
        .with_context(|| format!("解析报告失败: {}", ctx.source.as_str()))?;

    log_report_summary(&ctx.to_string(), &report);

    let output_path = output_dir.join(output_file_name(ctx)?);
    write_report(&report, &output_path).await?;
    info!("{} 💾 已写入: {}", ctx, output_path.display());

    Ok(output_path)
}

/// 以格式化 JSON 写出报告
pub async fn write_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)
        .await
        .with_context(|| format!("无法写入结果文件: {}", path.display()))?;
    Ok(())
}

/// 结果文件名：`{序号}_{来源末段}.json`，非法字符替换为 `_`
pub fn output_file_name(ctx: &ReportCtx) -> Result<String> {
    let last_segment = ctx
        .source
        .as_str()
        .trim_end_matches('/')
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let stem = last_segment
        .split('?')
        .next()
        .unwrap_or_default()
        .trim_end_matches(".html")
        .trim_end_matches(".htm");

    let re = Regex::new(r"[^A-Za-z0-9_-]+")?;
    let sanitized = re.replace_all(stem, "_");
    let sanitized = sanitized.trim_matches('_');
    let stem = if sanitized.is_empty() { "report" } else { sanitized };

    Ok(format!("{:03}_{}.json", ctx.report_index, stem))
}

/// 向运行日志追加一行
pub fn append_run_log(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("无法打开日志文件: {}", log_file_path))?;
    writeln!(file, "{}", line)?;
    Ok(())
}
