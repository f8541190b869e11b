//! 批量报告处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量报告的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：日志文件、计分方案、HTTP 客户端
//! 2. **并发控制**：使用 Semaphore 限制同时处理的报告数
//! 3. **资源管理**：持有 `ReportClient` 和 `ReportFlow`，以 `Arc` 共享给各任务
//! 4. **全局统计**：汇总所有报告的处理结果

use anyhow::{Context, Result};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::clients::ReportClient;
use crate::config::Config;
use crate::models::{load_scoring_scheme, ScoringScheme};
use crate::orchestrator::report_processor::{append_run_log, process_report};
use crate::orchestrator::request_handler::RequestHandler;
use crate::utils::logging::{init_log_file, log_startup, print_final_stats};
use crate::workflow::{ReportCtx, ReportFlow, ReportSource};

/// 处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    client: Arc<ReportClient>,
    flow: Arc<ReportFlow>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;

        let scheme = match &config.scoring_file {
            Some(path) => load_scoring_scheme(Path::new(path)).await?,
            None => ScoringScheme::default(),
        };

        let client = ReportClient::new(&config)?;

        Ok(Self {
            config,
            client: Arc::new(client),
            flow: Arc::new(ReportFlow::new(scheme)),
        })
    }

    /// 创建共享同一客户端和计分方案的请求处理器
    pub fn request_handler(&self) -> RequestHandler {
        RequestHandler::new(self.client.clone(), self.flow.clone())
    }

    /// 批量处理报告来源（URL 或本地文件）
    pub async fn run(&self, sources: Vec<String>) -> Result<ProcessingStats> {
        if sources.is_empty() {
            warn!("⚠️ 没有待处理的报告，程序结束");
            return Ok(ProcessingStats::default());
        }

        log_startup(self.config.max_concurrent_reports, sources.len());

        let output_dir = PathBuf::from(&self.config.output_dir);
        tokio::fs::create_dir_all(&output_dir)
            .await
            .with_context(|| format!("无法创建输出目录: {}", output_dir.display()))?;

        let stats = self.process_all(sources, output_dir).await?;

        print_final_stats(stats.success, stats.failed, stats.total, &self.config.output_dir);

        Ok(stats)
    }

    async fn process_all(&self, sources: Vec<String>, output_dir: PathBuf) -> Result<ProcessingStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_reports));
        let output_dir = Arc::new(output_dir);
        let mut handles = Vec::with_capacity(sources.len());

        for (idx, raw) in sources.into_iter().enumerate() {
            let ctx = ReportCtx::new(idx + 1, ReportSource::detect(&raw));
            let permit = semaphore.clone().acquire_owned().await?;
            let client = self.client.clone();
            let flow = self.flow.clone();
            let output_dir = output_dir.clone();
            let log_file = self.config.output_log_file.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                let result = process_report(&client, &flow, &ctx, &output_dir).await;

                let line = match &result {
                    Ok(path) => format!("{} OK {} -> {}", ctx, ctx.source.as_str(), path.display()),
                    Err(e) => {
                        error!("{} ❌ 处理失败: {:#}", ctx, e);
                        format!("{} FAILED {}: {:#}", ctx, ctx.source.as_str(), e)
                    }
                };
                if let Err(e) = append_run_log(&log_file, &line) {
                    warn!("{} ⚠️ 写入运行日志失败: {}", ctx, e);
                }

                result.is_ok()
            });
            handles.push(handle);
        }

        let mut stats = ProcessingStats {
            total: handles.len(),
            ..Default::default()
        };

        for outcome in join_all(handles).await {
            match outcome {
                Ok(true) => stats.success += 1,
                Ok(false) => stats.failed += 1,
                Err(e) => {
                    error!("任务执行失败: {}", e);
                    stats.failed += 1;
                }
            }
        }

        info!("✓ 批处理结束: 成功 {}/{}", stats.success, stats.total);
        Ok(stats)
    }
}
