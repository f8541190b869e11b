//! 报告解析流程 - 流程层
//!
//! 核心职责：定义"一份报告"的完整处理流程
//!
//! 流程顺序：
//! 1. 结构抽取（考生信息 + 分区 + 原始题目）
//! 2. 逐题识别题型并计分
//! 3. 分区汇总 → 报告汇总

use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::{HtmlDocument, MarkupDocument};
use crate::models::{AssessmentReport, ScoringScheme, Section};
use crate::services::{classify, extract, summarize_report, summarize_section, ScoringSession};

/// 报告解析流程
///
/// - 同步、无共享状态，可在多个任务中并发使用
/// - 单选题的沿用状态只存在于一次 `run` 调用内
pub struct ReportFlow {
    scheme: ScoringScheme,
}

impl ReportFlow {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &ScoringScheme {
        &self.scheme
    }

    /// 解析原始 HTML 文本
    pub fn parse(&self, document_text: &str) -> AppResult<AssessmentReport> {
        self.run(&HtmlDocument::parse(document_text))
    }

    /// 对任意文档树执行完整流程
    pub fn run<D: MarkupDocument>(&self, document: &D) -> AppResult<AssessmentReport> {
        let extracted = extract(document)?;
        let mut session = ScoringSession::new(&self.scheme);

        let sections: Vec<Section> = extracted
            .sections
            .into_iter()
            .map(|raw_section| {
                let questions: Vec<_> = raw_section
                    .questions
                    .iter()
                    .filter_map(|raw| {
                        let archetype = classify(&self.scheme, &raw_section.name, raw);
                        session.score(raw, archetype)
                    })
                    .collect();

                let summary = summarize_section(&questions, self.scheme.correct_points);
                debug!(
                    "分区 [{}] 计分完成: {}/{} 分",
                    raw_section.name, summary.marks_scored, summary.max_possible_marks
                );

                Section {
                    name: raw_section.name,
                    questions,
                    summary,
                }
            })
            .collect();

        let summary = summarize_report(&sections);

        Ok(AssessmentReport {
            participant: extracted.participant,
            sections,
            summary,
        })
    }
}

impl Default for ReportFlow {
    fn default() -> Self {
        Self::new(ScoringScheme::default())
    }
}
