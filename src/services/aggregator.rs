//! 统计汇总服务 - 业务能力层

use crate::models::{Question, QuestionStatus, ReportSummary, Section, SectionSummary};

/// 汇总单个分区
pub fn summarize_section(questions: &[Question], correct_points: i64) -> SectionSummary {
    let total_questions = questions.len();
    let correct = questions.iter().filter(|q| q.correct).count();
    let incorrect = questions
        .iter()
        .filter(|q| !q.correct && q.status == QuestionStatus::Answered)
        .count();
    let not_answered = questions.iter().filter(|q| q.status.is_not_answered()).count();

    SectionSummary {
        total_questions,
        correct,
        incorrect,
        not_answered,
        marks_scored: questions.iter().map(|q| q.marks).sum(),
        max_possible_marks: total_questions as i64 * correct_points,
        accuracy: accuracy(correct, total_questions),
    }
}

/// 汇总整份报告（各分区逐字段求和）
pub fn summarize_report(sections: &[Section]) -> ReportSummary {
    let mut summary = sections.iter().fold(ReportSummary::default(), |mut acc, section| {
        let s = &section.summary;
        acc.total_questions += s.total_questions;
        acc.correct += s.correct;
        acc.incorrect += s.incorrect;
        acc.not_answered += s.not_answered;
        acc.marks_scored += s.marks_scored;
        acc.max_possible_marks += s.max_possible_marks;
        acc
    });

    summary.answered = summary.correct + summary.incorrect;
    summary.overall_accuracy = accuracy(summary.correct, summary.total_questions);
    summary
}

/// 正确率百分比；题数为 0 时返回 0.0
pub fn accuracy(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    }
}
