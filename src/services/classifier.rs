//! 题型识别 - 业务能力层

use crate::models::{Archetype, RawQuestion, ScoringScheme};

const PARAGRAPH_SEQUENCING_MARKER: &str = "Possible Answer";

/// 判定题型
///
/// 优先级：分区名覆盖 > 答案表中出现 "Possible Answer" > 单选题。
pub fn classify(scheme: &ScoringScheme, section_name: &str, question: &RawQuestion) -> Archetype {
    if scheme.is_short_answer_section(section_name) {
        Archetype::ShortAnswer
    } else if question.answer_table_text.contains(PARAGRAPH_SEQUENCING_MARKER) {
        Archetype::ParagraphSequencing
    } else {
        Archetype::Mcq
    }
}
