use serde::{Deserialize, Serialize};

/// 计分方案
///
/// 默认值即 CAT 的 +4 / -1 / 0 规则。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringScheme {
    pub correct_points: i64,
    pub incorrect_points: i64,
    pub not_answered_points: i64,
    /// 这些分区内的题目一律按填空题计分
    pub short_answer_sections: Vec<String>,
    /// 当前题目没有标记正确选项时，沿用上一道题的正确选项
    pub carry_over_correct_option: bool,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            correct_points: 4,
            incorrect_points: -1,
            not_answered_points: 0,
            short_answer_sections: vec!["Quantitative Ability SA".to_string()],
            carry_over_correct_option: true,
        }
    }
}

impl ScoringScheme {
    pub fn is_short_answer_section(&self, section_name: &str) -> bool {
        self.short_answer_sections.iter().any(|s| s == section_name)
    }
}
