use serde::{Serialize, Serializer};
use std::fmt;

/// 题目作答状态
///
/// 报告页里是自由文本，已知取值之外的原样保留。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuestionStatus {
    Answered,
    NotAnswered,
    NotAttemptedMarkedForReview,
    Unknown,
    Other(String),
}

impl QuestionStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Answered" => Self::Answered,
            "Not Answered" => Self::NotAnswered,
            "Not Attempted and Marked For Review" => Self::NotAttemptedMarkedForReview,
            "Unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Answered => "Answered",
            Self::NotAnswered => "Not Answered",
            Self::NotAttemptedMarkedForReview => "Not Attempted and Marked For Review",
            Self::Unknown => "Unknown",
            Self::Other(raw) => raw,
        }
    }

    /// 是否计入未作答
    pub fn is_not_answered(&self) -> bool {
        matches!(self, Self::NotAnswered | Self::NotAttemptedMarkedForReview)
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for QuestionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// 题型（决定使用哪套计分规则）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// 单选题
    Mcq,
    /// 数量能力填空题（由分区名决定）
    ShortAnswer,
    /// 段落排序题（由 "Possible Answer" 文本识别）
    ParagraphSequencing,
}

/// 抽取阶段得到的原始题目字段，尚未判分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuestion {
    pub number: String,
    pub id: String,
    pub status: QuestionStatus,
    /// 答案表的完整文本
    pub answer_table_text: String,
    /// 第一个 `td.rightAns` 的文本（已 trim）
    pub right_answer: Option<String>,
    /// `Given Answer :` 单元格之后的文本；`None` 表示没有该单元格
    pub given_answer: Option<String>,
    /// `Chosen Option :` 之后的文本；`None` 表示元数据表里没有该行
    pub chosen_option: Option<String>,
}

/// 各题型特有的答案字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerDetail {
    Choice {
        correct_option: Option<String>,
        chosen_option: Option<String>,
    },
    Keyed {
        possible_answer: String,
        given_answer: String,
    },
}

/// 已判分的题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    #[serde(rename = "question_number")]
    pub number: String,
    #[serde(rename = "question_id")]
    pub id: String,
    pub status: QuestionStatus,
    pub archetype: Archetype,
    #[serde(flatten)]
    pub answer: AnswerDetail,
    pub correct: bool,
    pub marks: i64,
}
