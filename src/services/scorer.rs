//! 计分服务 - 业务能力层
//!
//! 每种题型一套独立的计分规则：
//! - 填空题（分区覆盖）：答错与未答同分，不扣分
//! - 段落排序题：答错扣分，`--` 或 `Not Answered` 不扣分
//! - 单选题：答错扣分，未选不扣分
//!
//! 填空题和段落排序题字段相同但规则不同，两者刻意分开实现。

use tracing::debug;

use crate::models::{AnswerDetail, Archetype, Question, QuestionStatus, RawQuestion, ScoringScheme};

const POSSIBLE_ANSWER_PREFIX: &str = "Possible Answer:";
const NO_RESPONSE: &str = "--";

/// 一次解析内的计分会话
///
/// 持有单选题"沿用上一题正确选项"的状态，生命周期与一次解析相同。
pub struct ScoringSession<'s> {
    scheme: &'s ScoringScheme,
    carried_correct_option: Option<String>,
}

impl<'s> ScoringSession<'s> {
    pub fn new(scheme: &'s ScoringScheme) -> Self {
        Self {
            scheme,
            carried_correct_option: None,
        }
    }

    /// 为一道题计分；缺少必需单元格的填空 / 排序题返回 `None`
    pub fn score(&mut self, raw: &RawQuestion, archetype: Archetype) -> Option<Question> {
        if archetype != Archetype::ShortAnswer {
            self.track_correct_option(raw);
        }

        let (answer, correct, marks) = match archetype {
            Archetype::ShortAnswer => {
                let (possible, given) = keyed_answer(raw)?;
                let correct = possible == given;
                let marks = self.short_answer_marks(correct);
                (keyed(possible, given), correct, marks)
            }
            Archetype::ParagraphSequencing => {
                let (possible, given) = keyed_answer(raw)?;
                let correct = possible == given;
                let marks = self.paragraph_sequencing_marks(correct, &raw.status, &given);
                (keyed(possible, given), correct, marks)
            }
            Archetype::Mcq => {
                let correct_option = self.carried_correct_option.clone();
                let chosen_option = raw
                    .chosen_option
                    .clone()
                    .filter(|chosen| chosen != NO_RESPONSE);
                let correct = matches!(
                    (&correct_option, &chosen_option),
                    (Some(right), Some(chosen)) if right == chosen
                );
                let marks = self.multiple_choice_marks(correct, chosen_option.is_some());
                (
                    AnswerDetail::Choice {
                        correct_option,
                        chosen_option,
                    },
                    correct,
                    marks,
                )
            }
        };

        debug!(
            "题目 {} ({:?}) 状态: {} 正确: {} 得分: {}",
            raw.number, archetype, raw.status, correct, marks
        );

        Some(Question {
            number: raw.number.clone(),
            id: raw.id.clone(),
            status: raw.status.clone(),
            archetype,
            answer,
            correct,
            marks,
        })
    }

    /// 更新沿用的正确选项（段落排序题同样会更新）
    fn track_correct_option(&mut self, raw: &RawQuestion) {
        match raw.right_answer.as_deref() {
            Some(cell) => self.carried_correct_option = Some(option_label(cell)),
            None if !self.scheme.carry_over_correct_option => self.carried_correct_option = None,
            None => {}
        }
    }

    /// 填空题：只有答对得分，答错与未答同分
    fn short_answer_marks(&self, correct: bool) -> i64 {
        if correct {
            self.scheme.correct_points
        } else {
            self.scheme.not_answered_points
        }
    }

    fn paragraph_sequencing_marks(&self, correct: bool, status: &QuestionStatus, given: &str) -> i64 {
        if correct {
            self.scheme.correct_points
        } else if *status == QuestionStatus::NotAnswered || given == NO_RESPONSE {
            self.scheme.not_answered_points
        } else {
            self.scheme.incorrect_points
        }
    }

    fn multiple_choice_marks(&self, correct: bool, has_choice: bool) -> i64 {
        if correct {
            self.scheme.correct_points
        } else if !has_choice {
            self.scheme.not_answered_points
        } else {
            self.scheme.incorrect_points
        }
    }
}

fn keyed(possible_answer: String, given_answer: String) -> AnswerDetail {
    AnswerDetail::Keyed {
        possible_answer,
        given_answer,
    }
}

/// 取出 (参考答案, 考生答案)；任一单元格缺失返回 `None`
fn keyed_answer(raw: &RawQuestion) -> Option<(String, String)> {
    let right = raw.right_answer.as_deref()?;
    let given = raw.given_answer.as_deref()?;
    let possible = right.replacen(POSSIBLE_ANSWER_PREFIX, "", 1).trim().to_string();
    Some((possible, given.trim().to_string()))
}

/// `"2. beta"` -> `"2"`
fn option_label(cell: &str) -> String {
    cell.split('.').next().unwrap_or_default().trim().to_string()
}
