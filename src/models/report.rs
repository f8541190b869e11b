use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::question::Question;

/// 考生信息（保持插入顺序的键值表）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantRecord {
    fields: Vec<(String, String)>,
}

impl ParticipantRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入字段；同名字段原位覆盖
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

impl Serialize for ParticipantRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// 分区统计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionSummary {
    pub total_questions: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub not_answered: usize,
    pub marks_scored: i64,
    pub max_possible_marks: i64,
    pub accuracy: f64,
}

/// 整份报告统计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_questions: usize,
    pub answered: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub not_answered: usize,
    pub marks_scored: i64,
    pub max_possible_marks: i64,
    pub overall_accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub questions: Vec<Question>,
    pub summary: SectionSummary,
}

/// 解析结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub participant: ParticipantRecord,
    pub sections: Vec<Section>,
    pub summary: ReportSummary,
}
