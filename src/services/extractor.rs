//! 结构抽取服务 - 业务能力层
//!
//! 只负责从文档树里把考生信息、分区、题目原始字段取出来，
//! 不判断对错、不计分。

use tracing::debug;

use crate::error::{AppResult, StructureError};
use crate::infrastructure::{MarkupDocument, MarkupNode};
use crate::models::{ParticipantRecord, QuestionStatus, RawQuestion};

const MAIN_INFO_PANEL: &str = "main-info-pnl";
const SECTION_CONTAINER: &str = "grp-cntnr";
const SECTION_LABEL: &str = "section-lbl";
const QUESTION_PANEL: &str = "question-pnl";
const ANSWER_TABLE: &str = "questionRowTbl";
const METADATA_TABLE: &str = "menu-tbl";
const RIGHT_ANSWER_CELL: &str = "rightAns";
const BOLD: &str = "bold";

const GIVEN_ANSWER_LABEL: &str = "Given Answer :";
const CHOSEN_OPTION_LABEL: &str = "Chosen Option :";
const UNKNOWN: &str = "Unknown";

/// 抽取出的分区（题目未判分）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub name: String,
    pub questions: Vec<RawQuestion>,
}

/// 抽取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReport {
    pub participant: ParticipantRecord,
    pub sections: Vec<RawSection>,
}

/// 从文档中抽取考生信息和所有分区
///
/// 报告级 / 分区级锚点缺失时返回 [`StructureError`]；
/// 单道题缺少答案表或元数据表时跳过该题。
pub fn extract<D: MarkupDocument>(document: &D) -> AppResult<ExtractedReport> {
    let root = document.root();

    let participant = extract_participant(root)?;
    debug!("考生信息字段数: {}", participant.len());

    let containers = root.find_all("div", Some(SECTION_CONTAINER));
    if containers.is_empty() {
        return Err(StructureError::NoSectionsFound.into());
    }

    let sections = containers
        .into_iter()
        .map(extract_section)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(ExtractedReport {
        participant,
        sections,
    })
}

fn extract_participant<'a, N: MarkupNode<'a>>(root: N) -> AppResult<ParticipantRecord> {
    let panel = root
        .find_first("div", Some(MAIN_INFO_PANEL))
        .ok_or(StructureError::MainInfoPanelNotFound)?;
    let table = panel
        .find_first("table", None)
        .ok_or(StructureError::ParticipantTableNotFound)?;

    let mut participant = ParticipantRecord::new();
    for row in table.find_all("tr", None) {
        let cells = row.find_all("td", None);
        if cells.len() < 2 {
            continue;
        }
        participant.insert(cells[0].text(), cells[1].text());
    }

    if participant.is_empty() {
        return Err(StructureError::NoParticipantDetails.into());
    }
    Ok(participant)
}

fn extract_section<'a, N: MarkupNode<'a>>(container: N) -> AppResult<RawSection> {
    let label = container
        .find_first("div", Some(SECTION_LABEL))
        .and_then(|lbl| lbl.find_first("span", Some(BOLD)))
        .ok_or(StructureError::SectionLabelNotFound)?;
    let name = label.text();

    let panels = container.find_all("div", Some(QUESTION_PANEL));
    let total_panels = panels.len();
    let questions: Vec<RawQuestion> = panels.into_iter().filter_map(extract_question).collect();

    if questions.len() < total_panels {
        debug!(
            "分区 [{}] 跳过 {} 个结构不完整的题目",
            name,
            total_panels - questions.len()
        );
    }
    debug!("分区 [{}] 抽取到 {} 道题", name, questions.len());

    Ok(RawSection { name, questions })
}

/// 抽取单道题；结构不完整时返回 `None`
fn extract_question<'a, N: MarkupNode<'a>>(panel: N) -> Option<RawQuestion> {
    let answer_table = panel.find_first("table", Some(ANSWER_TABLE))?;
    let metadata_table = panel.find_first("table", Some(METADATA_TABLE))?;

    let first_row = answer_table.find_first("tr", None)?;
    let number = first_row
        .find_first("td", Some(BOLD))
        .map(|td| td.text())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let id = labelled_value(metadata_table, "Question ID");
    let status = QuestionStatus::parse(&labelled_value(metadata_table, "Status"));

    let right_answer = answer_table
        .find_first("td", Some(RIGHT_ANSWER_CELL))
        .map(|td| td.text());

    let given_answer = answer_table
        .find_by_text("td", GIVEN_ANSWER_LABEL)
        .map(|label| label.find_next("td", None).map(|td| td.text()).unwrap_or_default());

    let chosen_option = metadata_table
        .find_by_text("td", CHOSEN_OPTION_LABEL)
        .and_then(|label| label.next_sibling("td"))
        .map(|td| td.text());

    Some(RawQuestion {
        number,
        id,
        status,
        answer_table_text: answer_table.raw_text(),
        right_answer,
        given_answer,
        chosen_option,
    })
}

/// 元数据表中文本包含 `label` 的行之后的第一个加粗单元格
fn labelled_value<'a, N: MarkupNode<'a>>(table: N, label: &str) -> String {
    table
        .find_row(|text| text.contains(label))
        .and_then(|row| row.find_next("td", Some(BOLD)))
        .map(|td| td.text())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
