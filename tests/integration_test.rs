use exam_report_scorer::models::{AnswerDetail, Archetype, QuestionStatus};
use exam_report_scorer::{parse, parse_with_scheme, AppError, ScoringScheme, StructureError};

const RESPONSE_SHEET: &str = include_str!("fixtures/cat_response_sheet.html");

fn section<'a>(
    report: &'a exam_report_scorer::AssessmentReport,
    name: &str,
) -> &'a exam_report_scorer::models::Section {
    report
        .sections
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("section {} missing", name))
}

#[test]
fn test_participant_details() {
    let report = parse(RESPONSE_SHEET).unwrap();

    let fields: Vec<_> = report.participant.iter().collect();
    assert_eq!(
        fields,
        vec![
            ("Candidate Name", "Asha Rao"),
            ("Roll No", "2401759"),
            ("Test Date", "24/11/2024"),
            ("Subject", "CAT 2024"),
        ]
    );
}

#[test]
fn test_sections_in_document_order() {
    let report = parse(RESPONSE_SHEET).unwrap();

    let names: Vec<_> = report.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Verbal Ability and Reading Comprehension",
            "Quantitative Ability SA",
            "Quantitative Ability",
            "Data Interpretation",
        ]
    );
}

#[test]
fn test_mixed_section_scoring() {
    let report = parse(RESPONSE_SHEET).unwrap();
    let varc = section(&report, "Verbal Ability and Reading Comprehension");

    // 结构不完整的 Q.X 被跳过
    let numbers: Vec<_> = varc.questions.iter().map(|q| q.number.as_str()).collect();
    assert_eq!(numbers, vec!["Q.1", "Q.2", "Q.3", "Q.4", "Q.5"]);

    let archetypes: Vec<_> = varc.questions.iter().map(|q| q.archetype).collect();
    assert_eq!(
        archetypes,
        vec![
            Archetype::Mcq,
            Archetype::Mcq,
            Archetype::ParagraphSequencing,
            Archetype::ParagraphSequencing,
            Archetype::Mcq,
        ]
    );

    let marks: Vec<_> = varc.questions.iter().map(|q| q.marks).collect();
    assert_eq!(marks, vec![4, -1, -1, 0, 0]);

    assert_eq!(
        varc.questions[0].answer,
        AnswerDetail::Choice {
            correct_option: Some("2".to_string()),
            chosen_option: Some("2".to_string()),
        }
    );
    assert_eq!(
        varc.questions[2].answer,
        AnswerDetail::Keyed {
            possible_answer: "2431".to_string(),
            given_answer: "2413".to_string(),
        }
    );
    assert_eq!(
        varc.questions[4].answer,
        AnswerDetail::Choice {
            correct_option: Some("4".to_string()),
            chosen_option: None,
        }
    );

    let s = &varc.summary;
    assert_eq!(s.total_questions, 5);
    assert_eq!(s.correct, 1);
    assert_eq!(s.incorrect, 2);
    assert_eq!(s.not_answered, 2);
    assert_eq!(s.marks_scored, 2);
    assert_eq!(s.max_possible_marks, 20);
    assert!((s.accuracy - 20.0).abs() < 1e-9);
}

#[test]
fn test_short_answer_section_never_deducts() {
    let report = parse(RESPONSE_SHEET).unwrap();
    let qa_sa = section(&report, "Quantitative Ability SA");

    // Q.9 缺少 "Given Answer :" 行，不出现在结果中
    let numbers: Vec<_> = qa_sa.questions.iter().map(|q| q.number.as_str()).collect();
    assert_eq!(numbers, vec!["Q.6", "Q.7", "Q.8"]);
    assert!(qa_sa.questions.iter().all(|q| q.archetype == Archetype::ShortAnswer));

    let wrong = &qa_sa.questions[0];
    assert_eq!(wrong.status, QuestionStatus::Answered);
    assert!(!wrong.correct);
    assert_eq!(wrong.marks, 0);

    assert!(qa_sa.questions[1].correct);
    assert_eq!(qa_sa.questions[1].marks, 4);

    let skipped = &qa_sa.questions[2];
    assert_eq!(skipped.status, QuestionStatus::NotAttemptedMarkedForReview);
    assert_eq!(
        skipped.answer,
        AnswerDetail::Keyed {
            possible_answer: "7".to_string(),
            given_answer: String::new(),
        }
    );
    assert_eq!(skipped.marks, 0);

    let s = &qa_sa.summary;
    assert_eq!((s.correct, s.incorrect, s.not_answered), (1, 1, 1));
    assert_eq!(s.marks_scored, 4);
    assert_eq!(s.max_possible_marks, 12);
}

#[test]
fn test_missing_right_answer_reuses_previous_option() {
    let report = parse(RESPONSE_SHEET).unwrap();
    let qa = section(&report, "Quantitative Ability");

    let carried = &qa.questions[1];
    assert_eq!(carried.number, "Q.11");
    assert_eq!(
        carried.answer,
        AnswerDetail::Choice {
            correct_option: Some("3".to_string()),
            chosen_option: Some("3".to_string()),
        }
    );
    assert!(carried.correct);
    assert_eq!(carried.marks, 4);

    // 状态不是 Answered 的错题扣分，但不计入 incorrect
    let reviewed = &qa.questions[2];
    assert_eq!(reviewed.status.as_str(), "Answered and Marked For Review");
    assert_eq!(reviewed.marks, -1);
    assert_eq!(qa.summary.incorrect, 0);
    assert_eq!(qa.summary.marks_scored, 7);
}

#[test]
fn test_carry_over_disabled() {
    let scheme = ScoringScheme {
        carry_over_correct_option: false,
        ..ScoringScheme::default()
    };
    let report = parse_with_scheme(RESPONSE_SHEET, &scheme).unwrap();
    let qa = section(&report, "Quantitative Ability");

    let q11 = &qa.questions[1];
    assert_eq!(
        q11.answer,
        AnswerDetail::Choice {
            correct_option: None,
            chosen_option: Some("3".to_string()),
        }
    );
    assert_eq!(q11.marks, -1);
    assert_eq!(report.summary.marks_scored, 8);
    assert_eq!(report.summary.correct, 3);
}

#[test]
fn test_empty_section_summary() {
    let report = parse(RESPONSE_SHEET).unwrap();
    let di = section(&report, "Data Interpretation");

    assert!(di.questions.is_empty());
    assert_eq!(di.summary.total_questions, 0);
    assert_eq!(di.summary.marks_scored, 0);
    assert_eq!(di.summary.max_possible_marks, 0);
    assert_eq!(di.summary.accuracy, 0.0);
}

#[test]
fn test_report_summary_is_sum_of_sections() {
    let report = parse(RESPONSE_SHEET).unwrap();
    let s = &report.summary;

    assert_eq!(s.total_questions, 11);
    assert_eq!(s.correct, 4);
    assert_eq!(s.incorrect, 3);
    assert_eq!(s.answered, s.correct + s.incorrect);
    assert_eq!(s.not_answered, 3);
    assert_eq!(s.marks_scored, 13);
    assert_eq!(s.max_possible_marks, 44);
    assert!((s.overall_accuracy - 4.0 / 11.0 * 100.0).abs() < 1e-9);

    let section_marks: i64 = report.sections.iter().map(|sec| sec.summary.marks_scored).sum();
    let question_marks: i64 = report
        .sections
        .iter()
        .flat_map(|sec| sec.questions.iter())
        .map(|q| q.marks)
        .sum();
    assert_eq!(s.marks_scored, section_marks);
    assert_eq!(s.marks_scored, question_marks);

    for sec in &report.sections {
        assert_eq!(sec.summary.total_questions, sec.questions.len());
        assert_eq!(sec.summary.max_possible_marks, sec.questions.len() as i64 * 4);
    }
}

#[test]
fn test_parse_is_deterministic() {
    let first = serde_json::to_string(&parse(RESPONSE_SHEET).unwrap()).unwrap();
    let second = serde_json::to_string(&parse(RESPONSE_SHEET).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_shape() {
    let report = parse(RESPONSE_SHEET).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["participant"]["Roll No"], "2401759");
    let first = &json["sections"][0]["questions"][0];
    assert_eq!(first["question_number"], "Q.1");
    assert_eq!(first["question_id"], "6420811001");
    assert_eq!(first["status"], "Answered");
    assert_eq!(first["archetype"], "mcq");
    assert_eq!(first["correct_option"], "2");
    assert_eq!(first["marks"], 4);

    let sequencing = &json["sections"][0]["questions"][2];
    assert_eq!(sequencing["archetype"], "paragraph_sequencing");
    assert_eq!(sequencing["possible_answer"], "2431");
    assert_eq!(json["summary"]["answered"], 7);
}

#[test]
fn test_document_without_participant_panel() {
    let html = RESPONSE_SHEET.replace("main-info-pnl", "info-panel");

    match parse(&html) {
        Err(AppError::Structure(StructureError::MainInfoPanelNotFound)) => {}
        other => panic!("expected MainInfoPanelNotFound, got {:?}", other),
    }
    let err = parse(&html).unwrap_err();
    assert_eq!(err.to_string(), "Parsing error: main info panel not found");
}

#[test]
fn test_document_without_sections() {
    let html = RESPONSE_SHEET.replace("grp-cntnr", "group");

    match parse(&html) {
        Err(AppError::Structure(StructureError::NoSectionsFound)) => {}
        other => panic!("expected NoSectionsFound, got {:?}", other),
    }
}
