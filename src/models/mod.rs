pub mod loaders;
pub mod question;
pub mod report;
pub mod scoring;

pub use loaders::{load_scoring_scheme, parse_scoring_scheme};
pub use question::{AnswerDetail, Archetype, Question, QuestionStatus, RawQuestion};
pub use report::{AssessmentReport, ParticipantRecord, ReportSummary, Section, SectionSummary};
pub use scoring::ScoringScheme;
