pub mod aggregator;
pub mod classifier;
pub mod extractor;
pub mod scorer;

pub use aggregator::{summarize_report, summarize_section};
pub use classifier::classify;
pub use extractor::{extract, ExtractedReport, RawSection};
pub use scorer::ScoringSession;
