pub mod scoring_loader;

pub use scoring_loader::{load_scoring_scheme, parse_scoring_scheme};
