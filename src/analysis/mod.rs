//! Deterministic revision analytics: tokenization, similarity, marker
//! counting, section diffing, and the aggregator that ties them together.

pub mod markers;
pub mod revision;
pub mod section_diff;
pub mod similarity;
pub mod tokenize;

pub use revision::RevisionAnalyzer;
pub use section_diff::{diff_snapshots, most_revised_sections, split_sections, SectionChange};
pub use similarity::{jaccard_similarity, THESIS_DRIFT_THRESHOLD};
pub use tokenize::{first_sentence, tokenize, word_count};
