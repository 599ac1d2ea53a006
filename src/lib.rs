mod chunk;
mod concurrency;
mod config;
mod date;
mod extract;
mod latency;
mod pipeline;
mod post;
mod progress;
mod tags;
mod util;
mod wordscore;
mod xml_posts;

pub use crate::config::AnalyzerOptions;
pub use crate::pipeline::{write_report_json, AnalysisReport, PostAnalyzer, QuestionDate};
pub use crate::post::{Post, PostType};
pub use crate::xml_posts::{load_posts, parse_posts};

pub use crate::latency::{build_question_index, LatencyTotals, QuestionIndex};
pub use crate::wordscore::{Means, PearsonSums, WordScoreTotals};

// Expose the chunking/extraction primitives so callers can assemble custom passes.
pub use crate::chunk::{chunk_count, chunks};
pub use crate::concurrency::map_chunks_limited;
pub use crate::extract::{accepted_tags, answer_entry, parse_tag_list, question_entry, word_score, WordCounter};
pub use crate::tags::top_tags;

// Expose multiprogress helpers.
pub use crate::progress::{make_count_progress, set_global_multiprogress};

// Date helpers used by extraction and by test fixtures.
pub use crate::date::{latency_seconds, parse_creation_date, SECONDS_PER_DAY};
