//! Question/answer latency: keyed question index plus latency accumulator.

use crate::date::{latency_seconds, SECONDS_PER_DAY};
use ahash::AHashMap;
use anyhow::{bail, Result};
use time::PrimitiveDateTime;

/// Lookup table from question id to its creation date. Built once from all
/// Question-type posts, read-only afterwards; every answer queries it.
pub type QuestionIndex = AHashMap<String, PrimitiveDateTime>;

pub fn build_question_index(entries: &[(String, PrimitiveDateTime)]) -> QuestionIndex {
    let mut index = QuestionIndex::with_capacity(entries.len());
    for (id, date) in entries {
        index.insert(id.clone(), *date);
    }
    index
}

/// Running sum of matched answer latencies (seconds) and sample count.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatencyTotals {
    pub seconds: f64,
    pub samples: u64,
}

impl LatencyTotals {
    /// Match one answer against the index. Unmatched parents are expected in
    /// truncated dumps and contribute nothing. Negative latencies are kept
    /// (best-effort policy) but flagged as a data-quality signal.
    pub fn add_answer(
        &mut self,
        index: &QuestionIndex,
        parent_id: &str,
        answered_at: PrimitiveDateTime,
    ) {
        let Some(asked_at) = index.get(parent_id) else {
            return;
        };
        let secs = latency_seconds(*asked_at, answered_at);
        if secs < 0.0 {
            tracing::warn!(parent_id, seconds = secs, "answer predates its question");
        }
        self.seconds += secs;
        self.samples += 1;
    }

    pub fn merge(&mut self, other: Self) {
        self.seconds += other.seconds;
        self.samples += other.samples;
    }

    pub fn mean_days(&self) -> Result<f64> {
        if self.samples == 0 {
            bail!("no matched answers for latency computation");
        }
        Ok(self.seconds / self.samples as f64 / SECONDS_PER_DAY)
    }
}
