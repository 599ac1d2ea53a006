//! Field extractors: pure per-record functions that pull one typed value out
//! of a `Post`, or `None` when the record does not apply to a statistic.
//! A `None` is a no-op contribution to the fold, so a record missing an
//! attribute (or failing a conversion) is excluded from that statistic only.

use crate::date::parse_creation_date;
use crate::post::{Post, PostType};
use regex::Regex;
use time::PrimitiveDateTime;

/// Body word counter. A word is a whitespace-bounded run of letters,
/// optionally colon-suffixed ("note:" counts, "3rd" and "a-b" do not).
pub struct WordCounter {
    token: Regex,
}

impl WordCounter {
    pub fn new() -> Self {
        Self {
            token: Regex::new(r"^[A-Za-z]+:?$").unwrap(),
        }
    }

    pub fn count(&self, body: &str) -> u64 {
        body.split_whitespace().filter(|t| self.token.is_match(t)).count() as u64
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// `<a><b><c>` → `["a", "b", "c"]`, normalized to lowercase.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.trim_start_matches('<')
        .trim_end_matches('>')
        .split("><")
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
        .collect()
}

/// Tag list for the top-tags statistic. Only posts carrying an accepted-answer
/// marker and a non-empty `Tags` attribute participate.
pub fn accepted_tags(post: &Post) -> Option<Vec<String>> {
    if !post.has_accepted_answer {
        return None;
    }
    let raw = post.tags.as_deref()?;
    if raw.is_empty() {
        return None;
    }
    Some(parse_tag_list(raw))
}

/// `(word count, score)` for the mean/correlation statistics. Posts missing
/// either attribute are skipped entirely; they never contribute a zero.
pub fn word_score(post: &Post, words: &WordCounter) -> Option<(u64, i64)> {
    let body = post.body.as_deref()?;
    let raw_score = post.score.as_deref()?;
    let score: i64 = match raw_score.parse() {
        Ok(s) => s,
        Err(_) => {
            tracing::debug!(id = ?post.id, raw_score, "skipping post with unparsable Score");
            return None;
        }
    };
    Some((words.count(body), score))
}

/// `(id, creationDate)` for Question-type posts.
pub fn question_entry(post: &Post) -> Option<(String, PrimitiveDateTime)> {
    if post.post_type != Some(PostType::Question) {
        return None;
    }
    let id = post.id.as_deref()?;
    let raw = post.creation_date.as_deref()?;
    match parse_creation_date(raw) {
        Some(dt) => Some((id.to_string(), dt)),
        None => {
            tracing::debug!(id, raw, "skipping question with unparsable CreationDate");
            None
        }
    }
}

/// `(parentId, creationDate)` for Answer-type posts.
pub fn answer_entry(post: &Post) -> Option<(String, PrimitiveDateTime)> {
    if post.post_type != Some(PostType::Answer) {
        return None;
    }
    let parent_id = post.parent_id.as_deref()?;
    let raw = post.creation_date.as_deref()?;
    match parse_creation_date(raw) {
        Some(dt) => Some((parent_id.to_string(), dt)),
        None => {
            tracing::debug!(parent_id, raw, "skipping answer with unparsable CreationDate");
            None
        }
    }
}
