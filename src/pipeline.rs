use crate::chunk::chunk_count;
use crate::concurrency::map_chunks_limited;
use crate::config::AnalyzerOptions;
use crate::extract::{accepted_tags, answer_entry, question_entry, word_score, WordCounter};
use crate::latency::{build_question_index, LatencyTotals, QuestionIndex};
use crate::post::Post;
use crate::progress::make_count_progress;
use crate::util::init_tracing_once;
use crate::wordscore::{Means, PearsonSums, WordScoreTotals};
use crate::xml_posts::load_posts;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use time::macros::format_description;
use time::PrimitiveDateTime;

/// Analytics pipeline over a parsed post sequence. Each statistic is an
/// independent chunked map-reduce pass; the orchestrator sequences the two
/// dependent stages (means before correlation, question index before the
/// answer join) and merges partials in submission order.
#[derive(Clone)]
pub struct PostAnalyzer {
    pub(crate) opts: AnalyzerOptions,
}

/// One entry of the question-date statistic, dates re-rendered for reporting.
#[derive(Clone, Debug, Serialize)]
pub struct QuestionDate {
    pub id: String,
    pub creation_date: String,
}

/// Structured result of a full run. Failed statistics stay `None`; their
/// error is logged, and every other statistic is still computed.
#[derive(Debug, Default, Serialize)]
pub struct AnalysisReport {
    pub post_count: usize,
    pub top_tags: Vec<(String, u64)>,
    pub pearson: Option<f64>,
    pub questions: Vec<QuestionDate>,
    pub mean_answer_latency_days: Option<f64>,
}

fn format_creation_date(dt: PrimitiveDateTime) -> String {
    let fmt = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    dt.format(fmt).unwrap_or_else(|_| dt.to_string())
}

impl PostAnalyzer {
    pub fn new() -> Self {
        Self { opts: AnalyzerOptions::default() }
    }

    // -------- Builder methods --------
    pub fn chunk_size(mut self, size: usize) -> Self { self.opts = self.opts.with_chunk_size(size); self }
    pub fn workers(mut self, n: usize) -> Self { self.opts = self.opts.with_workers(n); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }

    fn pass_label(&self, name: &str) -> String {
        match self.opts.progress_label.as_deref() {
            Some(l) => format!("{l}: {name}"),
            None => name.to_string(),
        }
    }

    /// One chunked pass: map `f` over chunks with bounded parallelism,
    /// partials returned in chunk order.
    fn run_pass<R, F>(&self, posts: &[Post], name: &str, f: F) -> Vec<R>
    where
        R: Send,
        F: Sync + Fn(&[Post]) -> R,
    {
        let total = chunk_count(posts.len(), self.opts.chunk_size) as u64;
        let pb = if self.opts.progress {
            Some(make_count_progress(total, &self.pass_label(name)))
        } else {
            None
        };
        let partials = map_chunks_limited(posts, self.opts.chunk_size, self.opts.workers, |chunk| {
            let r = f(chunk);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            r
        });
        if let Some(pb) = pb {
            pb.finish_with_message(format!("{name} done"));
        }
        partials
    }

    // -------- The four statistics --------

    /// Top-`n` tags over posts that carry an accepted answer. Per-chunk
    /// partials are flat tag lists; the global merge concatenates them in
    /// chunk order so the count tie-break stays stable.
    pub fn top_tags(&self, posts: &[Post], n: usize) -> Vec<(String, u64)> {
        let partials = self.run_pass(posts, "Top tags", |chunk| {
            chunk
                .iter()
                .filter_map(accepted_tags)
                .flatten()
                .collect::<Vec<String>>()
        });
        let flat: Vec<String> = partials.into_iter().flatten().collect();
        crate::tags::top_tags(&flat, n)
    }

    /// Mean pass: Σwords, Σscore and the explicit valid-sample count.
    pub fn word_score_totals(&self, posts: &[Post]) -> WordScoreTotals {
        let words = WordCounter::new();
        let partials = self.run_pass(posts, "Word/score totals", |chunk| {
            let mut acc = WordScoreTotals::default();
            for post in chunk {
                if let Some((w, s)) = word_score(post, &words) {
                    acc.add_sample(w, s);
                }
            }
            acc
        });
        let mut total = WordScoreTotals::default();
        for part in partials {
            total.merge(part);
        }
        total
    }

    /// Correlation pass. Requires the means from a completed mean pass; the
    /// extractor receives them as an explicit input, never via shared state.
    pub fn pearson(&self, posts: &[Post], means: Means) -> Result<f64> {
        let words = WordCounter::new();
        let partials = self.run_pass(posts, "Pearson sums", |chunk| {
            let mut acc = PearsonSums::default();
            for post in chunk {
                if let Some((w, s)) = word_score(post, &words) {
                    acc.add_sample(w, s, means);
                }
            }
            acc
        });
        let mut total = PearsonSums::default();
        for part in partials {
            total.merge(part);
        }
        total.coefficient()
    }

    /// Both stages of the correlation statistic: means first, then the
    /// deviation sums seeded with them.
    pub fn word_score_correlation(&self, posts: &[Post]) -> Result<f64> {
        let means = self.word_score_totals(posts).means()?;
        self.pearson(posts, means)
    }

    /// `(id, creationDate)` for every question, in original post order.
    pub fn question_dates(&self, posts: &[Post]) -> Vec<(String, PrimitiveDateTime)> {
        self.run_pass(posts, "Question dates", |chunk| {
            chunk.iter().filter_map(question_entry).collect::<Vec<_>>()
        })
        .into_iter()
        .flatten()
        .collect()
    }

    /// Join every answer against the question index and average the matched
    /// latencies. The index pass must be complete before this runs.
    pub fn mean_answer_latency_days(&self, posts: &[Post], index: &QuestionIndex) -> Result<f64> {
        let partials = self.run_pass(posts, "Answer latency", |chunk| {
            let mut acc = LatencyTotals::default();
            for post in chunk {
                if let Some((parent_id, answered_at)) = answer_entry(post) {
                    acc.add_answer(index, &parent_id, answered_at);
                }
            }
            acc
        });
        let mut total = LatencyTotals::default();
        for part in partials {
            total.merge(part);
        }
        total.mean_days()
    }

    // -------- Full runs --------

    /// Parse the dump (best-effort) and compute all four statistics.
    pub fn analyze(&self, path: &Path) -> AnalysisReport {
        init_tracing_once();
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.opts.workers)
            .build_global()
            .ok();
        let posts = load_posts(path);
        self.analyze_posts(&posts)
    }

    /// Compute all four statistics over an already-loaded post sequence.
    /// A failed statistic is logged and left out of the report; the others
    /// still run.
    pub fn analyze_posts(&self, posts: &[Post]) -> AnalysisReport {
        init_tracing_once();
        let mut report = AnalysisReport {
            post_count: posts.len(),
            ..Default::default()
        };

        report.top_tags = self.top_tags(posts, 10);
        tracing::info!("Top 10 tags by frequency: {:?}", report.top_tags);

        match self.word_score_correlation(posts) {
            Ok(r) => {
                tracing::info!("Pearson coefficient between body word count and score: {r}");
                report.pearson = Some(r);
            }
            Err(e) => tracing::error!(error = %e, "word/score correlation failed"),
        }

        let questions = self.question_dates(posts);
        tracing::info!("Collected creation dates for {} questions", questions.len());
        let index = build_question_index(&questions);
        report.questions = questions
            .into_iter()
            .map(|(id, date)| QuestionDate {
                id,
                creation_date: format_creation_date(date),
            })
            .collect();

        match self.mean_answer_latency_days(posts, &index) {
            Ok(days) => {
                tracing::info!("Mean question-to-answer latency: {days} days");
                report.mean_answer_latency_days = Some(days);
            }
            Err(e) => tracing::error!(error = %e, "answer latency computation failed"),
        }

        report
    }
}

impl Default for PostAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a report as pretty JSON.
pub fn write_report_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, report)?;
    w.flush()?;
    Ok(())
}
