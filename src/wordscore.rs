//! Accumulators and finalizers for the word/score mean and Pearson passes.
//!
//! Both accumulators are associative and commutative under `merge`, so chunk
//! partials can be folded in any order. `WordScoreTotals` carries an explicit
//! valid-sample counter as the divisor; the divisor therefore cannot drift
//! with the fold topology (seeded vs unseeded, per-chunk vs global).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Running totals for the mean pass: Σwords, Σscore, and the number of posts
/// that actually produced a (words, score) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScoreTotals {
    pub words: u64,
    pub score: i64,
    pub samples: u64,
}

impl WordScoreTotals {
    pub fn add_sample(&mut self, words: u64, score: i64) {
        self.words += words;
        self.score += score;
        self.samples += 1;
    }

    pub fn merge(&mut self, other: Self) {
        self.words += other.words;
        self.score += other.score;
        self.samples += other.samples;
    }

    pub fn means(&self) -> Result<Means> {
        if self.samples == 0 {
            bail!("no valid posts for word/score mean computation");
        }
        Ok(Means {
            words: self.words as f64 / self.samples as f64,
            score: self.score as f64 / self.samples as f64,
        })
    }
}

/// Output of the mean pass; input to the correlation pass. Passing this in
/// explicitly (rather than through shared state) is what sequences the two
/// passes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Means {
    pub words: f64,
    pub score: f64,
}

/// Running deviation sums for the correlation pass:
/// Σ Δw·Δs, Σ Δw², Σ Δs² where Δ is the deviation from the precomputed means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PearsonSums {
    pub dw_ds: f64,
    pub dw_sq: f64,
    pub ds_sq: f64,
}

impl PearsonSums {
    pub fn add_sample(&mut self, words: u64, score: i64, means: Means) {
        let dw = words as f64 - means.words;
        let ds = score as f64 - means.score;
        self.dw_ds += dw * ds;
        self.dw_sq += dw * dw;
        self.ds_sq += ds * ds;
    }

    pub fn merge(&mut self, other: Self) {
        self.dw_ds += other.dw_ds;
        self.dw_sq += other.dw_sq;
        self.ds_sq += other.ds_sq;
    }

    /// r = Σ(Δw·Δs) / sqrt(Σ Δw² · Σ Δs²). A degenerate dataset (every word
    /// count or every score identical) is a reported error, never a NaN.
    pub fn coefficient(&self) -> Result<f64> {
        let denom = (self.dw_sq * self.ds_sq).sqrt();
        if denom == 0.0 {
            bail!("degenerate word/score distribution: zero variance on at least one axis");
        }
        Ok(self.dw_ds / denom)
    }
}
