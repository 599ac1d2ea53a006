use postats::{Post, PostAnalyzer};

/// Deterministic LCG so the synthetic corpus is reproducible without pulling
/// in a randomness dependency.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn synthetic_posts(seed: u64, n: usize) -> Vec<Post> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            let words = (rng.next() % 40) as usize;
            let score = (rng.next() % 101) as i64 - 50;
            let body = vec!["alpha"; words].join(" ");
            Post {
                body: Some(body),
                score: Some(score.to_string()),
                ..Default::default()
            }
        })
        .collect()
}

/// The Pearson coefficient for any non-degenerate input lies in [-1, 1];
/// a value outside that range signals an upstream computation defect.
#[test]
fn coefficient_stays_within_unit_interval() {
    let analyzer = PostAnalyzer::new().progress(false);
    for seed in 1..=20u64 {
        let posts = synthetic_posts(seed, 500);
        let r = analyzer.word_score_correlation(&posts).unwrap();
        assert!(
            (-1.0..=1.0).contains(&r),
            "seed {seed}: coefficient {r} out of range"
        );
    }
}

#[test]
fn coefficient_is_stable_across_repeat_runs() {
    let analyzer = PostAnalyzer::new().progress(false);
    let posts = synthetic_posts(42, 300);
    let first = analyzer.word_score_correlation(&posts).unwrap();
    for _ in 0..3 {
        let again = analyzer.word_score_correlation(&posts).unwrap();
        assert_eq!(again.to_bits(), first.to_bits());
    }
}
