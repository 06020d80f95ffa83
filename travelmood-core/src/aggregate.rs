use crate::types::{Post, Sentiment, SentimentStats};
use tracing::debug;

/// Counts posts per label and derives the percentage share of each.
///
/// A full recomputation over the given posts: nothing is cached, so calling
/// it twice on an unmodified store yields identical stats. An empty input
/// yields zero counts and 0.0 percentages rather than dividing by zero.
pub fn aggregate(posts: &[Post]) -> SentimentStats {
    let total = posts.len();
    let mut positive = 0;
    let mut negative = 0;
    let mut neutral = 0;

    for post in posts {
        match post.sentiment {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => neutral += 1,
        }
    }

    let pct = |count: usize| {
        if total == 0 {
            0.0
        } else {
            round1(count as f64 / total as f64 * 100.0)
        }
    };

    let stats = SentimentStats {
        total,
        positive,
        negative,
        neutral,
        positive_pct: pct(positive),
        negative_pct: pct(negative),
        neutral_pct: pct(neutral),
    };
    debug!(
        "Aggregated {} posts: {}/{}/{} ({}% / {}% / {}%)",
        stats.total,
        stats.positive,
        stats.negative,
        stats.neutral,
        stats.positive_pct,
        stats.negative_pct,
        stats.neutral_pct
    );
    stats
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
