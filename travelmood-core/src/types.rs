use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used for every post and snapshot timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified social-media item. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub text: String,
    pub sentiment: Sentiment,
    pub score: i32,
    pub platform: String,
    pub timestamp: String,
    pub keywords: Vec<String>,
}

/// A post before the store has assigned its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub text: String,
    pub sentiment: Sentiment,
    pub score: i32,
    pub platform: String,
    pub timestamp: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub sender: ChatSender,
    pub message: String,
}

/// Per-label counts and percentages, recomputed from the store on every read.
///
/// Percentages are rounded to one decimal independently of each other, so
/// they need not sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
}

impl SentimentStats {
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn pct(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive_pct,
            Sentiment::Negative => self.negative_pct,
            Sentiment::Neutral => self.neutral_pct,
        }
    }
}

/// Outcome of an alert evaluation, carrying the percentage that produced it
/// so the banner can display the number without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertSignal {
    pub raised: bool,
    pub negative_pct: f64,
}

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: SentimentStats,
    pub alert: AlertSignal,
    pub posts: Vec<Post>,
    pub chat: Vec<ChatEntry>,
    pub generated_at: String,
}
