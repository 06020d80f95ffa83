use crate::types::Sentiment;

/// Keyword tables are matched as plain lowercase substrings. The positive
/// table is checked first: text matching both sets classifies as Positive.
pub const POSITIVE_KEYWORDS: [&str; 6] = ["good", "amazing", "great", "excellent", "happy", "love"];
pub const NEGATIVE_KEYWORDS: [&str; 6] = ["bad", "terrible", "worst", "delay", "angry", "hate"];

/// Maps raw text to a sentiment label.
///
/// Pure and total: any input is valid, and anything matching neither keyword
/// table (including the empty string) is Neutral. No negation handling, no
/// punctuation stripping, no phrase matching.
pub fn classify(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    if POSITIVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Sentiment::Positive
    } else if NEGATIVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// First three whitespace-delimited tokens, purely positional. No stop-word
/// filtering, no deduplication, no ranking.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split_whitespace().take(3).map(str::to_owned).collect()
}
