use crate::classifier::{classify, extract_keywords};
use crate::store::{ChatLog, PostStore};
use crate::types::{ChatSender, Post, PostDraft, TIMESTAMP_FORMAT};
use chrono::Local;
use tracing::debug;

/// Platform tag for user-submitted feedback.
pub const FEEDBACK_PLATFORM: &str = "User Feedback";

/// Placeholder intensity for user feedback, not derived from any confidence.
pub const FEEDBACK_SCORE: i32 = 1;

/// Fixed acknowledgement appended to the chat log after every submission.
pub const BOT_ACKNOWLEDGEMENT: &str =
    "Thank you for your feedback! Our AI will analyze and assist you.";

/// Fixed reply shown when the user asks for a response to a negative post.
pub const NEGATIVE_AUTO_RESPONSE: &str =
    "We're sorry you had this experience. Our support team will assist you shortly.";

/// Classifies raw feedback, stores it as a new post and records the chat
/// exchange. One synchronous transaction against the session state.
///
/// Empty or whitespace-only input is silently ignored: no post, no chat
/// entries, no error. Returns the stored post otherwise.
pub fn ingest(posts: &mut PostStore, chat: &mut ChatLog, raw_input: &str) -> Option<Post> {
    if raw_input.trim().is_empty() {
        debug!("Ignoring empty feedback input");
        return None;
    }

    let sentiment = classify(raw_input);
    debug!("Classified feedback as {}", sentiment);

    let id = posts.append(PostDraft {
        text: raw_input.to_string(),
        sentiment,
        score: FEEDBACK_SCORE,
        platform: FEEDBACK_PLATFORM.to_string(),
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        keywords: extract_keywords(raw_input),
    });

    chat.push(ChatSender::User, raw_input);
    chat.push(ChatSender::Bot, BOT_ACKNOWLEDGEMENT);

    posts.get(id).cloned()
}
