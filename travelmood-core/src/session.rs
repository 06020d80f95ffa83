use crate::aggregate::aggregate;
use crate::alert::evaluate;
use crate::error::CoreError;
use crate::ingest::ingest;
use crate::store::{ChatLog, PostStore};
use crate::types::{ChatEntry, DashboardSnapshot, Post, TIMESTAMP_FORMAT};
use chrono::Local;

/// All mutable state of one dashboard session: the seeded post store and the
/// chat transcript. Owned by the presentation layer and passed into the core
/// by reference; lives for the process lifetime, never persisted.
#[derive(Debug)]
pub struct SessionState {
    posts: PostStore,
    chat: ChatLog,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            posts: PostStore::seeded(),
            chat: ChatLog::new(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.all()
    }

    pub fn chat(&self) -> &[ChatEntry] {
        self.chat.entries()
    }

    /// Runs one feedback submission through the ingestion pipeline. Returns
    /// the stored post, or None when the input was empty.
    pub fn submit_feedback(&mut self, raw_input: &str) -> Option<Post> {
        ingest(&mut self.posts, &mut self.chat, raw_input)
    }

    /// Recomputes aggregate stats and the alert signal over the current
    /// store. Always a fresh, full recomputation; consumers re-pull this
    /// after every mutation instead of receiving incremental updates.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let stats = aggregate(self.posts.all());
        let alert = evaluate(&stats);
        DashboardSnapshot {
            stats,
            alert,
            posts: self.posts.all().to_vec(),
            chat: self.chat.entries().to_vec(),
            generated_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn export_snapshot(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(CoreError::Serialization)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    #[test]
    fn test_new_session_is_seeded() {
        let session = SessionState::new();
        assert_eq!(session.posts().len(), 6);
        assert!(session.chat().is_empty());
    }

    #[test]
    fn test_snapshot_reflects_current_store() {
        let mut session = SessionState::new();
        let before = session.snapshot();
        assert_eq!(before.stats.total, 6);
        assert!(before.alert.raised);

        session.submit_feedback("what a great trip");
        let after = session.snapshot();
        assert_eq!(after.stats.total, 7);
        assert_eq!(after.stats.positive, 4);
        // 2/7 = 28.6%, below the cutoff: one submission flipped the alert
        assert!(!after.alert.raised);
    }

    #[test]
    fn test_snapshot_includes_chat() {
        let mut session = SessionState::new();
        session.submit_feedback("the hotel was bad");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.chat.len(), 2);
        assert_eq!(snapshot.posts.last().unwrap().sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_export_snapshot_round_trips() {
        let session = SessionState::new();
        let json = session.export_snapshot().unwrap();
        let decoded: DashboardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.stats, session.snapshot().stats);
        assert_eq!(decoded.posts.len(), 6);
    }
}
