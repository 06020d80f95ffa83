use crate::types::{ChatEntry, ChatSender, Post, PostDraft, Sentiment};
use tracing::debug;

/// Ordered, append-only collection of posts. Ids are assigned by the store
/// at insertion (max existing id + 1), never by callers, which keeps them
/// unique and strictly increasing for the lifetime of a session. There is no
/// update or delete.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        Self { posts: Vec::new() }
    }

    /// A store holding the six fixed sample posts every session starts with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for draft in seed_posts() {
            store.append(draft);
        }
        store
    }

    fn next_id(&self) -> u64 {
        self.posts.iter().map(|post| post.id).max().unwrap_or(0) + 1
    }

    /// Appends a post, assigning its id. Returns the assigned id.
    pub fn append(&mut self, draft: PostDraft) -> u64 {
        let id = self.next_id();
        debug!("Appending post {} ({}, {})", id, draft.sentiment, draft.platform);
        self.posts.push(Post {
            id,
            text: draft.text,
            sentiment: draft.sentiment,
            score: draft.score,
            platform: draft.platform,
            timestamp: draft.timestamp,
            keywords: draft.keywords,
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// All posts in insertion order.
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Append-only transcript of the feedback exchange, used only for display.
#[derive(Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, sender: ChatSender, message: impl Into<String>) {
        self.entries.push(ChatEntry {
            sender,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn seed_posts() -> [PostDraft; 6] {
    [
        PostDraft {
            text: "Amazing flight experience! The crew was incredibly helpful and the food was \
                   delicious ✈️😊"
                .to_string(),
            sentiment: Sentiment::Positive,
            score: 3,
            platform: "Twitter".to_string(),
            timestamp: "2024-08-21 14:30".to_string(),
            keywords: vec!["flight".to_string(), "crew".to_string(), "food".to_string()],
        },
        PostDraft {
            text: "Flight delayed 4 hours with no communication from airline staff. Absolutely \
                   terrible service 😡"
                .to_string(),
            sentiment: Sentiment::Negative,
            score: 4,
            platform: "Twitter".to_string(),
            timestamp: "2024-08-21 15:45".to_string(),
            keywords: vec![
                "flight".to_string(),
                "delayed".to_string(),
                "service".to_string(),
            ],
        },
        PostDraft {
            text: "Hotel room was clean and comfortable. Great location near the beach 🏨"
                .to_string(),
            sentiment: Sentiment::Positive,
            score: 2,
            platform: "Facebook".to_string(),
            timestamp: "2024-08-21 16:20".to_string(),
            keywords: vec![
                "hotel".to_string(),
                "room".to_string(),
                "location".to_string(),
            ],
        },
        PostDraft {
            text: "Lost my luggage and customer service is not helping at all. Worst vacation \
                   start ever 😞"
                .to_string(),
            sentiment: Sentiment::Negative,
            score: 3,
            platform: "Twitter".to_string(),
            timestamp: "2024-08-21 17:15".to_string(),
            keywords: vec!["luggage".to_string(), "service".to_string()],
        },
        PostDraft {
            text: "Beautiful sunset view from the airplane window. Perfect flying weather today 🌅"
                .to_string(),
            sentiment: Sentiment::Positive,
            score: 2,
            platform: "Instagram".to_string(),
            timestamp: "2024-08-21 18:00".to_string(),
            keywords: vec!["airplane".to_string(), "weather".to_string()],
        },
        PostDraft {
            text: "Airport security lines are moving slowly today. Standard experience nothing \
                   special"
                .to_string(),
            sentiment: Sentiment::Neutral,
            score: 0,
            platform: "Twitter".to_string(),
            timestamp: "2024-08-21 19:30".to_string(),
            keywords: vec!["airport".to_string(), "security".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str, sentiment: Sentiment) -> PostDraft {
        PostDraft {
            text: text.to_string(),
            sentiment,
            score: 1,
            platform: "Twitter".to_string(),
            timestamp: "2024-08-21 14:30".to_string(),
            keywords: Vec::new(),
        }
    }

    #[test]
    fn test_seeded_store() {
        let store = PostStore::seeded();
        assert_eq!(store.len(), 6);

        let ids: Vec<u64> = store.all().iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let positives = store
            .all()
            .iter()
            .filter(|post| post.sentiment == Sentiment::Positive)
            .count();
        let negatives = store
            .all()
            .iter()
            .filter(|post| post.sentiment == Sentiment::Negative)
            .count();
        let neutrals = store
            .all()
            .iter()
            .filter(|post| post.sentiment == Sentiment::Neutral)
            .count();
        assert_eq!((positives, negatives, neutrals), (3, 2, 1));
    }

    #[test]
    fn test_append_assigns_next_id() {
        let mut store = PostStore::seeded();
        let id = store.append(draft("new post", Sentiment::Neutral));
        assert_eq!(id, 7);
        assert_eq!(store.get(7).unwrap().text, "new post");
    }

    #[test]
    fn test_ids_strictly_increasing() {
        let mut store = PostStore::new();
        let mut last = 0;
        for i in 0..20 {
            let id = store.append(draft(&format!("post {i}"), Sentiment::Neutral));
            assert_eq!(id, last + 1);
            last = id;
        }
        assert_eq!(store.len(), 20);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = PostStore::new();
        store.append(draft("first", Sentiment::Positive));
        store.append(draft("second", Sentiment::Negative));
        let texts: Vec<&str> = store.all().iter().map(|post| post.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_chat_log_push_order() {
        let mut chat = ChatLog::new();
        assert!(chat.is_empty());

        chat.push(ChatSender::User, "hello");
        chat.push(ChatSender::Bot, "hi there");

        assert_eq!(chat.len(), 2);
        assert_eq!(chat.entries()[0].sender, ChatSender::User);
        assert_eq!(chat.entries()[0].message, "hello");
        assert_eq!(chat.entries()[1].sender, ChatSender::Bot);
    }
}
