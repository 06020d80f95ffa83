use iced::widget::{
    button, column, container, progress_bar, row, scrollable, text, text_input, Column,
};
use iced::{Alignment, Element, Length, Theme};
use std::collections::HashSet;
use travelmood_core::{
    ChatEntry, ChatSender, CoreError, Post, Sentiment, SentimentStats, SessionState,
    NEGATIVE_AUTO_RESPONSE,
};

#[derive(Debug, Clone)]
pub enum Message {
    FeedbackChanged(String),
    FeedbackSubmitted,
    PostToggled(u64),
    AutoRespond(u64),
}

pub struct App {
    session: SessionState,
    feedback_input: String,
    expanded: HashSet<u64>,
    responded: HashSet<u64>,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            feedback_input: String::new(),
            expanded: HashSet::new(),
            responded: HashSet::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Result<(), CoreError> {
        match message {
            Message::FeedbackChanged(value) => {
                self.feedback_input = value;
                Ok(())
            }
            Message::FeedbackSubmitted => {
                // Empty input is a silent no-op inside the core; keep the
                // typed text in that case so the user can finish it
                if let Some(post) = self.session.submit_feedback(&self.feedback_input) {
                    tracing::info!("Stored feedback post {} as {}", post.id, post.sentiment);
                    self.feedback_input.clear();
                }
                Ok(())
            }
            Message::PostToggled(id) => {
                if !self.expanded.remove(&id) {
                    self.expanded.insert(id);
                }
                Ok(())
            }
            Message::AutoRespond(id) => {
                self.responded.insert(id);
                Ok(())
            }
        }
    }

    pub fn view(&self) -> Element<Message, Theme> {
        let snapshot = self.session.snapshot();

        let header: Element<Message, Theme> = column![
            text("Travelmood Sentiment Monitor").size(28),
            text("Real-time social media sentiment analysis for travel experiences").size(14)
        ]
        .spacing(4)
        .into();

        let mut page = Column::new()
            .spacing(24)
            .push(header)
            .push(metric_row(&snapshot.stats));

        if snapshot.alert.raised {
            let banner: Element<Message, Theme> = container(
                text(format!(
                    "High Negative Sentiment Alert! {:.1}% of recent posts are negative.",
                    snapshot.alert.negative_pct
                ))
                .size(16),
            )
            .padding(10)
            .width(Length::Fill)
            .into();
            page = page.push(banner);
        }

        page = page
            .push(distribution_chart(&snapshot.stats))
            .push(self.posts_section(snapshot.posts))
            .push(self.feedback_section())
            .push(chat_section(snapshot.chat));

        scrollable(container(page).padding(20).width(Length::Fill)).into()
    }

    fn posts_section(&self, posts: Vec<Post>) -> Element<Message, Theme> {
        let mut list = Column::new().spacing(10);
        for post in posts {
            let summary = format!("{} | {} | {}", post.sentiment, post.platform, post.timestamp);
            let header = button(text(summary).size(14))
                .on_press(Message::PostToggled(post.id))
                .width(Length::Fill)
                .padding(8);

            let mut card = Column::new().spacing(5).push(header);
            if self.expanded.contains(&post.id) {
                card = card
                    .push(text(post.text).size(14))
                    .push(text(format!("Keywords: {}", post.keywords.join(", "))).size(12));

                if post.sentiment == Sentiment::Negative {
                    if self.responded.contains(&post.id) {
                        card = card
                            .push(text(format!("AI Response: {NEGATIVE_AUTO_RESPONSE}")).size(12));
                    } else {
                        card = card.push(
                            button(text(format!("Auto-Respond to Post {}", post.id)).size(12))
                                .on_press(Message::AutoRespond(post.id)),
                        );
                    }
                }
            }
            list = list.push(container(card).padding(5).width(Length::Fill));
        }

        column![text("Recent Social Media Posts").size(20), list]
            .spacing(10)
            .into()
    }

    fn feedback_section(&self) -> Element<Message, Theme> {
        let input = text_input("Type your travel feedback...", &self.feedback_input)
            .on_input(Message::FeedbackChanged)
            .on_submit(Message::FeedbackSubmitted)
            .padding(8);
        let send = button("Send").on_press(Message::FeedbackSubmitted).padding(8);

        column![
            text("AI Response Simulator").size(20),
            row![input, send].spacing(10).align_items(Alignment::Center)
        ]
        .spacing(10)
        .into()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn metric_row(stats: &SentimentStats) -> Element<'static, Message, Theme> {
    let metric = |label: &str, pct: f64, count: usize| -> Element<'static, Message, Theme> {
        column![
            text(label.to_string()).size(14),
            text(format!("{pct:.1}%")).size(24),
            text(format!("{count} posts")).size(12)
        ]
        .spacing(2)
        .into()
    };

    row![
        metric("Positive", stats.positive_pct, stats.positive),
        metric("Negative", stats.negative_pct, stats.negative),
        metric("Neutral", stats.neutral_pct, stats.neutral),
        column![
            text("Total Posts").size(14),
            text(stats.total.to_string()).size(24)
        ]
        .spacing(2)
    ]
    .spacing(40)
    .into()
}

fn distribution_chart(stats: &SentimentStats) -> Element<'static, Message, Theme> {
    let bar = |label: &str, pct: f64| -> Element<'static, Message, Theme> {
        row![
            text(label.to_string()).size(14).width(Length::Fixed(80.0)),
            progress_bar(0.0..=100.0, pct as f32).height(Length::Fixed(14.0)),
            text(format!("{pct:.1}%"))
                .size(14)
                .width(Length::Fixed(60.0))
        ]
        .spacing(10)
        .align_items(Alignment::Center)
        .into()
    };

    column![
        text("Sentiment Distribution").size(20),
        bar("Positive", stats.positive_pct),
        bar("Negative", stats.negative_pct),
        bar("Neutral", stats.neutral_pct)
    ]
    .spacing(8)
    .into()
}

fn chat_section(chat: Vec<ChatEntry>) -> Element<'static, Message, Theme> {
    let mut transcript = Column::new().spacing(5);
    if chat.is_empty() {
        transcript = transcript.push(text("No feedback submitted yet").size(12));
    }
    for entry in chat {
        let line = match entry.sender {
            ChatSender::User => format!("You: {}", entry.message),
            ChatSender::Bot => format!("AI: {}", entry.message),
        };
        transcript = transcript.push(text(line).size(13));
    }

    column![text("Conversation").size(20), transcript]
        .spacing(10)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears_input_and_appends_post() {
        let mut app = App::new();
        app.update(Message::FeedbackChanged("lovely trip".to_string()))
            .unwrap();
        app.update(Message::FeedbackSubmitted).unwrap();

        assert!(app.feedback_input.is_empty());
        assert_eq!(app.session.posts().len(), 7);
        assert_eq!(app.session.chat().len(), 2);
    }

    #[test]
    fn test_empty_submit_keeps_input_untouched() {
        let mut app = App::new();
        app.update(Message::FeedbackChanged("   ".to_string())).unwrap();
        app.update(Message::FeedbackSubmitted).unwrap();

        assert_eq!(app.feedback_input, "   ");
        assert_eq!(app.session.posts().len(), 6);
        assert!(app.session.chat().is_empty());
    }

    #[test]
    fn test_post_toggle_expands_and_collapses() {
        let mut app = App::new();
        app.update(Message::PostToggled(2)).unwrap();
        assert!(app.expanded.contains(&2));
        app.update(Message::PostToggled(2)).unwrap();
        assert!(!app.expanded.contains(&2));
    }

    #[test]
    fn test_auto_respond_is_sticky() {
        let mut app = App::new();
        app.update(Message::AutoRespond(2)).unwrap();
        app.update(Message::AutoRespond(2)).unwrap();
        assert!(app.responded.contains(&2));
        assert_eq!(app.responded.len(), 1);
    }
}
