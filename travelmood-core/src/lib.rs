pub mod aggregate;
pub mod alert;
pub mod classifier;
pub mod config;
pub mod error;
pub mod error_utils;
pub mod ingest;
pub mod session;
pub mod store;
pub mod types;

pub use error::*;
pub use error_utils::*;
pub use types::*;

pub use aggregate::aggregate;
pub use alert::{evaluate, NEGATIVE_ALERT_THRESHOLD_PCT};
pub use classifier::{classify, extract_keywords, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
pub use config::AppConfig;
pub use ingest::{BOT_ACKNOWLEDGEMENT, FEEDBACK_PLATFORM, FEEDBACK_SCORE, NEGATIVE_AUTO_RESPONSE};
pub use session::SessionState;
pub use store::{ChatLog, PostStore};
