//! Trending topic adapters
//!
//! Implements the [`TrendingTopics`](ideator_application::TrendingTopics) port.

mod reddit;

pub use reddit::{DEFAULT_TRENDS_URL, RedditTrendingTopics};
