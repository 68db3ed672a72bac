//! Reddit listing adapter (`/r/<sub>/top.json`).
//!
//! Titles are read from `data.children[].data.title`; children without a
//! title are skipped.

use crate::http::build_client;
use async_trait::async_trait;
use ideator_application::{TrendingTopics, TrendsError};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Weekly top posts of r/cryptocurrency
pub const DEFAULT_TRENDS_URL: &str = "https://www.reddit.com/r/cryptocurrency/top.json?t=week";

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
    #[serde(default)]
    title: Option<String>,
}

pub struct RedditTrendingTopics {
    client: reqwest::Client,
    url: String,
}

impl RedditTrendingTopics {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TrendsError> {
        let client =
            build_client(timeout).map_err(|e| TrendsError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl TrendingTopics for RedditTrendingTopics {
    async fn top_titles(&self, limit: usize) -> Result<Vec<String>, TrendsError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| TrendsError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendsError::HttpStatus(status.as_u16()));
        }

        let listing: Listing = response
            .json()
            .await
            .map_err(|e| TrendsError::InvalidResponse(e.to_string()))?;

        Ok(listing
            .data
            .children
            .into_iter()
            .filter_map(|child| child.data.title)
            .filter(|title| !title.trim().is_empty())
            .take(limit)
            .collect())
    }
}
