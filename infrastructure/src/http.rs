//! Shared HTTP client construction for outbound adapters

use std::time::Duration;

/// User-Agent sent with every outbound request
pub const USER_AGENT: &str = "TokenIdeator/1.0";

/// Build a client with a whole-request timeout.
pub(crate) fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
