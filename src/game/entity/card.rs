use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::utils::errors::FetchError;

/// How many repositories to ask the upstream host for in one page.
pub const REPO_PAGE_SIZE: usize = 100;
/// Cards dealt into a deck: the highest-starred repositories only.
pub const DECK_LIMIT: usize = 10;

/// One playable card, mapped 1:1 from the upstream repository payload.
/// Immutable once fetched; rounds only move cards between decks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoCard {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    pub open_issues_count: u64,
    /// Reported by upstream in kilobytes.
    pub size: u64,
    pub language: Option<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RepoCard {
    /// Request one page of `username`'s repositories, newest pushes first,
    /// and keep the strongest `DECK_LIMIT` of them by stargazer count.
    /// The deck is a player's best work, not their latest.
    ///
    /// # Returns
    /// * `Ok(Vec<RepoCard>)` - At most `DECK_LIMIT` cards, strongest first.
    /// * `Err(FetchError)` - Classified upstream failure; the caller owns
    ///   the fallback policy.
    pub async fn fetch_best(username: &str) -> Result<Vec<RepoCard>, FetchError> {
        let settings = crate::settings();
        let api_url = format!(
            "{}/users/{}/repos?sort=pushed&per_page={}",
            settings.api_base_url, username, REPO_PAGE_SIZE
        );

        match http_client()?.get(api_url).send().await {
            Err(error) => Err(FetchError::Transport(error.to_string())),
            Ok(response) => match response.status() {
                StatusCode::OK => {
                    let repos = response
                        .json::<Vec<RepoCard>>()
                        .await
                        .map_err(|_| FetchError::InvalidBody(username.to_string()))?;
                    Ok(best_of(repos))
                }
                StatusCode::NOT_FOUND => Err(FetchError::NotFound(username.to_string())),
                StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                    Err(FetchError::RateLimited)
                }
                _ => {
                    let body = response.text().await.unwrap_or("NO MESSAGE".to_string());
                    Err(FetchError::Upstream(body))
                }
            },
        }
    }
}

/// Strongest cards first, capped at one deck.
pub(crate) fn best_of(mut repos: Vec<RepoCard>) -> Vec<RepoCard> {
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(DECK_LIMIT);
    repos
}

/// The upstream API rejects requests without a user agent, so every
/// client carries one along with the configured timeout.
pub(crate) fn http_client() -> Result<reqwest::Client, FetchError> {
    let settings = crate::settings();
    reqwest::Client::builder()
        .user_agent(concat!("git-trunfo/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(settings.request_timeout_secs))
        .build()
        .map_err(|error| FetchError::Transport(error.to_string()))
}
