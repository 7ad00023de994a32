use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::game::entity::card::{http_client, RepoCard};
use crate::game::entity::deck::Deck;
use crate::game::entity::offline;
use crate::logger;
use crate::models::profile::Profile;
use crate::utils::errors::{FetchError, SetupError};
use crate::utils::logger::Logger;

/// Fewest cards a fetched account may bring to the table.
pub const MIN_DECK_SIZE: usize = 3;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatId {
    One,
    Two,
}

impl SeatId {
    pub fn opponent(&self) -> SeatId {
        match self {
            SeatId::One => SeatId::Two,
            SeatId::Two => SeatId::One,
        }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatId::One => f.write_str("P1"),
            SeatId::Two => f.write_str("P2"),
        }
    }
}

/// A seated player: fetched profile, dealt deck, running score, and
/// whether the seat plays unattended. Built once per match and dropped
/// whenever the session returns to setup.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub seat: SeatId,
    pub profile: Profile,
    pub deck: Deck,
    pub score: u32,
    pub unattended: bool,
}

impl Player {
    /// Assemble a player by fetching `username`'s profile and best deck.
    ///
    /// Rate limiting and transport failures fall back to synthetic data
    /// so the game stays playable offline; an unknown username and a
    /// too-small account are hard errors surfaced to the user.
    ///
    /// # Arguments
    /// * `username` - Account to deal the deck from; must be non-empty.
    /// * `seat` - Which side of the table the player occupies.
    /// * `unattended` - Whether the seat plays without a human.
    ///
    /// # Returns
    /// * `Ok(Player)` - A freshly seated player with score 0.
    /// * `Err(SetupError)` - The reason this match cannot start.
    pub async fn create(
        username: &str,
        seat: SeatId,
        unattended: bool,
    ) -> Result<Player, SetupError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SetupError::EmptyUsername);
        }

        let profile = match fetch_profile(username).await {
            Ok(profile) => profile,
            Err(FetchError::RateLimited) | Err(FetchError::Transport(_)) => {
                logger!(WARN, "Upstream unavailable, seating `{}` offline", username);
                offline::profile(username)
            }
            Err(error) => return Err(error.into()),
        };
        logger!(INFO, "Fetched `{}`'s profile", &profile.login);

        let cards = match RepoCard::fetch_best(username).await {
            Ok(cards) => cards,
            Err(FetchError::RateLimited) | Err(FetchError::Transport(_)) => {
                logger!(WARN, "Upstream unavailable, dealing `{}` a synthetic deck", username);
                offline::deck(username)
            }
            Err(error) => return Err(error.into()),
        };

        if cards.len() < MIN_DECK_SIZE {
            return Err(SetupError::InsufficientCards {
                username: username.to_string(),
                count: cards.len(),
            });
        }
        logger!(INFO, "Dealt {} cards into `{}`'s deck", cards.len(), username);

        Ok(Player {
            seat,
            profile,
            deck: Deck::from_cards(cards),
            score: 0,
            unattended,
        })
    }
}

/// Request one account profile from the upstream host.
///
/// # Returns
/// * `Ok(Profile)` - The decoded profile payload.
/// * `Err(FetchError)` - Classified upstream failure; the caller owns the
///   fallback policy.
async fn fetch_profile(username: &str) -> Result<Profile, FetchError> {
    let settings = crate::settings();
    let api_url = format!("{}/users/{}", settings.api_base_url, username);

    match http_client()?.get(api_url).send().await {
        Err(error) => Err(FetchError::Transport(error.to_string())),
        Ok(response) => match response.status() {
            StatusCode::OK => response
                .json::<Profile>()
                .await
                .map_err(|_| FetchError::InvalidBody(username.to_string())),
            StatusCode::NOT_FOUND => Err(FetchError::NotFound(username.to_string())),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited),
            _ => {
                let body = response.text().await.unwrap_or("NO MESSAGE".to_string());
                Err(FetchError::Upstream(body))
            }
        },
    }
}
