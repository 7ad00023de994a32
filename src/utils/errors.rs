use thiserror::Error;

use crate::game::phase::GamePhase;

/// Failures talking to the upstream repository host.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("user `{0}` was not found")]
    NotFound(String),

    #[error("upstream rate limit reached")]
    RateLimited,

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("could not decode the upstream response for `{0}`")]
    InvalidBody(String),

    #[error("unexpected upstream response: {0}")]
    Upstream(String),
}

/// Failures while assembling the two players for a new match. Every
/// variant sends the session back to setup; none is fatal.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("a username is required for both seats")]
    EmptyUsername,

    #[error("`{username}` has only {count} repositories; at least 3 are needed to deal a deck")]
    InsufficientCards { username: String, count: usize },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// A player action that the rules reject in the current situation.
#[derive(Debug, Error)]
pub enum GameLogicError {
    #[error("`{action}` is not allowed during the {phase} phase")]
    OutOfPhase {
        action: &'static str,
        phase: GamePhase,
    },

    #[error("both seats need a card in play to fight a round")]
    EmptyDeck,

    #[error("no round is waiting to be resolved")]
    NoPendingRound,

    #[error("no match is in progress")]
    NoMatch,
}

/// Umbrella for the session surface so callers handle one error type.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Logic(#[from] GameLogicError),
}
