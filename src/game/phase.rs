use std::fmt;

use serde::Serialize;

/// Where the session currently stands. Transitions are linear:
/// `Setup -> Loading -> BattleStart -> TurnPlayerSelect <-> TurnResolve`,
/// with `TurnResolve` ending the game instead once a deck runs dry, and
/// quit/restart dropping everything back to `Setup`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    #[default]
    Setup,
    Loading,
    BattleStart,
    TurnPlayerSelect,
    TurnResolve,
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Setup => "setup",
            GamePhase::Loading => "loading",
            GamePhase::BattleStart => "battle-start",
            GamePhase::TurnPlayerSelect => "turn-select",
            GamePhase::TurnResolve => "turn-resolve",
            GamePhase::GameOver => "game-over",
        };
        f.write_str(name)
    }
}
