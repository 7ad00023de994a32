use crate::game::commentary;
use crate::game::entity::player::{Player, SeatId};
use crate::game::entity::stat::StatKind;
use crate::game::phase::GamePhase;
use crate::game::round::{Round, RoundOutcome};
use crate::logger;
use crate::models::battle_log::{BattleLog, LogKind};
use crate::utils::errors::{GameError, GameLogicError, SetupError};
use crate::utils::logger::Logger;

/// Receipt for a loading attempt. Carries the session epoch at the time
/// loading began; quitting bumps the epoch, so a ticket from before the
/// quit can never commit player state afterwards.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    epoch: u64,
}

/// The whole game: two seats, the battle log, and the phase machine that
/// gates every player action. Single logical thread of control; the only
/// suspension points are the two loading fetches.
#[derive(Debug, Default)]
pub struct GameSession {
    phase: GamePhase,
    players: Option<(Player, Player)>,
    pending: Option<Round>,
    log: BattleLog,
    epoch: u64,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn players(&self) -> Option<(&Player, &Player)> {
        self.players.as_ref().map(|(one, two)| (one, two))
    }

    pub fn player(&self, seat: SeatId) -> Option<&Player> {
        self.players().map(|(one, two)| match seat {
            SeatId::One => one,
            SeatId::Two => two,
        })
    }

    /// The overall winner once the game is over: the seat whose deck
    /// still holds cards.
    pub fn winner(&self) -> Option<&Player> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        self.players()
            .map(|(one, two)| if two.deck.is_empty() { one } else { two })
    }

    /// Run a full match setup: resolve the unattended sentinel, fetch
    /// both players concurrently, and open the battle. Any failure lands
    /// back in setup with no partial player state.
    pub async fn start(&mut self, player_one: &str, player_two: &str) -> Result<(), GameError> {
        if player_one.trim().is_empty() || player_two.trim().is_empty() {
            return Err(SetupError::EmptyUsername.into());
        }

        let settings = crate::settings();
        let unattended = player_two
            .trim()
            .eq_ignore_ascii_case(&settings.cpu_sentinel);
        let seat_two_account = if unattended {
            settings.cpu_account.as_str()
        } else {
            player_two
        };

        let ticket = self.begin_loading()?;
        let (one, two) = tokio::join!(
            Player::create(player_one, SeatId::One, false),
            Player::create(seat_two_account, SeatId::Two, unattended),
        );

        match (one, two) {
            (Ok(one), Ok(two)) => {
                self.commit_match(ticket, one, two)?;
                Ok(())
            }
            (Err(error), _) | (_, Err(error)) => {
                self.abort_loading(ticket);
                Err(error.into())
            }
        }
    }

    /// Leave setup and mark the session as loading. The returned ticket
    /// must accompany the commit or abort that ends the attempt.
    pub fn begin_loading(&mut self) -> Result<LoadTicket, GameLogicError> {
        self.guard("load", GamePhase::Setup)?;
        self.log.clear();
        self.phase = GamePhase::Loading;
        Ok(LoadTicket { epoch: self.epoch })
    }

    /// Seat both fetched players and open the battle. Returns `false`
    /// without touching any state when the ticket is stale, meaning the
    /// user already quit this loading attempt.
    pub fn commit_match(
        &mut self,
        ticket: LoadTicket,
        one: Player,
        two: Player,
    ) -> Result<bool, GameLogicError> {
        if ticket.epoch != self.epoch {
            logger!(WARN, "Discarding a stale match load for `{}`", one.profile.login);
            return Ok(false);
        }
        self.guard("commit", GamePhase::Loading)?;

        self.log.push(
            format!("INIT: {} vs {}", one.profile.login, two.profile.login),
            LogKind::Info,
        );
        self.log
            .push(commentary::matchup_intro(&one, &two), LogKind::Commentary);

        self.players = Some((one, two));
        self.pending = None;
        self.phase = GamePhase::BattleStart;
        Ok(true)
    }

    /// Drop a failed loading attempt back to setup. Stale tickets are
    /// ignored the same way `commit_match` ignores them.
    pub fn abort_loading(&mut self, ticket: LoadTicket) {
        if ticket.epoch != self.epoch || self.phase != GamePhase::Loading {
            return;
        }
        self.phase = GamePhase::Setup;
        self.players = None;
        self.pending = None;
    }

    /// End the battle-start interlude. The cosmetic delay before this is
    /// the caller's pacing decision, not a rule.
    pub fn battle_ready(&mut self) -> Result<(), GameLogicError> {
        self.guard("battle-ready", GamePhase::BattleStart)?;
        self.phase = GamePhase::TurnPlayerSelect;
        Ok(())
    }

    /// Lock in the compared attribute, judge the round, and append its
    /// commentary. Cards do not move yet; `resolve_round` applies the
    /// outcome after the reveal.
    pub fn select_stat(&mut self, stat: StatKind) -> Result<Round, GameLogicError> {
        self.guard("select-stat", GamePhase::TurnPlayerSelect)?;
        let (one, two) = self.players.as_ref().ok_or(GameLogicError::NoMatch)?;

        let round = Round::judge(stat, one, two)?;
        match round.outcome {
            RoundOutcome::Winner(seat) => {
                let (winner, loser) = match seat {
                    SeatId::One => (one, two),
                    SeatId::Two => (two, one),
                };
                let (winning_value, losing_value) = round.ranked_values();
                let card_name = winner
                    .deck
                    .front()
                    .map(|card| card.name.as_str())
                    .unwrap_or_default();
                let line = commentary::turn_line(
                    &winner.profile.login,
                    &loser.profile.login,
                    stat,
                    winning_value,
                    losing_value,
                    card_name,
                );
                self.log.push(line, LogKind::Commentary);
            }
            RoundOutcome::Draw => {
                self.log.push(
                    format!(
                        "RESULT: DRAW at {} {}. Cards retained.",
                        round.values[0],
                        stat.label()
                    ),
                    LogKind::Combat,
                );
            }
        }

        self.pending = Some(round);
        self.phase = GamePhase::TurnResolve;
        Ok(round)
    }

    /// Apply the pending round: transfer cards, bump the score, and either
    /// hand the turn back or end the game the instant a deck runs dry.
    pub fn resolve_round(&mut self) -> Result<(), GameLogicError> {
        self.guard("resolve", GamePhase::TurnResolve)?;
        let round = self.pending.take().ok_or(GameLogicError::NoPendingRound)?;
        let (one, two) = self.players.as_mut().ok_or(GameLogicError::NoMatch)?;

        round.apply(one, two);

        if let RoundOutcome::Winner(seat) = round.outcome {
            let (winner, loser) = match seat {
                SeatId::One => (&*one, &*two),
                SeatId::Two => (&*two, &*one),
            };
            self.log.push(
                format!(
                    ">> {} wins the round and captures {}'s card.",
                    winner.profile.login, loser.profile.login
                ),
                LogKind::Combat,
            );
        }

        if one.deck.is_empty() || two.deck.is_empty() {
            let victor = if two.deck.is_empty() { &*one } else { &*two };
            self.log.push(
                format!("SESSION TERMINATED. WINNER: {}", victor.profile.login),
                LogKind::Commentary,
            );
            self.phase = GamePhase::GameOver;
        } else {
            self.phase = GamePhase::TurnPlayerSelect;
        }
        Ok(())
    }

    /// Abandon the match from any phase past setup. All player and log
    /// state is discarded, and in-flight loads are invalidated.
    pub fn quit(&mut self) -> Result<(), GameLogicError> {
        if self.phase == GamePhase::Setup {
            return Err(GameLogicError::OutOfPhase {
                action: "quit",
                phase: self.phase,
            });
        }
        self.reset();
        Ok(())
    }

    /// Start over after a finished game. Only valid once the game is over.
    pub fn restart(&mut self) -> Result<(), GameLogicError> {
        self.guard("restart", GamePhase::GameOver)?;
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.epoch += 1;
        self.phase = GamePhase::Setup;
        self.players = None;
        self.pending = None;
        self.log.clear();
    }

    fn guard(&self, action: &'static str, expected: GamePhase) -> Result<(), GameLogicError> {
        if self.phase != expected {
            return Err(GameLogicError::OutOfPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }
}
