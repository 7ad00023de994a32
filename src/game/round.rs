use serde::Serialize;

use crate::game::entity::player::{Player, SeatId};
use crate::game::entity::stat::StatKind;
use crate::utils::errors::GameLogicError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundOutcome {
    Winner(SeatId),
    Draw,
}

/// One judged comparison between the two front cards. Judging is pure;
/// `apply` is the only place cards move between decks.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Round {
    pub stat: StatKind,
    /// Raw values for seat one and seat two, in that order.
    pub values: [u64; 2],
    pub outcome: RoundOutcome,
}

impl Round {
    /// Compare the chosen attribute on both front cards. The strictly
    /// greater value wins; equal values draw.
    pub fn judge(stat: StatKind, one: &Player, two: &Player) -> Result<Round, GameLogicError> {
        let (front_one, front_two) = match (one.deck.front(), two.deck.front()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(GameLogicError::EmptyDeck),
        };

        let values = [stat.value_of(front_one), stat.value_of(front_two)];
        let outcome = match values[0].cmp(&values[1]) {
            std::cmp::Ordering::Greater => RoundOutcome::Winner(SeatId::One),
            std::cmp::Ordering::Less => RoundOutcome::Winner(SeatId::Two),
            std::cmp::Ordering::Equal => RoundOutcome::Draw,
        };

        Ok(Round {
            stat,
            values,
            outcome,
        })
    }

    /// Value the winner played, then the value beaten.
    pub fn ranked_values(&self) -> (u64, u64) {
        match self.outcome {
            RoundOutcome::Winner(SeatId::Two) => (self.values[1], self.values[0]),
            _ => (self.values[0], self.values[1]),
        }
    }

    /// Move the front cards according to the outcome. On a win the
    /// winner's own card is re-queued first and the captured card lands
    /// behind it; the winner scores one point. A draw sends each card to
    /// the back of its own deck. Total card count never changes.
    pub fn apply(&self, one: &mut Player, two: &mut Player) {
        let total = one.deck.len() + two.deck.len();

        match self.outcome {
            RoundOutcome::Winner(seat) => {
                let (winner, loser) = match seat {
                    SeatId::One => (&mut *one, &mut *two),
                    SeatId::Two => (&mut *two, &mut *one),
                };
                if let Some(captured) = loser.deck.take_front() {
                    if let Some(own) = winner.deck.take_front() {
                        winner.deck.append(own);
                    }
                    winner.deck.append(captured);
                    winner.score += 1;
                }
            }
            RoundOutcome::Draw => {
                one.deck.recycle_front();
                two.deck.recycle_front();
            }
        }

        debug_assert_eq!(total, one.deck.len() + two.deck.len());
    }
}
