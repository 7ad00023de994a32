//! Turn-resolver integration tests: card transfer, scoring, draws, and
//! the conservation guarantee.

use chrono::Utc;
use proptest::prelude::*;

use git_trunfo::game::entity::card::RepoCard;
use git_trunfo::game::entity::deck::Deck;
use git_trunfo::game::entity::offline;
use git_trunfo::game::entity::player::{Player, SeatId};
use git_trunfo::game::entity::stat::StatKind;
use git_trunfo::game::round::{Round, RoundOutcome};

fn card(name: &str, stats: (u64, u64, u64, u64, u64)) -> RepoCard {
    let (stars, forks, watchers, issues, size) = stats;
    RepoCard {
        id: 0,
        name: name.to_string(),
        description: None,
        stargazers_count: stars,
        forks_count: forks,
        watchers_count: watchers,
        open_issues_count: issues,
        size,
        language: None,
        html_url: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn player(seat: SeatId, login: &str, cards: Vec<RepoCard>) -> Player {
    Player {
        seat,
        profile: offline::profile(login),
        deck: Deck::from_cards(cards),
        score: 0,
        unattended: false,
    }
}

#[test]
fn last_card_win_empties_the_loser() {
    // A's single card at 500 stars beats B's at 300: A ends with both
    // cards (own first), a point, and B ends empty.
    let mut one = player(SeatId::One, "a", vec![card("a0", (500, 0, 0, 0, 0))]);
    let mut two = player(SeatId::Two, "b", vec![card("b0", (300, 0, 0, 0, 0))]);

    let round = Round::judge(StatKind::Stars, &one, &two).unwrap();
    assert_eq!(round.outcome, RoundOutcome::Winner(SeatId::One));
    assert_eq!(round.values, [500, 300]);

    round.apply(&mut one, &mut two);

    let order: Vec<&str> = one.deck.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(order, vec!["a0", "b0"]);
    assert_eq!(two.deck.len(), 0);
    assert_eq!(one.score, 1);
    assert_eq!(two.score, 0);
}

#[test]
fn winner_requeues_own_card_before_the_captured_one() {
    let mut one = player(
        SeatId::One,
        "a",
        vec![card("a0", (10, 0, 0, 0, 0)), card("a1", (1, 0, 0, 0, 0))],
    );
    let mut two = player(
        SeatId::Two,
        "b",
        vec![card("b0", (5, 0, 0, 0, 0)), card("b1", (2, 0, 0, 0, 0))],
    );

    Round::judge(StatKind::Stars, &one, &two)
        .unwrap()
        .apply(&mut one, &mut two);

    let order: Vec<&str> = one.deck.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(order, vec!["a1", "a0", "b0"]);
    let order: Vec<&str> = two.deck.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(order, vec!["b1"]);
}

#[test]
fn seat_two_can_win_and_score() {
    let mut one = player(SeatId::One, "a", vec![card("a0", (0, 3, 0, 0, 0))]);
    let mut two = player(
        SeatId::Two,
        "b",
        vec![card("b0", (0, 9, 0, 0, 0)), card("b1", (0, 1, 0, 0, 0))],
    );

    let round = Round::judge(StatKind::Forks, &one, &two).unwrap();
    assert_eq!(round.outcome, RoundOutcome::Winner(SeatId::Two));
    assert_eq!(round.ranked_values(), (9, 3));

    round.apply(&mut one, &mut two);
    assert_eq!(one.deck.len(), 0);
    assert_eq!(two.deck.len(), 3);
    assert_eq!(two.score, 1);
    assert_eq!(one.score, 0);
}

#[test]
fn equal_values_draw_and_each_card_returns_home() {
    let mut one = player(
        SeatId::One,
        "a",
        vec![card("a0", (42, 0, 0, 0, 0)), card("a1", (7, 0, 0, 0, 0))],
    );
    let mut two = player(
        SeatId::Two,
        "b",
        vec![card("b0", (42, 0, 0, 0, 0)), card("b1", (8, 0, 0, 0, 0))],
    );

    let round = Round::judge(StatKind::Stars, &one, &two).unwrap();
    assert_eq!(round.outcome, RoundOutcome::Draw);

    round.apply(&mut one, &mut two);

    assert_eq!(one.deck.len(), 2);
    assert_eq!(two.deck.len(), 2);
    assert_eq!(one.score, 0);
    assert_eq!(two.score, 0);
    // Own card rotated to own back, never swapped across decks.
    assert_eq!(one.deck.front().unwrap().name, "a1");
    assert_eq!(one.deck.iter().last().unwrap().name, "a0");
    assert_eq!(two.deck.front().unwrap().name, "b1");
    assert_eq!(two.deck.iter().last().unwrap().name, "b0");
}

#[test]
fn judging_an_empty_deck_is_an_error() {
    let one = player(SeatId::One, "a", vec![]);
    let two = player(SeatId::Two, "b", vec![card("b0", (1, 0, 0, 0, 0))]);
    assert!(Round::judge(StatKind::Stars, &one, &two).is_err());
}

proptest! {
    #[test]
    fn every_resolution_conserves_the_card_total(
        deck_one in proptest::collection::vec((0..10_000u64, 0..1000u64, 0..1000u64, 0..100u64, 0..10_000u64), 1..6),
        deck_two in proptest::collection::vec((0..10_000u64, 0..1000u64, 0..1000u64, 0..100u64, 0..10_000u64), 1..6),
        stat_index in 0usize..5,
    ) {
        let stat = StatKind::ALL[stat_index];
        let cards = |prefix: &str, stats: &[(u64, u64, u64, u64, u64)]| {
            stats
                .iter()
                .enumerate()
                .map(|(i, s)| card(&format!("{prefix}{i}"), *s))
                .collect::<Vec<_>>()
        };
        let mut one = player(SeatId::One, "a", cards("a", &deck_one));
        let mut two = player(SeatId::Two, "b", cards("b", &deck_two));
        let total = one.deck.len() + two.deck.len();

        let round = Round::judge(stat, &one, &two).unwrap();
        round.apply(&mut one, &mut two);

        prop_assert_eq!(one.deck.len() + two.deck.len(), total);
        match round.outcome {
            RoundOutcome::Winner(SeatId::One) => {
                prop_assert_eq!(one.deck.len(), deck_one.len() + 1);
                prop_assert_eq!((one.score, two.score), (1, 0));
            }
            RoundOutcome::Winner(SeatId::Two) => {
                prop_assert_eq!(two.deck.len(), deck_two.len() + 1);
                prop_assert_eq!((one.score, two.score), (0, 1));
            }
            RoundOutcome::Draw => {
                prop_assert_eq!(one.deck.len(), deck_one.len());
                prop_assert_eq!((one.score, two.score), (0, 0));
            }
        }
    }
}
