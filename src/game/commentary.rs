use rand::seq::SliceRandom;

use crate::game::entity::card::RepoCard;
use crate::game::entity::player::Player;
use crate::game::entity::stat::StatKind;

/// Flavor line announcing a fresh matchup. Template pick is uniform and
/// purely cosmetic.
pub fn matchup_intro(one: &Player, two: &Player) -> String {
    let (p1, p2) = (&one.profile.login, &two.profile.login);
    let lines = [
        format!("The stage is set! {p1} faces off against {p2}."),
        format!("It's a clash of code! Can {p1}'s deck hold against {p2}?"),
        format!("Battle initialized. {p1} vs {p2}. Who ships the better stats?"),
        format!("{p1} brings their strongest repos to challenge {p2}!"),
        format!("Two maintainers enter, one leaves! {p1} vs {p2}."),
        format!("{p1} vs {p2}. May the best codebase win!"),
    ];
    pick(&lines)
}

/// Flavor line for a decided round, interpolating the concrete numbers.
pub fn turn_line(
    winner: &str,
    loser: &str,
    stat: StatKind,
    winning_value: u64,
    losing_value: u64,
    card_name: &str,
) -> String {
    let label = stat.label();
    let lines = [
        format!("What a hit! {winner} takes it with {winning_value} {label}."),
        format!("{card_name} proves superior! {winning_value} vs {losing_value} {label}."),
        format!("{winner} dominates this round with a massive {winning_value} {label}!"),
        format!("{loser}'s {losing_value} {label} wasn't enough against {card_name}."),
        format!("Clean win for {winner} on {label}."),
        format!("{label} check! {winner}: {winning_value}, {loser}: {losing_value}."),
        format!("The community speaks! {winner} wins on {label}."),
        format!("{card_name} crushes the competition with {winning_value} {label}!"),
    ];
    pick(&lines)
}

/// Move policy for an unattended seat: the attribute with the highest
/// normalized strength among `available`, first-encountered order
/// breaking ties. A single greedy pass; nothing adaptive.
pub fn choose_stat(card: &RepoCard, available: &[StatKind]) -> Option<StatKind> {
    let mut best: Option<(StatKind, f64)> = None;
    for &stat in available {
        let score = stat.normalized(card);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((stat, score)),
        }
    }
    best.map(|(stat, _)| stat)
}

fn pick(lines: &[String]) -> String {
    lines
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default()
}
