use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::entity::card::RepoCard;

/// The five comparable card attributes, in the fixed order the game
/// enumerates them. The order doubles as the tie-break for the greedy
/// stat heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Stars,
    Forks,
    Watchers,
    OpenIssues,
    SizeKb,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Stars,
        StatKind::Forks,
        StatKind::Watchers,
        StatKind::OpenIssues,
        StatKind::SizeKb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Stars => "Stars",
            StatKind::Forks => "Forks",
            StatKind::Watchers => "Watchers",
            StatKind::OpenIssues => "Open Issues",
            StatKind::SizeKb => "Size (KB)",
        }
    }

    /// Raw value of this attribute on a card.
    pub fn value_of(&self, card: &RepoCard) -> u64 {
        match self {
            StatKind::Stars => card.stargazers_count,
            StatKind::Forks => card.forks_count,
            StatKind::Watchers => card.watchers_count,
            StatKind::OpenIssues => card.open_issues_count,
            StatKind::SizeKb => card.size,
        }
    }

    /// Divisor that maps the raw value onto a shared strength scale.
    fn divisor(&self) -> f64 {
        match self {
            StatKind::Stars => 100.0,
            StatKind::Forks => 20.0,
            StatKind::Watchers => 20.0,
            StatKind::OpenIssues => 10.0,
            StatKind::SizeKb => 5000.0,
        }
    }

    /// Attribute strength on the shared scale, used by the greedy pick.
    pub fn normalized(&self, card: &RepoCard) -> f64 {
        self.value_of(card) as f64 / self.divisor()
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
