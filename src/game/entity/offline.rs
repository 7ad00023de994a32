use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::entity::card::{best_of, RepoCard, DECK_LIMIT};
use crate::models::profile::Profile;

const LANGUAGES: [&str; 5] = ["TypeScript", "JavaScript", "Rust", "Go", "Python"];

/// Stand-in profile for a seat when upstream is unreachable or throttled.
/// Labeled with the requested username so the match still reads right.
pub fn profile(username: &str) -> Profile {
    Profile {
        login: username.to_string(),
        avatar_url: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={username}"),
        name: Some(username.to_string()),
        bio: Some("Playing from cached data".to_string()),
        public_repos: DECK_LIMIT as u32,
        followers: 100,
        following: 10,
    }
}

/// A full synthetic deck: deterministic names, randomly parameterized
/// stats, strongest card first like a fetched deck.
pub fn deck(username: &str) -> Vec<RepoCard> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let cards = (0..DECK_LIMIT as u64)
        .map(|i| {
            let name = format!("{username}-repo-{i}");
            RepoCard {
                id: i,
                html_url: format!("https://github.com/{username}/{name}"),
                description: Some(format!("Stand-in repository for offline play {i}")),
                stargazers_count: rng.gen_range(100..5100),
                forks_count: rng.gen_range(0..1000),
                watchers_count: rng.gen_range(0..1000),
                open_issues_count: rng.gen_range(0..50),
                size: rng.gen_range(0..10_000),
                language: LANGUAGES
                    .choose(&mut rng)
                    .map(|language| language.to_string()),
                created_at: now,
                updated_at: now,
                name,
            }
        })
        .collect();

    best_of(cards)
}
