use std::collections::VecDeque;

use serde::Serialize;

use crate::game::entity::card::RepoCard;

/// A player's ordered card queue. The front card is the one in play.
/// Mutation is crate-private: only round resolution moves cards, so the
/// total card count across both decks stays fixed after the deal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Deck {
    cards: VecDeque<RepoCard>,
}

impl Deck {
    pub fn from_cards(cards: Vec<RepoCard>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// The card currently in play, if any.
    pub fn front(&self) -> Option<&RepoCard> {
        self.cards.front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepoCard> {
        self.cards.iter()
    }

    pub(crate) fn take_front(&mut self) -> Option<RepoCard> {
        self.cards.pop_front()
    }

    pub(crate) fn append(&mut self, card: RepoCard) {
        self.cards.push_back(card);
    }

    /// Drawn round: the front card goes back under the deck unchanged.
    pub(crate) fn recycle_front(&mut self) {
        if let Some(card) = self.cards.pop_front() {
            self.cards.push_back(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn card(name: &str) -> RepoCard {
        RepoCard {
            id: 0,
            name: name.to_string(),
            description: None,
            stargazers_count: 1,
            forks_count: 0,
            watchers_count: 0,
            open_issues_count: 0,
            size: 0,
            language: None,
            html_url: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn recycle_front_rotates_without_changing_len() {
        let mut deck = Deck::from_cards(vec![card("a"), card("b"), card("c")]);
        deck.recycle_front();

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.front().unwrap().name, "b");
        assert_eq!(deck.iter().last().unwrap().name, "a");
    }

    #[test]
    fn recycle_front_on_empty_deck_is_a_no_op() {
        let mut deck = Deck::default();
        deck.recycle_front();
        assert!(deck.is_empty());
    }

    #[test]
    fn take_and_append_move_one_card() {
        let mut deck = Deck::from_cards(vec![card("a"), card("b")]);
        let taken = deck.take_front().unwrap();
        assert_eq!(taken.name, "a");
        assert_eq!(deck.len(), 1);

        deck.append(taken);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.front().unwrap().name, "b");
    }
}
