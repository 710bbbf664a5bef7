//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Folds card values left to right, feeding the running total into each
/// card so an ace sees the score accumulated before it.
fn fold_score<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u8 {
    cards
        .into_iter()
        .fold(0u8, |score, card| score.saturating_add(card.value(score)))
}

/// An ordered hand of cards with its score.
///
/// The score is recomputed on every mutation, so it never lags the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    score: u8,
}

impl Hand {
    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards, score: 0 };
        hand.update();
        hand
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.update();
    }

    /// Recomputes and returns the score.
    ///
    /// An ace counted as 11 keeps that value when later cards arrive, so order
    /// matters: `{5, 6, ace}` scores 12 but `{5, ace, 6}` scores 22.
    pub fn update(&mut self) -> u8 {
        self.score = fold_score(&self.cards);
        self.score
    }

    /// Flips the card at `index`, returning it after the flip.
    pub fn flip(&mut self, index: usize) -> Option<Card> {
        let card = *self.cards.get_mut(index)?.flip();
        self.update();
        Some(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Score of every card, hidden or not.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Score of the face-up cards only.
    #[must_use]
    pub fn peek_score(&self) -> u8 {
        fold_score(self.cards.iter().filter(|card| !card.is_hidden()))
    }

    /// Returns whether the score is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.score > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
