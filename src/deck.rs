//! The deck and the handle used to share it between seats.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::sync::Mutex;

/// A deck lent to every seat at the table for the duration of a round.
pub type SharedDeck = Arc<Mutex<Deck>>;

/// An ordered deck of cards. The last card in the sequence is the top card.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled 52-card deck using the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.new_deck();
        deck
    }

    /// Creates an unshuffled deck from `cards`, drawing from the end first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Wraps the deck in a handle that can be lent to seats.
    #[must_use]
    pub fn shared(self) -> SharedDeck {
        Arc::new(Mutex::new(self))
    }

    /// Regenerates all 52 cards, rank by rank and suit by suit, then shuffles.
    pub fn new_deck(&mut self) {
        self.cards.clear();
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        self.shuffle();
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle(&mut self) -> &mut Self {
        self.cards.shuffle(&mut self.rng);
        self
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Removes and returns the top `amount` cards, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] without removing anything if
    /// fewer than `amount` cards remain.
    pub fn draw_many(&mut self, amount: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        let Some(split) = remaining.checked_sub(amount) else {
            return Err(DeckError::NotEnoughCards {
                requested: amount,
                remaining,
            });
        };
        Ok(self.cards.split_off(split))
    }

    /// Cards remaining, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
